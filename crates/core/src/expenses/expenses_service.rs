use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::expenses::expenses_model::{Expense, ExpenseCreate, NewExpense};
use crate::expenses::expenses_traits::{ExpenseRepositoryTrait, ExpenseServiceTrait};
use crate::utils::parse_month_param;

pub struct ExpenseService {
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl ExpenseService {
    pub fn new(expense_repository: Arc<dyn ExpenseRepositoryTrait>) -> Self {
        ExpenseService { expense_repository }
    }
}

fn validate_expense(input: &ExpenseCreate) -> Result<()> {
    if input.category.trim().is_empty() {
        return Err(ValidationError::MissingField("category".to_string()).into());
    }
    if input.amount <= 0.0 {
        return Err(ValidationError::InvalidInput("Amount must be positive".to_string()).into());
    }
    Ok(())
}

#[async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn create_expense(&self, user_id: &str, input: ExpenseCreate) -> Result<Expense> {
        validate_expense(&input)?;

        let new_expense = NewExpense {
            id: None,
            user_id: user_id.to_string(),
            category: input.category.trim().to_string(),
            amount: input.amount,
            expense_date: input.expense_date,
            description: input.description,
            merchant: input.merchant,
            is_recurring: input.is_recurring,
            created_at: None,
        };

        self.expense_repository.insert_new_expense(new_expense)
    }

    fn get_expenses(&self, user_id: &str, month: Option<&str>) -> Result<Vec<Expense>> {
        let range = month.map(parse_month_param).transpose()?;
        self.expense_repository.load_expenses(user_id, range)
    }

    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()> {
        let affected = self.expense_repository.delete_expense(user_id, expense_id)?;
        if affected == 0 {
            return Err(Error::NotFound("expense record".to_string()));
        }
        Ok(())
    }
}
