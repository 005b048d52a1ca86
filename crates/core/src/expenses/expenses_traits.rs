use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::expenses::expenses_model::{Expense, ExpenseCreate, NewExpense};

/// Trait for expense repository operations
pub trait ExpenseRepositoryTrait: Send + Sync {
    fn insert_new_expense(&self, new_expense: NewExpense) -> Result<Expense>;
    fn load_expenses(
        &self,
        user_id: &str,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<Expense>>;
    fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<usize>;
}

/// Trait for expense service operations
#[async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn create_expense(&self, user_id: &str, input: ExpenseCreate) -> Result<Expense>;
    fn get_expenses(&self, user_id: &str, month: Option<&str>) -> Result<Vec<Expense>>;
    async fn delete_expense(&self, user_id: &str, expense_id: &str) -> Result<()>;
}
