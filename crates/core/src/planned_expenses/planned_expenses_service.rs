use async_trait::async_trait;
use log::{debug, error};
use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::expenses::{ExpenseRepositoryTrait, NewExpense};
use crate::planned_expenses::planned_expenses_model::{
    NewPlannedExpense, PlannedExpense, PlannedExpenseCreate, PlannedExpenseOutcome,
};
use crate::planned_expenses::planned_expenses_traits::{
    PlannedExpenseRepositoryTrait, PlannedExpenseServiceTrait,
};
use crate::utils::today;

pub struct PlannedExpenseService {
    planned_repository: Arc<dyn PlannedExpenseRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl PlannedExpenseService {
    pub fn new(
        planned_repository: Arc<dyn PlannedExpenseRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        PlannedExpenseService {
            planned_repository,
            expense_repository,
        }
    }
}

fn validate_planned_expense(input: &PlannedExpenseCreate) -> Result<()> {
    if input.title.trim().is_empty() {
        return Err(ValidationError::MissingField("title".to_string()).into());
    }
    if input.category.trim().is_empty() {
        return Err(ValidationError::MissingField("category".to_string()).into());
    }
    if input.amount <= 0.0 {
        return Err(ValidationError::InvalidInput("Amount must be positive".to_string()).into());
    }
    Ok(())
}

#[async_trait]
impl PlannedExpenseServiceTrait for PlannedExpenseService {
    async fn create_planned_expense(
        &self,
        user_id: &str,
        input: PlannedExpenseCreate,
    ) -> Result<PlannedExpenseOutcome> {
        validate_planned_expense(&input)?;

        // A date that is already due would need converting on the very next
        // read, so it goes straight into the expense table.
        if input.planned_date <= today() {
            let expense = self.expense_repository.insert_new_expense(NewExpense {
                id: None,
                user_id: user_id.to_string(),
                category: input.category.trim().to_string(),
                amount: input.amount,
                expense_date: input.planned_date,
                description: input.description,
                merchant: Some(input.title.trim().to_string()),
                is_recurring: false,
                created_at: None,
            })?;
            return Ok(PlannedExpenseOutcome {
                converted_to_expense: true,
                planned_expense: None,
                expense: Some(expense),
            });
        }

        let planned = self
            .planned_repository
            .insert_new_planned_expense(NewPlannedExpense {
                id: None,
                user_id: user_id.to_string(),
                title: input.title.trim().to_string(),
                category: input.category.trim().to_string(),
                amount: input.amount,
                planned_date: input.planned_date,
                description: input.description,
                is_paid: false,
                created_at: None,
            })?;

        Ok(PlannedExpenseOutcome {
            converted_to_expense: false,
            planned_expense: Some(planned),
            expense: None,
        })
    }

    fn get_planned_expenses(&self, user_id: &str) -> Result<Vec<PlannedExpense>> {
        // Eager maintenance: the list a caller sees never contains a due row.
        if let Err(e) = self.roll_forward(user_id) {
            error!("Planned expense roll-forward failed: {}", e);
        }
        self.planned_repository.load_upcoming(user_id, today())
    }

    fn roll_forward(&self, user_id: &str) -> Result<usize> {
        let as_of = today();
        let due = self.planned_repository.load_due(user_id, as_of)?;
        if due.is_empty() {
            return Ok(0);
        }

        debug!("Rolling forward {} due planned expense(s)", due.len());

        let mut converted = 0;
        for planned in due {
            let new_expense = NewExpense {
                id: None,
                user_id: planned.user_id.clone(),
                category: planned.category.clone(),
                amount: planned.amount,
                expense_date: planned.planned_date,
                description: planned.description.clone(),
                merchant: Some(planned.title.clone()),
                is_recurring: false,
                created_at: Some(planned.created_at),
            };

            match self
                .planned_repository
                .convert_to_expense(user_id, &planned.id, new_expense)
            {
                Ok(()) => converted += 1,
                Err(e) => {
                    // One stuck record must not block the rest of the batch.
                    error!(
                        "Failed to convert planned expense {} ('{}'): {}",
                        planned.id, planned.title, e
                    );
                }
            }
        }

        Ok(converted)
    }

    async fn delete_planned_expense(&self, user_id: &str, planned_expense_id: &str) -> Result<()> {
        let affected = self
            .planned_repository
            .delete_planned_expense(user_id, planned_expense_id)?;
        if affected == 0 {
            return Err(Error::NotFound("planned expense".to_string()));
        }
        Ok(())
    }
}
