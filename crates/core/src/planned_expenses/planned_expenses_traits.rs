use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::Result;
use crate::expenses::NewExpense;
use crate::planned_expenses::planned_expenses_model::{
    NewPlannedExpense, PlannedExpense, PlannedExpenseCreate, PlannedExpenseOutcome,
};

/// Trait for planned expense repository operations
pub trait PlannedExpenseRepositoryTrait: Send + Sync {
    fn insert_new_planned_expense(
        &self,
        new_planned_expense: NewPlannedExpense,
    ) -> Result<PlannedExpense>;
    /// Rows whose planned date has arrived (`planned_date <= as_of`).
    fn load_due(&self, user_id: &str, as_of: NaiveDate) -> Result<Vec<PlannedExpense>>;
    /// Strictly-future rows (`planned_date > as_of`).
    fn load_upcoming(&self, user_id: &str, as_of: NaiveDate) -> Result<Vec<PlannedExpense>>;
    /// Atomically replaces one planned row with the given expense row.
    fn convert_to_expense(
        &self,
        user_id: &str,
        planned_expense_id: &str,
        new_expense: NewExpense,
    ) -> Result<()>;
    fn delete_planned_expense(&self, user_id: &str, planned_expense_id: &str) -> Result<usize>;
}

/// Trait for planned expense service operations
#[async_trait]
pub trait PlannedExpenseServiceTrait: Send + Sync {
    async fn create_planned_expense(
        &self,
        user_id: &str,
        input: PlannedExpenseCreate,
    ) -> Result<PlannedExpenseOutcome>;
    /// Runs the roll-forward, then returns the remaining (future) rows.
    fn get_planned_expenses(&self, user_id: &str) -> Result<Vec<PlannedExpense>>;
    /// Converts every due planned expense into a real expense. Returns the
    /// number of rows converted.
    fn roll_forward(&self, user_id: &str) -> Result<usize>;
    async fn delete_planned_expense(&self, user_id: &str, planned_expense_id: &str) -> Result<()>;
}
