use async_trait::async_trait;
use chrono::NaiveDate;

use crate::budgets::budgets_model::{Budget, BudgetCreate, BudgetProgress, NewBudget};
use crate::errors::Result;

/// Trait for budget repository operations
pub trait BudgetRepositoryTrait: Send + Sync {
    fn insert_new_budget(&self, new_budget: NewBudget) -> Result<Budget>;
    fn load_budgets(&self, user_id: &str) -> Result<Vec<Budget>>;
    /// Budgets whose active period intersects `[period_start, period_end)`.
    fn load_active_budgets(
        &self,
        user_id: &str,
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Result<Vec<Budget>>;
    fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<usize>;
}

/// Trait for budget service operations
#[async_trait]
pub trait BudgetServiceTrait: Send + Sync {
    async fn create_budget(&self, user_id: &str, input: BudgetCreate) -> Result<Budget>;
    /// `month` as `YYYY-MM`; `None` means budgets active today.
    fn get_budgets(&self, user_id: &str, month: Option<&str>) -> Result<Vec<Budget>>;
    fn get_budget_progress(&self, user_id: &str, month: Option<&str>)
        -> Result<Vec<BudgetProgress>>;
    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()>;
}
