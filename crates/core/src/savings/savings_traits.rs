use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::Result;
use crate::savings::savings_model::{
    NewSavingsGoal, SavingsGoal, SavingsGoalChanges, SavingsGoalCreate, SavingsGoalPatch,
    SavingsGoalsResponse,
};

/// Trait for savings goal repository operations
pub trait SavingsGoalRepositoryTrait: Send + Sync {
    fn load_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;
    /// Active goals ordered by priority, highest first.
    fn load_active_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;
    fn find_goal(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal>;
    fn insert_new_goal(&self, new_goal: NewSavingsGoal) -> Result<SavingsGoal>;
    fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        changes: SavingsGoalChanges,
    ) -> Result<SavingsGoal>;
    /// Writes a goal's saved amount and completion flag in one statement.
    fn set_progress(
        &self,
        user_id: &str,
        goal_id: &str,
        current: f64,
        completed: bool,
        updated: NaiveDateTime,
    ) -> Result<usize>;
    fn set_active(
        &self,
        user_id: &str,
        goal_id: &str,
        active: bool,
        updated: NaiveDateTime,
    ) -> Result<usize>;
    fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;
}

/// Trait for savings goal service operations
#[async_trait]
pub trait SavingsGoalServiceTrait: Send + Sync {
    async fn create_goal(&self, user_id: &str, input: SavingsGoalCreate) -> Result<SavingsGoal>;
    fn get_goals_with_summary(&self, user_id: &str) -> Result<SavingsGoalsResponse>;
    async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        patch: SavingsGoalPatch,
    ) -> Result<SavingsGoal>;
    /// Flips a goal between active and paused.
    async fn toggle_goal(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal>;
    /// Manually adds a positive amount to a goal's saved total.
    async fn contribute(&self, user_id: &str, goal_id: &str, amount: f64) -> Result<SavingsGoal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()>;
    /// Applies automatic contributions for one income event across all
    /// active monthly goals. Per-goal failures are logged, never returned.
    async fn allocate_from_income(
        &self,
        user_id: &str,
        income_amount: f64,
        income_date: NaiveDate,
    ) -> Result<()>;
}
