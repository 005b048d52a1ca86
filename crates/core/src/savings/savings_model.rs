use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Queryable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::savings_goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub user_id: String,
    pub goal_name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub allocation_type: String,
    pub allocation_value: f64,
    pub frequency: String,
    pub color: String,
    pub priority: i32,
    pub is_active: bool,
    pub is_completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::savings_goals)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingsGoal {
    pub id: Option<String>,
    pub user_id: String,
    pub goal_name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub allocation_type: String,
    pub allocation_value: f64,
    pub frequency: String,
    pub color: String,
    pub priority: i32,
    pub is_active: bool,
    pub is_completed: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalCreate {
    pub goal_name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub allocation_type: String,
    pub allocation_value: f64,
    pub frequency: String,
    pub color: Option<String>,
    #[serde(default)]
    pub priority: i32,
}

/// Partial update of a goal's mutable fields.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalPatch {
    pub goal_name: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub allocation_type: Option<String>,
    pub allocation_value: Option<f64>,
    pub frequency: Option<String>,
    pub color: Option<String>,
    pub priority: Option<i32>,
}

/// Changeset applied by the repository; absent fields keep their value.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::savings_goals)]
pub struct SavingsGoalChanges {
    pub goal_name: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub allocation_type: Option<String>,
    pub allocation_value: Option<f64>,
    pub frequency: Option<String>,
    pub color: Option<String>,
    pub priority: Option<i32>,
    pub is_completed: Option<bool>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Goal row enriched with the derived display figures.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalView {
    #[serde(flatten)]
    pub goal: SavingsGoal,
    pub calculated_allocation: f64,
    pub progress: f64,
    pub remaining: f64,
}

/// Aggregate figures recomputed on every goals-list read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub total_monthly_allocation: f64,
    pub total_overall_allocation: f64,
    pub total_allocation: f64,
    pub active_goals: usize,
    pub completed_goals: usize,
    pub total_currently_saved: f64,
    pub total_target_amount: f64,
    pub overall_progress_percentage: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoalsResponse {
    pub goals: Vec<SavingsGoalView>,
    pub summary: SavingsSummary,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContributionInput {
    pub amount: f64,
}
