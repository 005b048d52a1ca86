use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::{debug, error};
use std::sync::Arc;

use crate::constants::{
    ALLOCATION_TYPE_FIXED, ALLOCATION_TYPE_PERCENTAGE, DEFAULT_GOAL_COLOR, FREQUENCY_MONTHLY,
    FREQUENCY_OVERALL,
};
use crate::errors::{Error, Result, ValidationError};
use crate::income::IncomeRepositoryTrait;
use crate::savings::savings_model::{
    NewSavingsGoal, SavingsGoal, SavingsGoalChanges, SavingsGoalCreate, SavingsGoalPatch,
    SavingsGoalView, SavingsGoalsResponse, SavingsSummary,
};
use crate::savings::savings_traits::{SavingsGoalRepositoryTrait, SavingsGoalServiceTrait};
use crate::utils::{month_bounds, today};

pub struct SavingsGoalService {
    goal_repository: Arc<dyn SavingsGoalRepositoryTrait>,
    income_repository: Arc<dyn IncomeRepositoryTrait>,
}

impl SavingsGoalService {
    pub fn new(
        goal_repository: Arc<dyn SavingsGoalRepositoryTrait>,
        income_repository: Arc<dyn IncomeRepositoryTrait>,
    ) -> Self {
        SavingsGoalService {
            goal_repository,
            income_repository,
        }
    }

    fn current_monthly_income(&self, user_id: &str) -> Result<f64> {
        let range = month_bounds(today());
        let incomes = self.income_repository.load_incomes(user_id, Some(range))?;
        Ok(incomes.iter().map(|i| i.amount).sum())
    }
}

fn validate_allocation(allocation_type: &str, allocation_value: f64, frequency: &str) -> Result<()> {
    match allocation_type {
        ALLOCATION_TYPE_FIXED | ALLOCATION_TYPE_PERCENTAGE => {}
        other => {
            return Err(ValidationError::InvalidInput(format!(
                "Unknown allocation type '{}'",
                other
            ))
            .into())
        }
    }
    match frequency {
        FREQUENCY_MONTHLY | FREQUENCY_OVERALL => {}
        other => {
            return Err(
                ValidationError::InvalidInput(format!("Unknown frequency '{}'", other)).into(),
            )
        }
    }
    if allocation_value < 0.0 {
        return Err(ValidationError::InvalidInput(
            "Allocation value must not be negative".to_string(),
        )
        .into());
    }
    if allocation_type == ALLOCATION_TYPE_PERCENTAGE && allocation_value > 100.0 {
        return Err(ValidationError::InvalidInput(
            "Percentage allocation must be between 0 and 100".to_string(),
        )
        .into());
    }
    Ok(())
}

/// Automatic contribution for one income event. Only called for monthly
/// goals; the income date plays no role in the amount.
fn contribution_for(goal: &SavingsGoal, income_amount: f64) -> f64 {
    match goal.allocation_type.as_str() {
        ALLOCATION_TYPE_PERCENTAGE => income_amount * goal.allocation_value / 100.0,
        _ => goal.allocation_value,
    }
}

/// Expected-next-contribution figure shown in list responses. For overall
/// goals this is the amount still needed, not something the engine will add.
pub fn calculated_allocation(goal: &SavingsGoal, monthly_income: f64) -> f64 {
    if !goal.is_active {
        return 0.0;
    }
    match goal.frequency.as_str() {
        FREQUENCY_MONTHLY => match goal.allocation_type.as_str() {
            ALLOCATION_TYPE_PERCENTAGE => monthly_income * goal.allocation_value / 100.0,
            _ => goal.allocation_value,
        },
        _ => (goal.target_amount - goal.current_amount).max(0.0),
    }
}

pub fn goal_progress(goal: &SavingsGoal) -> f64 {
    if goal.target_amount <= 0.0 {
        return 0.0;
    }
    (goal.current_amount / goal.target_amount * 100.0).min(100.0)
}

fn build_summary(goals: &[SavingsGoal], monthly_income: f64) -> SavingsSummary {
    let total_monthly_allocation: f64 = goals
        .iter()
        .filter(|g| g.is_active && g.frequency == FREQUENCY_MONTHLY)
        .map(|g| calculated_allocation(g, monthly_income))
        .sum();
    let total_overall_allocation: f64 = goals
        .iter()
        .filter(|g| g.is_active && g.frequency == FREQUENCY_OVERALL)
        .map(|g| calculated_allocation(g, monthly_income))
        .sum();

    // Paused and completed goals still count as money set aside
    let total_currently_saved: f64 = goals.iter().map(|g| g.current_amount).sum();
    let total_target_amount: f64 = goals.iter().map(|g| g.target_amount).sum();
    let overall_progress_percentage = if total_target_amount > 0.0 {
        (total_currently_saved / total_target_amount * 100.0).min(100.0)
    } else {
        0.0
    };

    SavingsSummary {
        total_monthly_allocation,
        total_overall_allocation,
        total_allocation: total_monthly_allocation + total_overall_allocation,
        active_goals: goals.iter().filter(|g| g.is_active).count(),
        completed_goals: goals.iter().filter(|g| g.is_completed).count(),
        total_currently_saved,
        total_target_amount,
        overall_progress_percentage,
    }
}

#[async_trait]
impl SavingsGoalServiceTrait for SavingsGoalService {
    async fn create_goal(&self, user_id: &str, input: SavingsGoalCreate) -> Result<SavingsGoal> {
        if input.goal_name.trim().is_empty() {
            return Err(ValidationError::MissingField("goalName".to_string()).into());
        }
        if input.target_amount <= 0.0 {
            return Err(ValidationError::InvalidInput(
                "Target amount must be positive".to_string(),
            )
            .into());
        }
        if input.current_amount < 0.0 {
            return Err(ValidationError::InvalidInput(
                "Current amount must not be negative".to_string(),
            )
            .into());
        }
        validate_allocation(&input.allocation_type, input.allocation_value, &input.frequency)?;

        self.goal_repository.insert_new_goal(NewSavingsGoal {
            id: None,
            user_id: user_id.to_string(),
            goal_name: input.goal_name.trim().to_string(),
            target_amount: input.target_amount,
            current_amount: input.current_amount,
            target_date: input.target_date,
            description: input.description,
            allocation_type: input.allocation_type,
            allocation_value: input.allocation_value,
            frequency: input.frequency,
            color: input
                .color
                .unwrap_or_else(|| DEFAULT_GOAL_COLOR.to_string()),
            priority: input.priority,
            is_active: true,
            is_completed: input.current_amount >= input.target_amount,
            created_at: None,
            updated_at: None,
        })
    }

    fn get_goals_with_summary(&self, user_id: &str) -> Result<SavingsGoalsResponse> {
        let goals = self.goal_repository.load_goals(user_id)?;
        let monthly_income = self.current_monthly_income(user_id)?;

        let summary = build_summary(&goals, monthly_income);
        let views = goals
            .into_iter()
            .map(|goal| {
                let allocation = calculated_allocation(&goal, monthly_income);
                let progress = goal_progress(&goal);
                let remaining = (goal.target_amount - goal.current_amount).max(0.0);
                SavingsGoalView {
                    goal,
                    calculated_allocation: allocation,
                    progress,
                    remaining,
                }
            })
            .collect();

        Ok(SavingsGoalsResponse {
            goals: views,
            summary,
        })
    }

    async fn update_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        patch: SavingsGoalPatch,
    ) -> Result<SavingsGoal> {
        let existing = self.goal_repository.find_goal(user_id, goal_id)?;

        if let Some(name) = &patch.goal_name {
            if name.trim().is_empty() {
                return Err(ValidationError::MissingField("goalName".to_string()).into());
            }
        }

        let target = patch.target_amount.unwrap_or(existing.target_amount);
        let current = patch.current_amount.unwrap_or(existing.current_amount);
        if target <= 0.0 {
            return Err(ValidationError::InvalidInput(
                "Target amount must be positive".to_string(),
            )
            .into());
        }
        if current < 0.0 {
            return Err(ValidationError::InvalidInput(
                "Current amount must not be negative".to_string(),
            )
            .into());
        }

        let allocation_type = patch
            .allocation_type
            .clone()
            .unwrap_or_else(|| existing.allocation_type.clone());
        let allocation_value = patch.allocation_value.unwrap_or(existing.allocation_value);
        let frequency = patch
            .frequency
            .clone()
            .unwrap_or_else(|| existing.frequency.clone());
        validate_allocation(&allocation_type, allocation_value, &frequency)?;

        // Completion is latched: crossing the target sets it, lowering the
        // saved amount afterwards never clears it.
        let completed = existing.is_completed || current >= target;

        self.goal_repository.update_goal(
            user_id,
            goal_id,
            SavingsGoalChanges {
                goal_name: patch.goal_name.map(|n| n.trim().to_string()),
                target_amount: patch.target_amount,
                current_amount: patch.current_amount,
                target_date: patch.target_date,
                description: patch.description,
                allocation_type: patch.allocation_type,
                allocation_value: patch.allocation_value,
                frequency: patch.frequency,
                color: patch.color,
                priority: patch.priority,
                is_completed: Some(completed),
                updated_at: Some(Utc::now().naive_utc()),
            },
        )
    }

    async fn toggle_goal(&self, user_id: &str, goal_id: &str) -> Result<SavingsGoal> {
        let goal = self.goal_repository.find_goal(user_id, goal_id)?;
        self.goal_repository.set_active(
            user_id,
            goal_id,
            !goal.is_active,
            Utc::now().naive_utc(),
        )?;
        self.goal_repository.find_goal(user_id, goal_id)
    }

    async fn contribute(&self, user_id: &str, goal_id: &str, amount: f64) -> Result<SavingsGoal> {
        if amount <= 0.0 {
            return Err(ValidationError::InvalidInput(
                "Contribution amount must be positive".to_string(),
            )
            .into());
        }

        let goal = self.goal_repository.find_goal(user_id, goal_id)?;
        let new_amount = goal.current_amount + amount;
        let completed = goal.is_completed || new_amount >= goal.target_amount;

        self.goal_repository.set_progress(
            user_id,
            goal_id,
            new_amount,
            completed,
            Utc::now().naive_utc(),
        )?;
        self.goal_repository.find_goal(user_id, goal_id)
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<()> {
        let affected = self.goal_repository.delete_goal(user_id, goal_id)?;
        if affected == 0 {
            return Err(Error::NotFound("savings goal".to_string()));
        }
        Ok(())
    }

    async fn allocate_from_income(
        &self,
        user_id: &str,
        income_amount: f64,
        income_date: NaiveDate,
    ) -> Result<()> {
        debug!(
            "Allocating savings contributions for income of {} on {}",
            income_amount, income_date
        );

        // Priority order is preserved for a future capped-funding policy;
        // today every qualifying goal receives its full contribution.
        let goals = self.goal_repository.load_active_goals(user_id)?;
        for goal in goals {
            if goal.frequency != FREQUENCY_MONTHLY {
                continue;
            }

            let contribution = contribution_for(&goal, income_amount);
            if contribution <= 0.0 {
                continue;
            }

            let new_amount = goal.current_amount + contribution;
            let completed = goal.is_completed || new_amount >= goal.target_amount;

            if let Err(e) = self.goal_repository.set_progress(
                user_id,
                &goal.id,
                new_amount,
                completed,
                Utc::now().naive_utc(),
            ) {
                // Income creation must never fail on a savings-side error
                error!(
                    "Failed to apply contribution of {} to goal '{}': {}",
                    contribution, goal.goal_name, e
                );
            }
        }

        Ok(())
    }
}
