use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use std::sync::Arc;

use crate::budgets::budgets_model::{Budget, BudgetCreate, BudgetProgress, NewBudget};
use crate::budgets::budgets_traits::{BudgetRepositoryTrait, BudgetServiceTrait};
use crate::constants::BUDGET_NEAR_LIMIT_PERCENTAGE;
use crate::errors::{Error, Result, ValidationError};
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::utils::{parse_month_param, today};

pub struct BudgetService {
    budget_repository: Arc<dyn BudgetRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
}

impl BudgetService {
    pub fn new(
        budget_repository: Arc<dyn BudgetRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    ) -> Self {
        BudgetService {
            budget_repository,
            expense_repository,
        }
    }

    fn resolve_period(month: Option<&str>) -> Result<(NaiveDate, NaiveDate)> {
        match month {
            Some(m) => parse_month_param(m),
            None => {
                let now = today();
                Ok((now, now + Duration::days(1)))
            }
        }
    }
}

/// Compares category spend against budget limits for one period. Pure
/// transform over the rows handed in, never persisted.
pub fn compute_budget_progress(budgets: &[Budget], expenses: &[Expense]) -> Vec<BudgetProgress> {
    budgets
        .iter()
        .map(|budget| {
            let spent: f64 = expenses
                .iter()
                .filter(|e| e.category == budget.category)
                .map(|e| e.amount)
                .sum();

            let percentage = if budget.monthly_limit <= 0.0 {
                0.0
            } else {
                (spent / budget.monthly_limit * 100.0).min(100.0)
            };
            let is_over_budget = spent > budget.monthly_limit;
            let is_near_limit = !is_over_budget
                && percentage >= BUDGET_NEAR_LIMIT_PERCENTAGE
                && percentage < 100.0;

            BudgetProgress {
                budget_id: budget.id.clone(),
                category: budget.category.clone(),
                monthly_limit: budget.monthly_limit,
                spent,
                remaining: budget.monthly_limit - spent,
                percentage,
                is_over_budget,
                is_near_limit,
            }
        })
        .collect()
}

fn periods_overlap(
    a_start: NaiveDate,
    a_end: Option<NaiveDate>,
    b_start: NaiveDate,
    b_end: Option<NaiveDate>,
) -> bool {
    a_start <= b_end.unwrap_or(NaiveDate::MAX) && b_start <= a_end.unwrap_or(NaiveDate::MAX)
}

#[async_trait]
impl BudgetServiceTrait for BudgetService {
    async fn create_budget(&self, user_id: &str, input: BudgetCreate) -> Result<Budget> {
        if input.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category".to_string()).into());
        }
        if input.monthly_limit <= 0.0 {
            return Err(ValidationError::InvalidInput(
                "Monthly limit must be positive".to_string(),
            )
            .into());
        }
        if let Some(end) = input.end_date {
            if end < input.start_date {
                return Err(ValidationError::InvalidInput(
                    "End date must not precede start date".to_string(),
                )
                .into());
            }
        }

        let category = input.category.trim().to_string();

        // One budget per category per active period
        let existing = self.budget_repository.load_budgets(user_id)?;
        let clash = existing.iter().any(|b| {
            b.category == category
                && periods_overlap(b.start_date, b.end_date, input.start_date, input.end_date)
        });
        if clash {
            return Err(Error::ConstraintViolation(format!(
                "A budget for category '{}' already covers this period",
                category
            )));
        }

        self.budget_repository.insert_new_budget(NewBudget {
            id: None,
            user_id: user_id.to_string(),
            category,
            monthly_limit: input.monthly_limit,
            start_date: input.start_date,
            end_date: input.end_date,
            created_at: None,
        })
    }

    fn get_budgets(&self, user_id: &str, month: Option<&str>) -> Result<Vec<Budget>> {
        let (start, end) = Self::resolve_period(month)?;
        self.budget_repository
            .load_active_budgets(user_id, start, end)
    }

    fn get_budget_progress(
        &self,
        user_id: &str,
        month: Option<&str>,
    ) -> Result<Vec<BudgetProgress>> {
        let (start, end) = match month {
            Some(m) => parse_month_param(m)?,
            None => crate::utils::month_bounds(today()),
        };

        let budgets = self
            .budget_repository
            .load_active_budgets(user_id, start, end)?;
        let expenses = self
            .expense_repository
            .load_expenses(user_id, Some((start, end)))?;

        Ok(compute_budget_progress(&budgets, &expenses))
    }

    async fn delete_budget(&self, user_id: &str, budget_id: &str) -> Result<()> {
        let affected = self.budget_repository.delete_budget(user_id, budget_id)?;
        if affected == 0 {
            return Err(Error::NotFound("budget".to_string()));
        }
        Ok(())
    }
}
