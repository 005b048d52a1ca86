use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::expenses::{Expense, ExpenseRepositoryTrait};
use crate::income::IncomeRepositoryTrait;
use crate::planned_expenses::PlannedExpenseRepositoryTrait;
use crate::savings::SavingsGoalRepositoryTrait;
use crate::summary::summary_model::{CategoryExpense, FinancialSummary};
use crate::summary::summary_traits::SummaryServiceTrait;
use crate::utils::{month_bounds, parse_month_param, today};

pub struct SummaryService {
    income_repository: Arc<dyn IncomeRepositoryTrait>,
    expense_repository: Arc<dyn ExpenseRepositoryTrait>,
    planned_repository: Arc<dyn PlannedExpenseRepositoryTrait>,
    goal_repository: Arc<dyn SavingsGoalRepositoryTrait>,
}

impl SummaryService {
    pub fn new(
        income_repository: Arc<dyn IncomeRepositoryTrait>,
        expense_repository: Arc<dyn ExpenseRepositoryTrait>,
        planned_repository: Arc<dyn PlannedExpenseRepositoryTrait>,
        goal_repository: Arc<dyn SavingsGoalRepositoryTrait>,
    ) -> Self {
        SummaryService {
            income_repository,
            expense_repository,
            planned_repository,
            goal_repository,
        }
    }
}

/// Per-category totals for the month, largest first.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryExpense> {
    let mut by_category: HashMap<&str, f64> = HashMap::new();
    for expense in expenses {
        *by_category.entry(expense.category.as_str()).or_insert(0.0) += expense.amount;
    }

    let mut totals: Vec<CategoryExpense> = by_category
        .into_iter()
        .map(|(category, total)| CategoryExpense {
            category: category.to_string(),
            total,
        })
        .collect();
    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

impl SummaryServiceTrait for SummaryService {
    fn get_summary(&self, user_id: &str, month: Option<&str>) -> Result<FinancialSummary> {
        let range = match month {
            Some(m) => parse_month_param(m)?,
            None => month_bounds(today()),
        };

        let month_incomes = self.income_repository.load_incomes(user_id, Some(range))?;
        let month_expenses = self.expense_repository.load_expenses(user_id, Some(range))?;
        let monthly_income: f64 = month_incomes.iter().map(|i| i.amount).sum();
        let monthly_expenses: f64 = month_expenses.iter().map(|e| e.amount).sum();

        let all_incomes = self.income_repository.load_incomes(user_id, None)?;
        let all_expenses = self.expense_repository.load_expenses(user_id, None)?;
        let total_all_income: f64 = all_incomes.iter().map(|i| i.amount).sum();
        let total_all_expenses: f64 = all_expenses.iter().map(|e| e.amount).sum();

        // Due rows are converted by the roll-forward before they can show up
        // here, so only strictly-future obligations count.
        let upcoming = self.planned_repository.load_upcoming(user_id, today())?;
        let total_planned_expenses: f64 = upcoming.iter().map(|p| p.amount).sum();

        let goals = self.goal_repository.load_goals(user_id)?;
        let total_currently_saved: f64 = goals.iter().map(|g| g.current_amount).sum();

        let overall_balance = total_all_income - total_all_expenses - total_planned_expenses;

        Ok(FinancialSummary {
            monthly_income,
            monthly_expenses,
            monthly_balance: monthly_income - monthly_expenses,
            overall_balance,
            total_planned_expenses,
            available_balance: overall_balance - total_currently_saved,
            category_expenses: category_totals(&month_expenses),
        })
    }
}
