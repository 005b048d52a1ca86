use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use pocketplan_core::{
    budgets::{BudgetRepository, BudgetService, BudgetServiceTrait},
    db,
    expenses::{ExpenseRepository, ExpenseService, ExpenseServiceTrait},
    income::{IncomeRepository, IncomeService, IncomeServiceTrait},
    job_applications::{
        JobApplicationRepository, JobApplicationService, JobApplicationServiceTrait,
    },
    planned_expenses::{PlannedExpenseRepository, PlannedExpenseService, PlannedExpenseServiceTrait},
    savings::{SavingsGoalRepository, SavingsGoalService, SavingsGoalServiceTrait},
    summary::{SummaryService, SummaryServiceTrait},
};

pub struct AppState {
    pub income_service: Arc<dyn IncomeServiceTrait>,
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
    pub budget_service: Arc<dyn BudgetServiceTrait>,
    pub planned_expense_service: Arc<dyn PlannedExpenseServiceTrait>,
    pub savings_service: Arc<dyn SavingsGoalServiceTrait>,
    pub summary_service: Arc<dyn SummaryServiceTrait>,
    pub job_application_service: Arc<dyn JobApplicationServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // Keep DATABASE_URL aligned with PP_DB_PATH so the core opens the right file
    std::env::set_var("DATABASE_URL", &config.db_path);
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let income_repository = Arc::new(IncomeRepository::new(pool.clone()));
    let expense_repository = Arc::new(ExpenseRepository::new(pool.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone()));
    let planned_repository = Arc::new(PlannedExpenseRepository::new(pool.clone()));
    let goal_repository = Arc::new(SavingsGoalRepository::new(pool.clone()));
    let application_repository = Arc::new(JobApplicationRepository::new(pool.clone()));

    let income_service = Arc::new(IncomeService::new(income_repository.clone()));
    let expense_service = Arc::new(ExpenseService::new(expense_repository.clone()));
    let budget_service = Arc::new(BudgetService::new(
        budget_repository,
        expense_repository.clone(),
    ));
    let planned_expense_service = Arc::new(PlannedExpenseService::new(
        planned_repository.clone(),
        expense_repository.clone(),
    ));
    let savings_service = Arc::new(SavingsGoalService::new(
        goal_repository.clone(),
        income_repository.clone(),
    ));
    let summary_service = Arc::new(SummaryService::new(
        income_repository,
        expense_repository,
        planned_repository,
        goal_repository,
    ));
    let job_application_service = Arc::new(JobApplicationService::new(application_repository));

    Ok(Arc::new(AppState {
        income_service,
        expense_service,
        budget_service,
        planned_expense_service,
        savings_service,
        summary_service,
        job_application_service,
    }))
}
