use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use pocketplan_core::budgets::{Budget, BudgetCreate, BudgetProgress};

use crate::{error::ApiResult, identity::UserId, main_lib::AppState};

#[derive(serde::Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

async fn create_budget(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(input): Json<BudgetCreate>,
) -> ApiResult<Json<Budget>> {
    let budget = state.budget_service.create_budget(&user_id, input).await?;
    Ok(Json(budget))
}

async fn list_budgets(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(query): Query<MonthQuery>,
) -> ApiResult<Json<Vec<Budget>>> {
    let budgets = state
        .budget_service
        .get_budgets(&user_id, query.month.as_deref())?;
    Ok(Json(budgets))
}

async fn get_budget_progress(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(query): Query<MonthQuery>,
) -> ApiResult<Json<Vec<BudgetProgress>>> {
    let progress = state
        .budget_service
        .get_budget_progress(&user_id, query.month.as_deref())?;
    Ok(Json(progress))
}

async fn delete_budget(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<StatusCode> {
    state.budget_service.delete_budget(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route("/budgets/progress", get(get_budget_progress))
        .route("/budgets/{id}", delete(delete_budget))
}
