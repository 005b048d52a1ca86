use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use pocketplan_core::planned_expenses::{PlannedExpense, PlannedExpenseCreate, PlannedExpenseOutcome};

use crate::{error::ApiResult, identity::UserId, main_lib::AppState};

async fn create_planned_expense(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(input): Json<PlannedExpenseCreate>,
) -> ApiResult<Json<PlannedExpenseOutcome>> {
    let outcome = state
        .planned_expense_service
        .create_planned_expense(&user_id, input)
        .await?;
    Ok(Json(outcome))
}

/// Runs the due-date roll-forward before returning, so the list never
/// contains a row whose date has already passed.
async fn list_planned_expenses(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<Vec<PlannedExpense>>> {
    let planned = state.planned_expense_service.get_planned_expenses(&user_id)?;
    Ok(Json(planned))
}

async fn delete_planned_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<StatusCode> {
    state
        .planned_expense_service
        .delete_planned_expense(&user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/planned-expenses",
            get(list_planned_expenses).post(create_planned_expense),
        )
        .route("/planned-expenses/{id}", delete(delete_planned_expense))
}
