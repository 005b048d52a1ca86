use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use pocketplan_core::expenses::{Expense, ExpenseCreate};

use crate::{error::ApiResult, identity::UserId, main_lib::AppState};

#[derive(serde::Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

async fn create_expense(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(input): Json<ExpenseCreate>,
) -> ApiResult<Json<Expense>> {
    let expense = state.expense_service.create_expense(&user_id, input).await?;
    Ok(Json(expense))
}

async fn list_expenses(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(query): Query<MonthQuery>,
) -> ApiResult<Json<Vec<Expense>>> {
    let expenses = state
        .expense_service
        .get_expenses(&user_id, query.month.as_deref())?;
    Ok(Json(expenses))
}

async fn delete_expense(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", delete(delete_expense))
}
