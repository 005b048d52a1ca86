use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use pocketplan_core::income::{Income, IncomeCreate};

use crate::{error::ApiResult, identity::UserId, main_lib::AppState};

#[derive(serde::Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

async fn create_income(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(input): Json<IncomeCreate>,
) -> ApiResult<Json<Income>> {
    let income = state.income_service.create_income(&user_id, input).await?;

    // Savings contributions are a best-effort side effect: the income row is
    // already committed, so a failure here is logged and never surfaced.
    let savings = state.savings_service.clone();
    let amount = income.amount;
    let date = income.income_date;
    tokio::spawn(async move {
        if let Err(e) = savings.allocate_from_income(&user_id, amount, date).await {
            tracing::error!("Savings allocation after income creation failed: {}", e);
        }
    });

    Ok(Json(income))
}

async fn list_income(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(query): Query<MonthQuery>,
) -> ApiResult<Json<Vec<Income>>> {
    let incomes = state
        .income_service
        .get_incomes(&user_id, query.month.as_deref())?;
    Ok(Json(incomes))
}

async fn delete_income(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<StatusCode> {
    state.income_service.delete_income(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/income", get(list_income).post(create_income))
        .route("/income/{id}", delete(delete_income))
}
