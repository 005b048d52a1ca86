use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use pocketplan_core::summary::FinancialSummary;

use crate::{error::ApiResult, identity::UserId, main_lib::AppState};

#[derive(serde::Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

async fn get_summary(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Query(query): Query<MonthQuery>,
) -> ApiResult<Json<FinancialSummary>> {
    let summary = state
        .summary_service
        .get_summary(&user_id, query.month.as_deref())?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/summary", get(get_summary))
}
