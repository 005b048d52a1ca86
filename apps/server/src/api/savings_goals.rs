use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use pocketplan_core::savings::{
    ContributionInput, SavingsGoal, SavingsGoalCreate, SavingsGoalPatch, SavingsGoalsResponse,
};

use crate::{error::ApiResult, identity::UserId, main_lib::AppState};

async fn create_goal(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(input): Json<SavingsGoalCreate>,
) -> ApiResult<Json<SavingsGoal>> {
    let goal = state.savings_service.create_goal(&user_id, input).await?;
    Ok(Json(goal))
}

async fn list_goals(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<SavingsGoalsResponse>> {
    let response = state.savings_service.get_goals_with_summary(&user_id)?;
    Ok(Json(response))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(patch): Json<SavingsGoalPatch>,
) -> ApiResult<Json<SavingsGoal>> {
    let goal = state.savings_service.update_goal(&user_id, &id, patch).await?;
    Ok(Json(goal))
}

async fn toggle_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<SavingsGoal>> {
    let goal = state.savings_service.toggle_goal(&user_id, &id).await?;
    Ok(Json(goal))
}

async fn contribute(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(input): Json<ContributionInput>,
) -> ApiResult<Json<SavingsGoal>> {
    let goal = state
        .savings_service
        .contribute(&user_id, &id, input.amount)
        .await?;
    Ok(Json(goal))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<StatusCode> {
    state.savings_service.delete_goal(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/savings-goals", get(list_goals).post(create_goal))
        .route("/savings-goals/{id}", put(update_goal).delete(delete_goal))
        .route("/savings-goals/{id}/toggle", post(toggle_goal))
        .route("/savings-goals/{id}/contribute", post(contribute))
}
