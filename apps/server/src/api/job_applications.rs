use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use pocketplan_core::job_applications::{
    JobApplication, JobApplicationCreate, JobApplicationPatch, JobApplicationSummary,
};

use crate::{error::ApiResult, identity::UserId, main_lib::AppState};

async fn create_application(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(input): Json<JobApplicationCreate>,
) -> ApiResult<Json<JobApplication>> {
    let application = state
        .job_application_service
        .create_application(&user_id, input)
        .await?;
    Ok(Json(application))
}

async fn list_applications(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<Vec<JobApplication>>> {
    let applications = state.job_application_service.get_applications(&user_id)?;
    Ok(Json(applications))
}

async fn get_application_summary(
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<Json<JobApplicationSummary>> {
    let summary = state.job_application_service.status_counts(&user_id)?;
    Ok(Json(summary))
}

async fn update_application(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
    Json(patch): Json<JobApplicationPatch>,
) -> ApiResult<Json<JobApplication>> {
    let application = state
        .job_application_service
        .update_application(&user_id, &id, patch)
        .await?;
    Ok(Json(application))
}

async fn delete_application(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    UserId(user_id): UserId,
) -> ApiResult<StatusCode> {
    state
        .job_application_service
        .delete_application(&user_id, &id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/job-applications",
            get(list_applications).post(create_application),
        )
        .route("/job-applications/summary", get(get_application_summary))
        .route(
            "/job-applications/{id}",
            put(update_application).delete(delete_application),
        )
}
