use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::StatusReply,
    dto::logs::CreateLogRequest,
    error::AppResult,
    models::LogEntry,
    services::log_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs).post(create_log))
        .route("/clear", post(clear_logs))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Latest 200 log entries, newest first", body = Vec<LogEntry>)
    ),
    tag = "Logs"
)]
pub async fn list_logs(State(state): State<AppState>) -> AppResult<Json<Vec<LogEntry>>> {
    let entries = log_service::list_logs(&state).await?;
    Ok(Json(entries))
}

#[utoipa::path(
    post,
    path = "/api/logs",
    request_body = CreateLogRequest,
    responses(
        (status = 201, description = "Entry recorded", body = StatusReply)
    ),
    tag = "Logs"
)]
pub async fn create_log(
    State(state): State<AppState>,
    Json(payload): Json<CreateLogRequest>,
) -> AppResult<(StatusCode, Json<StatusReply>)> {
    log_service::append_log(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(StatusReply::ok())))
}

#[utoipa::path(
    post,
    path = "/api/logs/clear",
    responses(
        (status = 200, description = "Log table emptied", body = StatusReply)
    ),
    tag = "Logs"
)]
pub async fn clear_logs(State(state): State<AppState>) -> AppResult<Json<StatusReply>> {
    log_service::clear_logs(&state).await?;
    Ok(Json(StatusReply::ok()))
}
