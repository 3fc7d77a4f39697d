use axum::{Json, extract::State};

use crate::{
    dto::StatusReply,
    error::AppResult,
    services::seed_service,
    state::AppState,
};

#[utoipa::path(
    post,
    path = "/api/seed",
    responses(
        (status = 200, description = "Demo catalog inserted", body = StatusReply)
    ),
    tag = "Seed"
)]
pub async fn seed_catalog(State(state): State<AppState>) -> AppResult<Json<StatusReply>> {
    seed_service::seed_catalog(&state).await?;
    Ok(Json(StatusReply::ok_with(
        "Dữ liệu mẫu đã được khởi tạo thành công!",
    )))
}
