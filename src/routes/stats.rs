use axum::{Json, extract::State};

use crate::{
    dto::stats::StatsResponse,
    error::AppResult,
    services::stats_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Dashboard aggregates", body = StatsResponse)
    ),
    tag = "Stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = stats_service::get_stats(&state).await?;
    Ok(Json(stats))
}
