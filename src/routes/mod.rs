use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod logs;
pub mod orders;
pub mod products;
pub mod seed;
pub mod stats;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .nest("/logs", logs::router())
        .route("/stats", get(stats::get_stats))
        .route("/seed", post(seed::seed_catalog))
}
