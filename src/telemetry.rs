use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use serde_json::Value;

use crate::{
    db::DbPool,
    error::AppResult,
    models::{LogLevel, LogSource},
    state::AppState,
};

/// Append one event to the `logs` table. `details` is serialized to text at
/// write time; rows are never updated afterwards.
pub async fn log_event(
    pool: &DbPool,
    source: LogSource,
    level: LogLevel,
    message: &str,
    details: Option<Value>,
) -> AppResult<()> {
    sqlx::query(
        r#"
        INSERT INTO logs (source, level, message, details)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(source.as_str())
    .bind(level.as_str())
    .bind(message)
    .bind(details.map(|v| v.to_string()))
    .execute(pool)
    .await?;

    Ok(())
}

/// Request-logging middleware: every handled request leaves a `BE` entry with
/// status and duration, which feeds the debug-log viewer.
pub async fn request_log(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let level = if status.is_client_error() || status.is_server_error() {
        LogLevel::Error
    } else {
        LogLevel::Info
    };
    let details = serde_json::json!({
        "status": status.as_u16(),
        "duration": format!("{}ms", start.elapsed().as_millis()),
    });

    if let Err(err) = log_event(
        &state.pool,
        LogSource::Be,
        level,
        &format!("{method} {path}"),
        Some(details),
    )
    .await
    {
        tracing::warn!(error = %err, "telemetry log failed");
    }

    response
}
