use chrono::Utc;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};

use crate::{
    dto::logs::CreateLogRequest,
    entity::logs::{Column, Entity as Logs, Model as LogModel},
    error::AppResult,
    models::{LogEntry, LogLevel, LogSource},
    state::AppState,
    telemetry::log_event,
};

/// The debug-log viewer shows the latest 200 entries, newest first.
const LOG_VIEW_LIMIT: u64 = 200;

pub async fn list_logs(state: &AppState) -> AppResult<Vec<LogEntry>> {
    let entries = Logs::find()
        .order_by_desc(Column::Timestamp)
        .order_by_desc(Column::Id)
        .limit(LOG_VIEW_LIMIT)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(log_from_entity)
        .collect();
    Ok(entries)
}

pub async fn append_log(state: &AppState, payload: CreateLogRequest) -> AppResult<()> {
    log_event(
        &state.pool,
        payload.source.unwrap_or(LogSource::Fe),
        payload.level.unwrap_or(LogLevel::Info),
        &payload.message,
        payload.details,
    )
    .await
}

pub async fn clear_logs(state: &AppState) -> AppResult<()> {
    Logs::delete_many().exec(&state.orm).await?;

    // The purge itself is worth a trace in the fresh log.
    if let Err(err) = log_event(
        &state.pool,
        LogSource::Be,
        LogLevel::Warn,
        "System logs cleared",
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "telemetry log failed");
    }

    Ok(())
}

fn log_from_entity(model: LogModel) -> LogEntry {
    LogEntry {
        id: model.id,
        timestamp: model.timestamp.with_timezone(&Utc),
        source: LogSource::from_db(&model.source).unwrap_or(LogSource::Be),
        level: LogLevel::from_db(&model.level).unwrap_or(LogLevel::Info),
        message: model.message,
        details: model.details,
    }
}
