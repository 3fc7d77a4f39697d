use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::models::{LogLevel, LogSource};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLogRequest {
    pub source: Option<LogSource>,
    pub level: Option<LogLevel>,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}
