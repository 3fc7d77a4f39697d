pub mod logs;
pub mod orders;
pub mod products;
pub mod stats;

use serde::Serialize;
use utoipa::ToSchema;

/// `{status:"ok"}` envelope used by delete/clear/seed style endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusReply {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusReply {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            message: None,
        }
    }

    pub fn ok_with(message: impl Into<String>) -> Self {
        Self {
            status: "ok",
            message: Some(message.into()),
        }
    }
}
