use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub price: i64,
    pub stock: i32,
}

/// Value snapshot of a product at time of purchase. Orders keep these
/// denormalized so history stays accurate when the catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    pub id: i64,
    pub name: String,
    pub price: i64,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub total: i64,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipping => "SHIPPING",
            OrderStatus::Completed => "COMPLETED",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(OrderStatus::Pending),
            "CONFIRMED" => Some(OrderStatus::Confirmed),
            "SHIPPING" => Some(OrderStatus::Shipping),
            "COMPLETED" => Some(OrderStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub source: LogSource,
    pub level: LogLevel,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogSource {
    Fe,
    Be,
    Db,
}

impl LogSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogSource::Fe => "FE",
            LogSource::Be => "BE",
            LogSource::Db => "DB",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "FE" => Some(LogSource::Fe),
            "BE" => Some(LogSource::Be),
            "DB" => Some(LogSource::Db),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "INFO" => Some(LogLevel::Info),
            "WARN" => Some(LogLevel::Warn),
            "ERROR" => Some(LogLevel::Error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_round_trips_through_db_text() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Shipping,
            OrderStatus::Completed,
        ] {
            assert_eq!(OrderStatus::from_db(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::from_db("CANCELLED"), None);
    }

    #[test]
    fn order_status_serializes_uppercase() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let back: OrderStatus = serde_json::from_str("\"SHIPPING\"").unwrap();
        assert_eq!(back, OrderStatus::Shipping);
    }

    #[test]
    fn line_items_survive_json_snapshot() {
        let items = vec![
            LineItem {
                id: 1,
                name: "iPhone 15 Pro".into(),
                price: 25_000_000,
                image: "https://picsum.photos/seed/iphone/400/400".into(),
            },
            LineItem {
                id: 3,
                name: "AirPods Pro".into(),
                price: 5_500_000,
                image: "https://picsum.photos/seed/airpods/400/400".into(),
            },
        ];
        let text = serde_json::to_string(&items).unwrap();
        let back: Vec<LineItem> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].name, "iPhone 15 Pro");
        assert_eq!(back[1].price, 5_500_000);
    }

    #[test]
    fn log_level_defaults_reject_unknown() {
        assert_eq!(LogLevel::from_db("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_db("TRACE"), None);
        assert_eq!(LogSource::from_db("DB"), Some(LogSource::Db));
        assert_eq!(LogSource::from_db("API"), None);
    }
}
