use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{LineItem, OrderStatus};

/// Checkout payload. The total comes from the client and is stored as-is;
/// see the error-handling notes in DESIGN.md about this trust boundary.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub total: i64,
    pub items: Vec<LineItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}
