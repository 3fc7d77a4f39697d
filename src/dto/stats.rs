use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct DailySale {
    pub date: String,
    pub amount: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_sales: i64,
    pub order_count: i64,
    pub product_count: i64,
    pub daily_sales: Vec<DailySale>,
}
