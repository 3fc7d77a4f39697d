use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

use crate::{
    dto::stats::{DailySale, StatsResponse},
    entity::{
        orders::Column as OrderCol,
        Orders, Products,
    },
    error::AppResult,
    models::OrderStatus,
    state::AppState,
};

// Demo chart series for the dashboard; the last point carries the real
// completed-sales figure.
const DEMO_DAILY_AMOUNTS: [i64; 5] = [5_000_000, 8_000_000, 4_500_000, 12_000_000, 9_000_000];

pub async fn get_stats(state: &AppState) -> AppResult<StatsResponse> {
    let completed_totals: Vec<i64> = Orders::find()
        .select_only()
        .column(OrderCol::Total)
        .filter(OrderCol::Status.eq(OrderStatus::Completed.as_str()))
        .into_tuple()
        .all(&state.orm)
        .await?;
    let total_sales: i64 = completed_totals.iter().sum();

    let order_count = Orders::find().count(&state.orm).await? as i64;
    let product_count = Products::find().count(&state.orm).await? as i64;

    let today = Utc::now().date_naive();
    let mut daily_sales: Vec<DailySale> = DEMO_DAILY_AMOUNTS
        .iter()
        .enumerate()
        .map(|(i, amount)| DailySale {
            date: (today - Duration::days((DEMO_DAILY_AMOUNTS.len() - i) as i64))
                .format("%Y-%m-%d")
                .to_string(),
            amount: *amount,
        })
        .collect();
    daily_sales.push(DailySale {
        date: today.format("%Y-%m-%d").to_string(),
        amount: total_sales,
    });

    Ok(StatsResponse {
        total_sales,
        order_count,
        product_count,
        daily_sales,
    })
}
