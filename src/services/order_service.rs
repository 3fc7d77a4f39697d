use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::orders::{CreateOrderRequest, UpdateOrderStatusRequest},
    entity::{
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::{ActiveModel as ProductActive, Entity as Products},
    },
    error::{AppError, AppResult},
    models::{LogLevel, LogSource, Order, OrderStatus},
    state::AppState,
    telemetry::log_event,
};

pub async fn list_orders(state: &AppState) -> AppResult<Vec<Order>> {
    let orders = Orders::find()
        .order_by_desc(OrderCol::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(order_from_entity)
        .collect();
    Ok(orders)
}

/// Place an order: stock gate, ledger insert, then per-item decrement.
///
/// The three steps are independent round trips with no transaction spanning
/// them. Two concurrent checkouts against the same last unit can both pass
/// the gate; the decrement clamp keeps stock at zero but both orders are
/// recorded. Known race, kept as observed behavior.
pub async fn place_order(state: &AppState, payload: CreateOrderRequest) -> AppResult<Order> {
    // Gate: read-only check, one fetch per line item. A line item that no
    // longer resolves to a product passes through.
    for item in &payload.items {
        if let Some(product) = Products::find_by_id(item.id).one(&state.orm).await? {
            if product.stock < 1 {
                if let Err(err) = log_event(
                    &state.pool,
                    LogSource::Be,
                    LogLevel::Warn,
                    &format!("Out of stock: {}", product.name),
                    None,
                )
                .await
                {
                    tracing::warn!(error = %err, "telemetry log failed");
                }
                return Err(AppError::OutOfStock(product.name));
            }
        }
    }

    // Ledger: the stored items are a value snapshot of what was purchased,
    // and the total is the client-submitted figure, stored as-is.
    let snapshot =
        serde_json::to_string(&payload.items).map_err(|e| AppError::Internal(e.into()))?;

    let active = OrderActive {
        id: NotSet,
        customer_name: Set(payload.customer_name),
        customer_email: Set(payload.customer_email),
        total: Set(payload.total),
        status: Set(OrderStatus::Pending.as_str().to_string()),
        items: Set(snapshot),
        created_at: NotSet,
    };
    let order = match active.insert(&state.orm).await {
        Ok(order) => order,
        Err(err) => {
            if let Err(log_err) = log_event(
                &state.pool,
                LogSource::Be,
                LogLevel::Error,
                "Order processing failed",
                Some(serde_json::json!({ "error": err.to_string() })),
            )
            .await
            {
                tracing::warn!(error = %log_err, "telemetry log failed");
            }
            return Err(err.into());
        }
    };

    // Decrement: one read+write pair per purchased unit, clamped at zero.
    // A failed decrement is logged and swallowed; the order row is already
    // committed and there is no compensating rollback.
    for item in &payload.items {
        if let Err(err) = decrement_stock(state, item.id).await {
            tracing::warn!(product_id = item.id, error = %err, "stock decrement failed");
        }
    }

    Ok(order_from_entity(order))
}

pub async fn update_status(
    state: &AppState,
    id: i64,
    payload: UpdateOrderStatusRequest,
) -> AppResult<Order> {
    let existing = Orders::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };

    // Unconditional overwrite: the endpoint does not check that the new
    // status is the legal next step. Only the status column changes.
    let mut active: OrderActive = existing.into();
    active.status = Set(payload.status.as_str().to_string());
    let order = active.update(&state.orm).await?;

    Ok(order_from_entity(order))
}

async fn decrement_stock(state: &AppState, product_id: i64) -> AppResult<()> {
    let product = match Products::find_by_id(product_id).one(&state.orm).await? {
        Some(p) => p,
        None => return Ok(()),
    };

    let new_stock = (product.stock - 1).max(0);
    let mut active: ProductActive = product.into();
    active.stock = Set(new_stock);
    active.update(&state.orm).await?;

    if let Err(err) = log_event(
        &state.pool,
        LogSource::Db,
        LogLevel::Info,
        &format!("Stock reduced for product ID: {product_id}"),
        Some(serde_json::json!({ "newStock": new_stock })),
    )
    .await
    {
        tracing::warn!(error = %err, "telemetry log failed");
    }

    Ok(())
}

fn order_from_entity(model: OrderModel) -> Order {
    let items = match serde_json::from_str(&model.items) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(order_id = model.id, error = %err, "stored line items failed to parse");
            Vec::new()
        }
    };
    let status = match OrderStatus::from_db(&model.status) {
        Some(status) => status,
        None => {
            tracing::warn!(order_id = model.id, status = %model.status, "unknown order status in store");
            OrderStatus::Pending
        }
    };
    Order {
        id: model.id,
        customer_name: model.customer_name,
        customer_email: model.customer_email,
        total: model.total,
        status,
        items,
        created_at: model.created_at.with_timezone(&Utc),
    }
}
