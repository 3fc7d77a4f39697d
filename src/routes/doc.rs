use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        StatusReply,
        logs::CreateLogRequest,
        orders::{CreateOrderRequest, UpdateOrderStatusRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        stats::{DailySale, StatsResponse},
    },
    models::{LineItem, LogEntry, LogLevel, LogSource, Order, OrderStatus, Product},
    routes::{health, logs, orders, products, seed, stats},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::create_product,
        products::update_product,
        products::delete_product,
        orders::list_orders,
        orders::create_order,
        orders::update_order_status,
        logs::list_logs,
        logs::create_log,
        logs::clear_logs,
        stats::get_stats,
        seed::seed_catalog,
    ),
    components(
        schemas(
            Product,
            LineItem,
            Order,
            OrderStatus,
            LogEntry,
            LogSource,
            LogLevel,
            CreateProductRequest,
            UpdateProductRequest,
            CreateOrderRequest,
            UpdateOrderStatusRequest,
            CreateLogRequest,
            StatsResponse,
            DailySale,
            StatusReply,
            health::HealthData,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog endpoints"),
        (name = "Orders", description = "Checkout and order-status endpoints"),
        (name = "Logs", description = "Debug-log viewer endpoints"),
        (name = "Stats", description = "Admin dashboard aggregates"),
        (name = "Seed", description = "Demo data seeding"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
