use omnishop_api::{
    db::{create_orm_conn, create_pool},
    dto::logs::CreateLogRequest,
    dto::orders::{CreateOrderRequest, UpdateOrderStatusRequest},
    entity::products::ActiveModel as ProductActive,
    error::AppError,
    models::{LineItem, LogLevel, LogSource, OrderStatus, Product},
    services::{log_service, order_service, product_service, stats_service},
    state::AppState,
};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set, Statement};

// Integration flow: checkout gate, ledger, stock decrement, status advance,
// stats and the debug log, against a real Postgres.
#[tokio::test]
async fn checkout_and_admin_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url =
        match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
            Ok(url) => url,
            Err(_) => {
                eprintln!(
                    "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
                );
                return Ok(());
            }
        };

    let state = setup_state(&database_url).await?;

    let phone = seed_product(&state, "iPhone 15 Pro", 25_000_000, 10).await?;
    let laptop = seed_product(&state, "MacBook M3", 45_000_000, 3).await?;
    let sold_out = seed_product(&state, "AirPods Pro", 5_500_000, 0).await?;

    // A cart containing a zero-stock product is rejected and writes nothing.
    let rejected = order_service::place_order(
        &state,
        CreateOrderRequest {
            customer_name: "A".into(),
            customer_email: "a@x.com".into(),
            total: 30_500_000,
            items: vec![line_item(&phone), line_item(&sold_out)],
        },
    )
    .await;
    match rejected {
        Err(AppError::OutOfStock(name)) => assert_eq!(name, "AirPods Pro"),
        other => panic!("expected OutOfStock, got {other:?}"),
    }
    assert!(order_service::list_orders(&state).await?.is_empty());
    assert_eq!(fetch_stock(&state, phone.id).await?, 10, "gate must not mutate stock");

    // Successful checkout: PENDING order carrying the submitted total, one
    // decrement per line-item occurrence.
    let order = order_service::place_order(
        &state,
        CreateOrderRequest {
            customer_name: "A".into(),
            customer_email: "a@x.com".into(),
            total: 70_000_000,
            items: vec![line_item(&phone), line_item(&laptop)],
        },
    )
    .await?;
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total, 70_000_000);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].name, "iPhone 15 Pro");
    assert_eq!(fetch_stock(&state, phone.id).await?, 9);
    assert_eq!(fetch_stock(&state, laptop.id).await?, 2);

    // Same product twice in one cart decrements twice, clamped at zero.
    let last_unit = seed_product(&state, "Apple Watch Ultra", 18_000_000, 1).await?;
    order_service::place_order(
        &state,
        CreateOrderRequest {
            customer_name: "B".into(),
            customer_email: "b@x.com".into(),
            total: 36_000_000,
            items: vec![line_item(&last_unit), line_item(&last_unit)],
        },
    )
    .await?;
    assert_eq!(fetch_stock(&state, last_unit.id).await?, 0);

    // Status advances through the four states; nothing else changes.
    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Shipping,
        OrderStatus::Completed,
    ] {
        let updated =
            order_service::update_status(&state, order.id, UpdateOrderStatusRequest { status })
                .await?;
        assert_eq!(updated.status, status);
        assert_eq!(updated.total, order.total);
        assert_eq!(updated.customer_email, order.customer_email);
        assert_eq!(updated.created_at, order.created_at);
        assert_eq!(updated.items.len(), order.items.len());
    }

    // Stats: only the COMPLETED order counts toward revenue.
    let stats = stats_service::get_stats(&state).await?;
    assert_eq!(stats.total_sales, 70_000_000);
    assert_eq!(stats.order_count, 2);
    assert_eq!(stats.product_count, 4);
    assert_eq!(stats.daily_sales.len(), 6);
    assert_eq!(stats.daily_sales.last().unwrap().amount, 70_000_000);

    // The decrements left DB-sourced entries in the debug log.
    let logs = log_service::list_logs(&state).await?;
    assert!(
        logs.iter().any(|entry| {
            entry.source == LogSource::Db
                && entry.message == format!("Stock reduced for product ID: {}", phone.id)
        }),
        "expected a stock-reduction log entry"
    );
    assert!(logs.iter().any(|entry| entry.level == LogLevel::Warn
        && entry.message == "Out of stock: AirPods Pro"));

    // Client-submitted entries land with FE/INFO defaults; clear empties the
    // table (a fresh WARN marker aside).
    log_service::append_log(
        &state,
        CreateLogRequest {
            source: None,
            level: None,
            message: "cart opened".into(),
            details: Some(serde_json::json!({ "items": 2 })),
        },
    )
    .await?;
    let logs = log_service::list_logs(&state).await?;
    let newest = logs.first().expect("log entry");
    assert_eq!(newest.source, LogSource::Fe);
    assert_eq!(newest.level, LogLevel::Info);
    assert_eq!(newest.message, "cart opened");

    log_service::clear_logs(&state).await?;
    let logs = log_service::list_logs(&state).await?;
    assert!(logs.iter().all(|entry| entry.message == "System logs cleared"));

    // Two unserialized checkouts against one remaining unit: both gate reads
    // land before either decrement write, so both pass and two orders are
    // recorded against a single unit. This pins down the oversell race as it
    // currently behaves; stock still ends clamped at zero.
    let racer = seed_product(&state, "Ferris Plush", 300_000, 1).await?;
    let racing_order = |email: &str| CreateOrderRequest {
        customer_name: "R".into(),
        customer_email: email.into(),
        total: 300_000,
        items: vec![line_item(&racer)],
    };
    let (first, second) = tokio::join!(
        order_service::place_order(&state, racing_order("r1@x.com")),
        order_service::place_order(&state, racing_order("r2@x.com")),
    );
    let first = first?;
    let second = second?;
    assert_eq!(first.status, OrderStatus::Pending);
    assert_eq!(second.status, OrderStatus::Pending);
    assert_ne!(first.id, second.id);
    assert_eq!(fetch_stock(&state, racer.id).await?, 0);
    let oversold = order_service::list_orders(&state)
        .await?
        .into_iter()
        .filter(|o| o.items.iter().any(|item| item.id == racer.id))
        .count();
    assert_eq!(oversold, 2, "both checkouts against the last unit are recorded");

    // A row with garbage items/status (written out-of-band) still lists,
    // falling back to an empty snapshot and PENDING.
    let backend = state.orm.get_database_backend();
    state
        .orm
        .execute(Statement::from_string(
            backend,
            "INSERT INTO orders (customer_name, customer_email, total, status, items) \
             VALUES ('X', 'x@x.com', 1, 'CANCELLED', 'not-json')",
        ))
        .await?;
    let mangled = order_service::list_orders(&state)
        .await?
        .into_iter()
        .find(|o| o.customer_email == "x@x.com")
        .expect("out-of-band row listed");
    assert!(mangled.items.is_empty());
    assert_eq!(mangled.status, OrderStatus::Pending);

    Ok(())
}

async fn setup_state(database_url: &str) -> anyhow::Result<AppState> {
    let pool = create_pool(database_url).await?;
    let orm = create_orm_conn(database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Clean tables between runs.
    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE orders, products, logs RESTART IDENTITY",
    ))
    .await?;

    Ok(AppState { pool, orm })
}

async fn seed_product(
    state: &AppState,
    name: &str,
    price: i64,
    stock: i32,
) -> anyhow::Result<Product> {
    let model = ProductActive {
        id: NotSet,
        name: Set(name.to_string()),
        price: Set(price),
        description: Set(String::new()),
        image: Set(format!("https://picsum.photos/seed/{name}/400/400")),
        category: Set("Test".to_string()),
        stock: Set(stock),
    }
    .insert(&state.orm)
    .await?;

    Ok(product_service::product_from_entity(model))
}

async fn fetch_stock(state: &AppState, id: i64) -> anyhow::Result<i32> {
    let products = product_service::list_products(state).await?;
    let product = products
        .into_iter()
        .find(|p| p.id == id)
        .expect("product exists");
    Ok(product.stock)
}

fn line_item(product: &Product) -> LineItem {
    LineItem {
        id: product.id,
        name: product.name.clone(),
        price: product.price,
        image: product.image.clone(),
    }
}
