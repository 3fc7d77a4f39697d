use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{EntityTrait, Set};

use crate::{
    entity::products::{ActiveModel, Column},
    entity::Products,
    error::AppResult,
    models::{LogLevel, LogSource},
    state::AppState,
    telemetry::log_event,
};

/// Fixed demo catalog: (name, description, image, category, price, stock).
pub fn demo_catalog() -> [(&'static str, &'static str, &'static str, &'static str, i64, i32); 4] {
    [
        (
            "iPhone 15 Pro",
            "Flagship Apple smartphone",
            "https://picsum.photos/seed/iphone/400/400",
            "Mobile",
            25_000_000,
            10,
        ),
        (
            "MacBook M3",
            "Powerful laptop for pros",
            "https://picsum.photos/seed/macbook/400/400",
            "Laptop",
            45_000_000,
            5,
        ),
        (
            "AirPods Pro",
            "Noise cancelling earbuds",
            "https://picsum.photos/seed/airpods/400/400",
            "Accessories",
            5_500_000,
            20,
        ),
        (
            "Apple Watch Ultra",
            "Rugged smartwatch",
            "https://picsum.photos/seed/watch/400/400",
            "Watch",
            18_000_000,
            8,
        ),
    ]
}

pub async fn seed_catalog(state: &AppState) -> AppResult<()> {
    if let Err(err) = log_event(
        &state.pool,
        LogSource::Be,
        LogLevel::Info,
        "Starting data seeding process",
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "telemetry log failed");
    }

    let rows = demo_catalog()
        .into_iter()
        .map(|(name, description, image, category, price, stock)| ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            price: Set(price),
            description: Set(description.to_string()),
            image: Set(image.to_string()),
            category: Set(category.to_string()),
            stock: Set(stock),
        });

    let insert_result = Products::insert_many(rows)
        .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
        .exec_without_returning(&state.orm)
        .await;

    match insert_result {
        Ok(_) => {
            if let Err(err) = log_event(
                &state.pool,
                LogSource::Be,
                LogLevel::Info,
                "Seeding completed successfully",
                None,
            )
            .await
            {
                tracing::warn!(error = %err, "telemetry log failed");
            }
            Ok(())
        }
        Err(err) => {
            if let Err(log_err) = log_event(
                &state.pool,
                LogSource::Be,
                LogLevel::Error,
                "Seeding failed",
                Some(serde_json::json!({ "error": err.to_string() })),
            )
            .await
            {
                tracing::warn!(error = %log_err, "telemetry log failed");
            }
            Err(err.into())
        }
    }
}
