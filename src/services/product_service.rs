use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::{LogLevel, LogSource, Product},
    state::AppState,
    telemetry::log_event,
};

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let items = Products::find()
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(items)
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<Product> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(payload.name),
        price: Set(payload.price),
        description: Set(payload.description),
        image: Set(payload.image),
        category: Set(payload.category),
        stock: Set(payload.stock),
    };
    let product = active.insert(&state.orm).await?;

    if let Err(err) = log_event(
        &state.pool,
        LogSource::Be,
        LogLevel::Info,
        &format!("Product created: {}", product.name),
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "telemetry log failed");
    }

    Ok(product_from_entity(product))
}

pub async fn update_product(
    state: &AppState,
    id: i64,
    payload: UpdateProductRequest,
) -> AppResult<Product> {
    let existing = Products::find_by_id(id).one(&state.orm).await?;
    let existing = match existing {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(image) = payload.image {
        active.image = Set(image);
    }
    if let Some(category) = payload.category {
        active.category = Set(category);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(stock) = payload.stock {
        active.stock = Set(stock);
    }

    let product = active.update(&state.orm).await?;

    if let Err(err) = log_event(
        &state.pool,
        LogSource::Be,
        LogLevel::Info,
        &format!("Product updated: ID {id}"),
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "telemetry log failed");
    }

    Ok(product_from_entity(product))
}

pub async fn delete_product(state: &AppState, id: i64) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    if let Err(err) = log_event(
        &state.pool,
        LogSource::Be,
        LogLevel::Info,
        &format!("Product deleted: ID {id}"),
        None,
    )
    .await
    {
        tracing::warn!(error = %err, "telemetry log failed");
    }

    Ok(())
}

pub fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        image: model.image,
        category: model.category,
        price: model.price,
        stock: model.stock,
    }
}
