use super::error::ApiError;
use super::AppState;
use crate::domain::entities::price::{NewPrice, Price};
use crate::domain::entities::product::{NewProduct, Product, ProductWithPrices};
use crate::domain::entities::source_url::SourceUrl;
use crate::domain::error::DomainError;
use crate::domain::ports::Page;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Serialize;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn create_product(
    State(svc): State<AppState>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<Product> {
    let Json(product) = body?;
    Ok(Json(svc.create_product(product)?))
}

pub async fn list_products(
    State(svc): State<AppState>,
    Query(page): Query<Page>,
) -> ApiResult<Vec<Product>> {
    Ok(Json(svc.list_products(&page)?))
}

pub async fn list_products_detailed(
    State(svc): State<AppState>,
) -> ApiResult<Vec<ProductWithPrices>> {
    Ok(Json(svc.list_products_with_prices()?))
}

pub async fn get_product(State(svc): State<AppState>, Path(id): Path<i64>) -> ApiResult<Product> {
    Ok(Json(svc.get_product(id)?))
}

pub async fn delete_product(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<DeleteResponse> {
    match svc.delete_product(id)? {
        0 => Err(DomainError::NotFound(format!("Product not found: {id}")).into()),
        _ => Ok(Json(DeleteResponse { deleted: true })),
    }
}

pub async fn create_price_for_product(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<NewPrice>, JsonRejection>,
) -> ApiResult<Price> {
    let Json(price) = body?;
    Ok(Json(svc.add_price(id, price)?))
}

pub async fn prices_by_id(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Vec<Price>> {
    Ok(Json(svc.get_prices_by_id(id)?))
}

pub async fn prices_by_name(
    State(svc): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Vec<Price>> {
    Ok(Json(svc.get_prices_by_name(&name)?))
}

pub async fn lowest_price(State(svc): State<AppState>, Path(id): Path<i64>) -> ApiResult<Price> {
    svc.get_lowest_price(id)?
        .map(Json)
        .ok_or_else(|| DomainError::NotFound(format!("No positive price recorded for product {id}")).into())
}

pub async fn list_prices(
    State(svc): State<AppState>,
    Query(page): Query<Page>,
) -> ApiResult<Vec<Price>> {
    Ok(Json(svc.list_prices(&page)?))
}

pub async fn delete_price(
    State(svc): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<DeleteResponse> {
    match svc.delete_price(id)? {
        0 => Err(DomainError::NotFound(format!("Price entry not found: {id}")).into()),
        _ => Ok(Json(DeleteResponse { deleted: true })),
    }
}

/// Starts a refresh in the background and answers right away. While a run is
/// in flight further triggers get 409 instead of queueing another fetch.
pub async fn update_prices(
    State(svc): State<AppState>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let permit = svc.begin_refresh()?;
    tokio::spawn(async move {
        if let Err(e) = svc.run_refresh(permit).await {
            tracing::error!(error = %e, "background price refresh failed");
        }
    });
    Ok((
        StatusCode::ACCEPTED,
        Json(MessageResponse {
            message: "Updating prices in the background".into(),
        }),
    ))
}

pub async fn list_retailers(State(svc): State<AppState>) -> ApiResult<Vec<String>> {
    Ok(Json(svc.list_retailers()?))
}

pub async fn list_urls(State(svc): State<AppState>) -> ApiResult<Vec<SourceUrl>> {
    Ok(Json(svc.list_urls()?))
}
