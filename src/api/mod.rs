//! HTTP surface over [`PriceService`].

pub mod error;
pub mod handlers;

use crate::PriceService;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub type AppState = Arc<PriceService>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route("/products/detailed", get(handlers::list_products_detailed))
        .route(
            "/products/:id",
            get(handlers::get_product).delete(handlers::delete_product),
        )
        .route(
            "/products/:id/prices",
            get(handlers::prices_by_id).post(handlers::create_price_for_product),
        )
        .route("/products/:id/lowest_price", get(handlers::lowest_price))
        .route("/products/name/:name/prices", get(handlers::prices_by_name))
        .route("/prices", get(handlers::list_prices))
        .route("/prices/update", post(handlers::update_prices))
        .route("/prices/:id", delete(handlers::delete_price))
        .route("/retailers", get(handlers::list_retailers))
        .route("/urls", get(handlers::list_urls))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
