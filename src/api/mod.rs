//! Stub storefront cart endpoint
//!
//! Stands in for the real cart API during demo sessions and integration
//! tests. This router is the only owner of cart contents; the widgets only
//! ever see it through the wire.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use handlers::*;

pub use handlers::ShopState;

/// Create the stub storefront router.
pub fn create_router(state: Arc<ShopState>) -> Router {
    Router::new()
        .route("/cart/add.js", post(cart_add_handler))
        .route("/cart.js", get(cart_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
