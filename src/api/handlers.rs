//! Stub endpoint handlers

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info, warn};

use crate::cart::AddToCartRequest;
use crate::state::{VariantId, VariantState};
use super::responses::{CartErrorResponse, CartResponse};

type Rejection = (StatusCode, Json<CartErrorResponse>);

/// The in-memory shop behind the stub: a variant catalog and the running
/// cart item count.
#[derive(Debug, Default)]
pub struct ShopState {
    catalog: HashMap<VariantId, VariantState>,
    item_count: Mutex<u64>,
}

impl ShopState {
    pub fn with_catalog(variants: impl IntoIterator<Item = VariantState>) -> Self {
        Self {
            catalog: variants.into_iter().map(|v| (v.id, v)).collect(),
            item_count: Mutex::new(0),
        }
    }

    pub fn item_count(&self) -> u64 {
        self.item_count.lock().map(|count| *count).unwrap_or(0)
    }
}

/// Handle POST /cart/add.js - add line items to the cart
pub async fn cart_add_handler(
    State(shop): State<Arc<ShopState>>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartResponse>, Rejection> {
    if request.items.is_empty() {
        return Err(rejected("cart add without line items"));
    }

    for line in &request.items {
        let Some(variant) = shop.catalog.get(&line.id) else {
            warn!("cart add rejected: unknown variant {}", line.id);
            return Err(rejected(format!("variant {} not found", line.id)));
        };
        if !variant.available {
            warn!("cart add rejected: variant {} is sold out", line.id);
            return Err(rejected(format!("variant {} is sold out", line.id)));
        }
    }

    let added: u64 = request.items.iter().map(|line| u64::from(line.quantity)).sum();
    let count = {
        let mut count = match shop.item_count.lock() {
            Ok(count) => count,
            Err(e) => {
                error!("cart state unavailable: {}", e);
                return Err(unavailable());
            }
        };
        *count += added;
        *count
    };

    info!("cart add accepted: {} item(s), cart now holds {}", added, count);
    Ok(Json(CartResponse::with_count(count)))
}

/// Handle GET /cart.js - current cart summary
pub async fn cart_handler(
    State(shop): State<Arc<ShopState>>,
) -> Result<Json<CartResponse>, Rejection> {
    match shop.item_count.lock() {
        Ok(count) => Ok(Json(CartResponse::with_count(*count))),
        Err(e) => {
            error!("cart state unavailable: {}", e);
            Err(unavailable())
        }
    }
}

fn rejected(description: impl Into<String>) -> Rejection {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(CartErrorResponse::rejected(description)),
    )
}

fn unavailable() -> Rejection {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(CartErrorResponse::unavailable()),
    )
}
