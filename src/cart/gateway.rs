//! Cart gateway trait, wire types, and error taxonomy

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::VariantId;

/// Body of `POST /cart/add.js`. The storefront cart API takes a list of
/// line items even though this layer only ever submits one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub items: Vec<CartLine>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CartLine {
    pub id: VariantId,
    pub quantity: u32,
}

impl AddToCartRequest {
    /// The only shape this layer submits: one unit of one variant.
    pub fn single(variant_id: VariantId) -> Self {
        Self { items: vec![CartLine { id: variant_id, quantity: 1 }] }
    }
}

/// The slice of the cart response this layer consumes. A payload without an
/// item count reads as zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    #[serde(default)]
    pub item_count: u64,
}

/// Failure modes of one add-to-cart call. The controller collapses every
/// variant into the same Failed transition; the distinctions exist for the
/// diagnostic log line.
#[derive(Debug, Error)]
pub enum CartError {
    #[error("cart endpoint unreachable: {0}")]
    Transport(String),
    #[error("cart endpoint rejected the add ({status}): {detail}")]
    Endpoint { status: u16, detail: String },
    #[error("unreadable cart response: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Network boundary for cart mutations.
#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn add_to_cart(&self, request: AddToCartRequest) -> Result<CartSummary, CartError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_request_matches_the_wire_shape() {
        let request = AddToCartRequest::single(VariantId(7));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"items": [{"id": 7, "quantity": 1}]}));
    }

    #[test]
    fn summary_without_item_count_reads_as_zero() {
        let summary: CartSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn summary_ignores_extra_response_fields() {
        let summary: CartSummary =
            serde_json::from_str(r#"{"item_count": 3, "token": "abc", "note": null}"#).unwrap();
        assert_eq!(summary.item_count, 3);
    }
}
