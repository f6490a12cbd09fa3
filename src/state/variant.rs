//! Variant data as announced by the variant-selection widget

use serde::{Deserialize, Serialize};

/// Identifier of a purchasable variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u64);

impl std::fmt::Display for VariantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Snapshot of a purchasable variant, embedded in every variant-change
/// notification. Read-only to this layer; the latest notification always
/// supersedes the previous one. Prices are integer minor units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantState {
    pub id: VariantId,
    pub price: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<u64>,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory_quantity: Option<i64>,
}

impl VariantState {
    /// Price presentation for this variant: a sale pairing only when the
    /// compare-at price strictly exceeds the selling price.
    pub fn price_display(&self) -> PriceDisplay {
        match self.compare_at_price {
            Some(compare_at) if compare_at > self.price => PriceDisplay::Sale {
                price: self.price,
                compare_at,
            },
            _ => PriceDisplay::Regular(self.price),
        }
    }
}

/// How the sticky control renders the current price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDisplay {
    Regular(u64),
    /// Sale price alongside the struck-through comparison price.
    Sale { price: u64, compare_at: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(price: u64, compare_at_price: Option<u64>) -> VariantState {
        VariantState {
            id: VariantId(1),
            price,
            compare_at_price,
            available: true,
            inventory_quantity: None,
        }
    }

    #[test]
    fn higher_compare_at_renders_as_sale() {
        assert_eq!(
            variant(1_000, Some(1_500)).price_display(),
            PriceDisplay::Sale { price: 1_000, compare_at: 1_500 }
        );
    }

    #[test]
    fn equal_or_lower_compare_at_renders_regular() {
        assert_eq!(variant(1_000, Some(1_000)).price_display(), PriceDisplay::Regular(1_000));
        assert_eq!(variant(1_000, Some(800)).price_display(), PriceDisplay::Regular(1_000));
    }

    #[test]
    fn absent_compare_at_renders_regular() {
        assert_eq!(variant(1_000, None).price_display(), PriceDisplay::Regular(1_000));
    }

    #[test]
    fn notification_payload_deserializes_with_optional_fields_missing() {
        let variant: VariantState =
            serde_json::from_str(r#"{"id": 42, "price": 1999, "available": false}"#).unwrap();
        assert_eq!(variant.id, VariantId(42));
        assert_eq!(variant.compare_at_price, None);
        assert_eq!(variant.inventory_quantity, None);
        assert!(!variant.available);
    }
}
