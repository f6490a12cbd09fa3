//! Low-stock indicator state

use crate::state::variant::{VariantId, VariantState};

/// Indicators with more than this many units on hand stay hidden. Fixed
/// rather than configurable so behavior is reproducible across installs.
pub const STOCK_VISIBILITY_THRESHOLD: i64 = 10;

/// One low-stock indicator, bound to a single variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockIndicator {
    pub variant_id: VariantId,
    pub quantity: Option<i64>,
    pub visible: bool,
}

impl StockIndicator {
    /// Indicators start empty and hidden until their variant is announced.
    pub fn new(variant_id: VariantId) -> Self {
        Self { variant_id, quantity: None, visible: false }
    }

    /// Mirror a variant-change notification. Indicators bound to another
    /// variant are left untouched and simply go stale until their own
    /// variant comes around again; an announcement without an inventory
    /// quantity is skipped the same way.
    pub fn apply(&mut self, variant: &VariantState) {
        if variant.id != self.variant_id {
            return;
        }
        let Some(quantity) = variant.inventory_quantity else {
            return;
        };
        self.quantity = Some(quantity);
        self.visible = quantity <= STOCK_VISIBILITY_THRESHOLD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn announcement(id: u64, inventory_quantity: Option<i64>) -> VariantState {
        VariantState {
            id: VariantId(id),
            price: 1_000,
            compare_at_price: None,
            available: true,
            inventory_quantity,
        }
    }

    #[test]
    fn low_quantity_shows_the_indicator() {
        let mut indicator = StockIndicator::new(VariantId(5));
        indicator.apply(&announcement(5, Some(3)));
        assert_eq!(indicator.quantity, Some(3));
        assert!(indicator.visible);
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut indicator = StockIndicator::new(VariantId(5));
        indicator.apply(&announcement(5, Some(STOCK_VISIBILITY_THRESHOLD)));
        assert!(indicator.visible);

        indicator.apply(&announcement(5, Some(STOCK_VISIBILITY_THRESHOLD + 1)));
        assert!(!indicator.visible);
    }

    #[test]
    fn other_variants_leave_the_indicator_stale() {
        let mut indicator = StockIndicator::new(VariantId(5));
        indicator.apply(&announcement(5, Some(2)));
        indicator.apply(&announcement(6, Some(500)));
        assert_eq!(indicator.quantity, Some(2));
        assert!(indicator.visible);
    }

    #[test]
    fn missing_quantity_is_skipped() {
        let mut indicator = StockIndicator::new(VariantId(5));
        indicator.apply(&announcement(5, None));
        assert_eq!(indicator.quantity, None);
        assert!(!indicator.visible);
    }
}
