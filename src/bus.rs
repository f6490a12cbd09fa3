//! Page-level notification bus
//!
//! An explicit broadcast channel per notification kind replaces the ambient
//! page-global event target: components hold a `PageBus` clone and never
//! reference each other directly.

use tokio::sync::broadcast;
use tracing::debug;

use crate::state::VariantState;

/// Broadcast capacity. Variant-switch bursts are short, and a lagging
/// subscriber only ever cares about the latest notification anyway.
pub const EVENT_CAPACITY: usize = 64;

/// Emitted by the variant-selection widget whenever the shopper picks a new
/// purchasable configuration.
#[derive(Debug, Clone)]
pub struct VariantChanged {
    pub variant: VariantState,
}

/// Re-broadcast after a successful add-to-cart with the server-reported
/// item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartUpdated {
    pub count: u64,
}

/// Shared notification channel handle.
#[derive(Debug, Clone)]
pub struct PageBus {
    variant_tx: broadcast::Sender<VariantChanged>,
    cart_tx: broadcast::Sender<CartUpdated>,
}

impl PageBus {
    pub fn new() -> Self {
        let (variant_tx, _) = broadcast::channel(EVENT_CAPACITY);
        let (cart_tx, _) = broadcast::channel(EVENT_CAPACITY);
        Self { variant_tx, cart_tx }
    }

    /// Announce a newly selected variant to every subscriber.
    pub fn announce_variant(&self, variant: VariantState) {
        if self.variant_tx.send(VariantChanged { variant }).is_err() {
            debug!("variant change dropped: no subscribers");
        }
    }

    pub fn subscribe_variants(&self) -> broadcast::Receiver<VariantChanged> {
        self.variant_tx.subscribe()
    }

    /// Announce the running cart item count after a successful add.
    pub fn announce_cart_updated(&self, count: u64) {
        if self.cart_tx.send(CartUpdated { count }).is_err() {
            debug!("cart update dropped: no subscribers");
        }
    }

    pub fn subscribe_cart_updates(&self) -> broadcast::Receiver<CartUpdated> {
        self.cart_tx.subscribe()
    }
}

impl Default for PageBus {
    fn default() -> Self {
        Self::new()
    }
}
