//! Sticky add-to-cart control state

use crate::config::{StickyConfig, VisibilityMode};
use crate::state::request::CartRequestState;
use crate::state::variant::{PriceDisplay, VariantId, VariantState};

/// Everything the sticky control remembers between inputs. The published
/// snapshot is always derived from this in one place rather than patched
/// incrementally, so no interleaving of scroll, variant, and request events
/// can leave the presentation mixing two eras.
#[derive(Debug, Clone)]
pub struct StickyState {
    visibility: VisibilityMode,
    intersecting: bool,
    request: CartRequestState,
    variant_id: Option<VariantId>,
    available: bool,
    price: Option<PriceDisplay>,
}

impl StickyState {
    pub fn new(config: &StickyConfig, initially_intersecting: bool) -> Self {
        Self {
            visibility: config.visibility,
            intersecting: initially_intersecting,
            request: CartRequestState::Idle,
            variant_id: None,
            available: false,
            price: None,
        }
    }

    /// Latest observer callback for the tracked anchor.
    pub fn set_intersecting(&mut self, intersecting: bool) {
        self.intersecting = intersecting;
    }

    /// Latest variant-change notification. Always applied, even while a
    /// request for an earlier variant is still in flight.
    pub fn apply_variant(&mut self, variant: &VariantState) {
        self.variant_id = Some(variant.id);
        self.available = variant.available;
        self.price = Some(variant.price_display());
    }

    /// Click transition. Yields the variant to submit only when the request
    /// machine is Idle and a variant id is known; any other click is
    /// dropped. Availability does not gate the transition.
    pub fn begin_submit(&mut self) -> Option<VariantId> {
        let variant_id = self.variant_id?;
        self.request.begin().then_some(variant_id)
    }

    /// Request resolution. Only the request state moves; variant-derived
    /// fields keep whatever the latest notification set.
    pub fn finish_submit(&mut self, success: bool) {
        self.request.finish(success);
    }

    /// Delayed return to Idle. The availability label comes back through
    /// derivation in `display`, not from a stored default.
    pub fn reset_request(&mut self) {
        self.request.reset();
    }

    pub fn request(&self) -> CartRequestState {
        self.request
    }

    /// Derive the full presentation snapshot.
    pub fn display(&self) -> StickyDisplay {
        let visible = match self.visibility {
            VisibilityMode::Always => true,
            VisibilityMode::OnScroll => !self.intersecting,
        };
        StickyDisplay {
            visible,
            busy: self.request.is_submitting(),
            enabled: self.available,
            label: self.label(),
            price: self.price,
            variant_id: self.variant_id,
        }
    }

    fn label(&self) -> &'static str {
        match self.request {
            CartRequestState::Submitting => "Adding...",
            CartRequestState::Succeeded => "Added!",
            CartRequestState::Failed => "Error",
            CartRequestState::Idle => {
                if self.available {
                    "Add to Cart"
                } else {
                    "Sold Out"
                }
            }
        }
    }
}

/// Presentation snapshot consumed by the host markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyDisplay {
    pub visible: bool,
    /// Busy presentation class, not an input lock.
    pub busy: bool,
    pub enabled: bool,
    pub label: &'static str,
    pub price: Option<PriceDisplay>,
    pub variant_id: Option<VariantId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_scroll() -> StickyConfig {
        StickyConfig { visibility: VisibilityMode::OnScroll }
    }

    fn variant(id: u64, price: u64, available: bool) -> VariantState {
        VariantState {
            id: VariantId(id),
            price,
            compare_at_price: None,
            available,
            inventory_quantity: None,
        }
    }

    #[test]
    fn click_without_a_bound_variant_is_a_noop() {
        let mut state = StickyState::new(&on_scroll(), false);
        assert_eq!(state.begin_submit(), None);
        assert_eq!(state.request(), CartRequestState::Idle);
    }

    #[test]
    fn second_click_during_submission_is_dropped() {
        let mut state = StickyState::new(&on_scroll(), false);
        state.apply_variant(&variant(7, 1_000, true));
        assert_eq!(state.begin_submit(), Some(VariantId(7)));
        assert_eq!(state.begin_submit(), None);
    }

    #[test]
    fn sold_out_variant_still_submits_when_clicked() {
        // The only data guard on the click transition is a known variant id.
        let mut state = StickyState::new(&on_scroll(), false);
        state.apply_variant(&variant(7, 1_000, false));
        assert_eq!(state.begin_submit(), Some(VariantId(7)));
    }

    #[test]
    fn busy_clears_at_resolution_while_label_lingers() {
        let mut state = StickyState::new(&on_scroll(), false);
        state.apply_variant(&variant(7, 1_000, true));
        state.begin_submit();
        assert!(state.display().busy);
        assert_eq!(state.display().label, "Adding...");

        state.finish_submit(true);
        assert!(!state.display().busy);
        assert_eq!(state.display().label, "Added!");
    }

    #[test]
    fn idle_label_rederives_from_latest_availability() {
        let mut state = StickyState::new(&on_scroll(), false);
        state.apply_variant(&variant(7, 1_000, true));
        state.begin_submit();

        // Variant switches to a sold-out one while the request is in flight.
        state.apply_variant(&variant(8, 1_500, false));
        state.finish_submit(true);
        assert_eq!(state.display().label, "Added!");
        assert_eq!(state.display().price, Some(PriceDisplay::Regular(1_500)));
        assert!(!state.display().enabled);

        state.reset_request();
        assert_eq!(state.display().label, "Sold Out");
    }

    #[test]
    fn failure_shows_error_then_recovers_to_availability_label() {
        let mut state = StickyState::new(&on_scroll(), false);
        state.apply_variant(&variant(7, 1_000, true));
        state.begin_submit();
        state.finish_submit(false);
        assert_eq!(state.display().label, "Error");
        assert!(!state.display().busy);

        state.reset_request();
        assert_eq!(state.display().label, "Add to Cart");
        assert_eq!(state.begin_submit(), Some(VariantId(7)));
    }

    #[test]
    fn on_scroll_visibility_tracks_the_anchor() {
        let mut state = StickyState::new(&on_scroll(), true);
        assert!(!state.display().visible);
        state.set_intersecting(false);
        assert!(state.display().visible);
        state.set_intersecting(true);
        assert!(!state.display().visible);
    }

    #[test]
    fn always_mode_is_visible_from_the_start() {
        let config = StickyConfig { visibility: VisibilityMode::Always };
        let mut state = StickyState::new(&config, true);
        assert!(state.display().visible);
        state.set_intersecting(false);
        assert!(state.display().visible);
    }
}
