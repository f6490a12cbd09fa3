//! State management module
//!
//! Pure state and snapshot types for the three widgets. Everything here is
//! synchronous and side-effect free; the tasks module owns the channels and
//! timing around it.

pub mod countdown;
pub mod request;
pub mod sticky;
pub mod stock;
pub mod variant;

// Re-export main types
pub use countdown::{CountdownDisplay, CountdownSnapshot};
pub use request::{CartRequestState, LABEL_RESET_DELAY};
pub use sticky::{StickyDisplay, StickyState};
pub use stock::{StockIndicator, STOCK_VISIBILITY_THRESHOLD};
pub use variant::{PriceDisplay, VariantId, VariantState};
