//! Utility functions module

pub mod money;
pub mod signals;

// Re-export main functions
pub use money::{format_cents, format_price};
pub use signals::shutdown_signal;
