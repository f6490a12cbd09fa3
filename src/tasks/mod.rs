//! Component tasks
//!
//! Each widget runs as an independent task. They share the page bus and
//! nothing else; presentation flows out through per-component watch
//! channels.

pub mod countdown;
pub mod sticky_cart;
pub mod stock_sync;

// Re-export main entry points
pub use countdown::countdown_task;
pub use sticky_cart::{spawn_sticky_cart, StickyCartHandle};
pub use stock_sync::spawn_stock_sync;
