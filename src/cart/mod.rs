//! Cart endpoint boundary
//!
//! The only operation this layer performs against the storefront: add one
//! unit of one variant. The trait seam exists so pages can be wired against
//! the real endpoint or a scripted stand-in.

pub mod gateway;
pub mod http;

// Re-export main types
pub use gateway::{AddToCartRequest, CartError, CartGateway, CartLine, CartSummary};
pub use http::HttpCartGateway;
