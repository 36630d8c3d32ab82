//! `vitrine-core` — read-model projections of the backend services.
//!
//! This crate contains the **wire shapes** exchanged with the product and
//! order services: serde models whose JSON field names are the backend's
//! (French) names. The client is never the source of truth for any of them.

pub mod order;
pub mod product;

pub use order::{CreateOrderRequest, Order, OrderLine};
pub use product::{Product, ProductInput};
