//! `vitrine-client` — HTTP access to the two backend resource families.
//!
//! One [`Dispatcher`] per resource family (products, orders), each bound to
//! a fixed base address. Every outbound request reads the token store at
//! dispatch time and carries the bearer token when one is present; every
//! failure is classified into the small [`ApiError`] taxonomy and returned
//! to the caller — never retried, never swallowed.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod orders;
pub mod products;

pub use config::{IdentityProvider, ServiceEndpoints};
pub use dispatcher::Dispatcher;
pub use error::{ApiError, ApiResult};
pub use orders::OrderClient;
pub use products::ProductClient;
