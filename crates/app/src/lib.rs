//! `vitrine-app` — order composition and read-side view models.
//!
//! This crate sits between the UI shell and the typed backend clients: the
//! [`OrderDraft`] state machine owns the order being composed, and the view
//! models hold the catalog and order-list projections the shell renders.
//! The UI shell itself (routing, markup, styling) is an external
//! collaborator.

pub mod draft;
pub mod telemetry;
pub mod views;

pub use draft::{DraftLine, InvalidDraftState, OrderDraft, SubmitError};
pub use views::{CatalogView, OrdersView};
