//! `vitrine-auth` — authentication boundary of the client.
//!
//! This crate is intentionally decoupled from HTTP and from the identity
//! provider's protocol: an external collaborator performs the OIDC dance and
//! reports session states; this crate holds the resulting token and derives
//! role-based capabilities from it.

pub mod policy;
pub mod principal;
pub mod roles;
pub mod session;
pub mod token;

pub use policy::Capabilities;
pub use principal::Principal;
pub use roles::Role;
pub use session::{Session, SessionState};
pub use token::TokenStore;
