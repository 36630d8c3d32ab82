use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Realm role granted by the identity provider.
///
/// Roles are opaque strings at this layer; mapping roles to capabilities is
/// the job of [`crate::policy`]. The two roles the deployment actually
/// grants are exposed as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    /// Back-office role: manages the catalog, sees every order.
    pub const ADMIN: Role = Role(Cow::Borrowed("ADMIN"));

    /// Customer role: browses the catalog, places orders, sees own orders.
    pub const CLIENT: Role = Role(Cow::Borrowed("CLIENT"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
