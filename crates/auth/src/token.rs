use std::sync::{Arc, RwLock};

/// Shared holder of the current bearer token.
///
/// Cloning yields another handle to the same value; the session layer
/// overwrites it wholesale on every session change (last write wins) and
/// the request dispatchers read it at dispatch time, never at construction
/// time. Validity and expiry are the identity provider's responsibility;
/// this is a pure state holder.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current token. Immediately visible to every handle.
    pub fn set(&self, token: impl Into<String>) {
        *self.write() = Some(token.into());
    }

    /// Drop the current token (session ended or not yet established).
    pub fn clear(&self) {
        *self.write() = None;
    }

    /// The most recently set token, if any.
    pub fn current(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<String>> {
        // A poisoned lock only means a reader/writer panicked mid-access;
        // the Option inside is still coherent, so keep serving it.
        self.token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
