use serde::{Deserialize, Serialize};

use crate::{Capabilities, Principal, Role, TokenStore};

/// Session state as reported by the external authentication collaborator
/// on every change (login, logout, token refresh, role change).
///
/// The collaborator owns the OIDC protocol, token refresh and expiry; this
/// crate only consumes the resulting snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub authenticated: bool,
    pub token: Option<String>,
    pub username: Option<String>,
    pub roles: Vec<Role>,
}

impl SessionState {
    /// The state reported after logout or before the first login.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            token: None,
            username: None,
            roles: Vec::new(),
        }
    }
}

/// Applies session states to the token store and keeps the derived
/// principal and capabilities current.
///
/// Capabilities are recomputed on every state, never cached across a role
/// change.
#[derive(Debug, Clone)]
pub struct Session {
    tokens: TokenStore,
    principal: Option<Principal>,
    capabilities: Capabilities,
}

impl Session {
    pub fn new(tokens: TokenStore) -> Self {
        Self {
            tokens,
            principal: None,
            capabilities: Capabilities::NONE,
        }
    }

    /// Apply a reported session state: update the token store and re-derive
    /// principal and capabilities.
    pub fn apply(&mut self, state: SessionState) {
        match (state.authenticated, state.token) {
            (true, Some(token)) => self.tokens.set(token),
            _ => self.tokens.clear(),
        }

        if state.authenticated {
            let username = state.username.unwrap_or_default();
            self.capabilities = Capabilities::for_roles(&state.roles);
            self.principal = Some(Principal::new(username, state.roles));
        } else {
            self.capabilities = Capabilities::NONE;
            self.principal = None;
        }
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }
}
