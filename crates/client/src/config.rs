//! Static configuration: backend base addresses and identity-provider
//! connection parameters.
//!
//! This is the whole configuration surface of the client core. No files,
//! no CLI; the embedding shell deserializes or constructs these and passes
//! them down. Defaults match the reference deployment.

use serde::{Deserialize, Serialize};
use url::Url;

fn default_product_base() -> Url {
    Url::parse("http://localhost:8081").expect("default product base URL parses")
}

fn default_order_base() -> Url {
    Url::parse("http://localhost:8082").expect("default order base URL parses")
}

fn default_issuer() -> Url {
    Url::parse("http://localhost:8180/").expect("default issuer URL parses")
}

/// Base addresses of the two backend resource families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    #[serde(default = "default_product_base")]
    pub product_base: Url,

    #[serde(default = "default_order_base")]
    pub order_base: Url,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            product_base: default_product_base(),
            order_base: default_order_base(),
        }
    }
}

/// Connection parameters for the external identity provider.
///
/// The provider's protocol (OIDC, refresh, expiry) lives entirely in the
/// authentication collaborator; these values only tell it where to go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityProvider {
    #[serde(default = "default_issuer")]
    pub issuer_url: Url,

    #[serde(default = "IdentityProvider::default_realm")]
    pub realm: String,

    #[serde(default = "IdentityProvider::default_client_id")]
    pub client_id: String,
}

impl IdentityProvider {
    fn default_realm() -> String {
        "microservices-app".to_string()
    }

    fn default_client_id() -> String {
        "frontend-client".to_string()
    }
}

impl Default for IdentityProvider {
    fn default() -> Self {
        Self {
            issuer_url: default_issuer(),
            realm: Self::default_realm(),
            client_id: Self::default_client_id(),
        }
    }
}
