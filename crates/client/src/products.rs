//! Typed client for the product service (resource family A).

use vitrine_core::{Product, ProductInput};

use crate::dispatcher::Dispatcher;
use crate::error::ApiResult;

/// Operations on `/api/produits`.
///
/// Create/update/delete are admin-gated by the access policy on the UI
/// side; the service enforces the same rule authoritatively and answers
/// 403 if a request slips through anyway.
#[derive(Debug, Clone)]
pub struct ProductClient {
    dispatcher: Dispatcher,
}

impl ProductClient {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Fetch the full catalog. Always a complete reload, no incremental diff.
    pub async fn list(&self) -> ApiResult<Vec<Product>> {
        self.dispatcher.get("/api/produits").await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Product> {
        self.dispatcher.get(&format!("/api/produits/{id}")).await
    }

    pub async fn create(&self, input: &ProductInput) -> ApiResult<Product> {
        self.dispatcher.post("/api/produits", input).await
    }

    pub async fn update(&self, id: i64, input: &ProductInput) -> ApiResult<Product> {
        self.dispatcher.put(&format!("/api/produits/{id}"), input).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.dispatcher.delete(&format!("/api/produits/{id}")).await
    }
}
