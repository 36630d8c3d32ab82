//! Typed client for the order service (resource family B).

use vitrine_core::{CreateOrderRequest, Order};

use crate::dispatcher::Dispatcher;
use crate::error::ApiResult;

/// Operations on `/api/commandes`.
#[derive(Debug, Clone)]
pub struct OrderClient {
    dispatcher: Dispatcher,
}

impl OrderClient {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// The calling user's own orders.
    pub async fn mine(&self) -> ApiResult<Vec<Order>> {
        self.dispatcher.get("/api/commandes").await
    }

    /// Every order in the system. Privileged; non-admin callers get 403.
    pub async fn all(&self) -> ApiResult<Vec<Order>> {
        self.dispatcher.get("/api/commandes/all").await
    }

    pub async fn get(&self, id: i64) -> ApiResult<Order> {
        self.dispatcher.get(&format!("/api/commandes/{id}")).await
    }

    /// Submit a new order. The service assigns the id, timestamps it,
    /// computes the authoritative total and decrements stock.
    pub async fn create(&self, request: &CreateOrderRequest) -> ApiResult<Order> {
        self.dispatcher.post("/api/commandes", request).await
    }
}
