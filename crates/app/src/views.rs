//! Read-only projections the UI shell renders.
//!
//! Both views refresh on explicit calls only — no subscriptions, no
//! polling. Catalog and order refreshes are independent and may run
//! concurrently; neither waits for the other, and a view whose refresh
//! failed keeps showing its previous data alongside the error.

use tracing::warn;

use vitrine_auth::Capabilities;
use vitrine_client::{ApiError, OrderClient, ProductClient};
use vitrine_core::{Order, Product};

/// The product catalog as last loaded.
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    products: Vec<Product>,
    loading: bool,
    error: Option<ApiError>,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last successfully loaded catalog snapshot. Also what the draft
    /// builder resolves prices against.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Reload the full catalog. On failure the previous snapshot is kept
    /// and the classified error is held for display.
    pub async fn refresh(&mut self, products: &ProductClient) {
        self.loading = true;
        match products.list().await {
            Ok(list) => {
                self.products = list;
                self.error = None;
            }
            Err(error) => {
                warn!(%error, "catalog refresh failed");
                self.error = Some(error);
            }
        }
        self.loading = false;
    }
}

/// The order list as last loaded: the caller's own orders, or every order
/// when the session is privileged to see them.
#[derive(Debug, Clone, Default)]
pub struct OrdersView {
    orders: Vec<Order>,
    loading: bool,
    error: Option<ApiError>,
}

impl OrdersView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Reload the order list. The endpoint — all orders vs own orders — is
    /// chosen from `capabilities` on every call, so a session/role change
    /// takes effect on the very next refresh. On failure the previous list
    /// is left unmodified and loading still resolves.
    pub async fn refresh(&mut self, orders: &OrderClient, capabilities: Capabilities) {
        self.loading = true;
        let result = if capabilities.can_view_all_orders {
            orders.all().await
        } else {
            orders.mine().await
        };
        match result {
            Ok(list) => {
                self.orders = list;
                self.error = None;
            }
            Err(error) => {
                warn!(%error, "order refresh failed");
                self.error = Some(error);
            }
        }
        self.loading = false;
    }
}
