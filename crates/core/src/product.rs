use serde::{Deserialize, Serialize};

/// Catalog product as served by `GET /api/produits`.
///
/// Owned and mutated exclusively by the product service; this is a
/// projection. `id` is server-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    #[serde(rename = "nom")]
    pub name: String,

    pub description: String,

    /// Unit price as the backend serializes it (JSON number, non-negative).
    #[serde(rename = "prix")]
    pub price: f64,

    #[serde(rename = "quantiteStock")]
    pub stock: i64,
}

/// Create/update payload for a product (`POST`/`PUT /api/produits`).
///
/// Same fields as [`Product`] minus the server-assigned `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(rename = "nom")]
    pub name: String,

    pub description: String,

    #[serde(rename = "prix")]
    pub price: f64,

    #[serde(rename = "quantiteStock")]
    pub stock: i64,
}

impl From<Product> for ProductInput {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
        }
    }
}
