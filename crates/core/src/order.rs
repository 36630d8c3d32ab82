use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of a submitted order, in wire shape.
///
/// `price` is resolved client-side from the last catalog snapshot at
/// submission time, but the order service holds price authority and may
/// override it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(rename = "produitId")]
    pub product_id: i64,

    #[serde(rename = "quantite")]
    pub quantity: u32,

    #[serde(rename = "prix")]
    pub price: f64,
}

/// An order as returned by the order service.
///
/// Immutable from the client's perspective once created: there are no
/// client-side edit or cancel operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,

    #[serde(rename = "dateCommande")]
    pub placed_at: DateTime<Utc>,

    /// Status lifecycle is owned by the order service; opaque here.
    #[serde(rename = "statut")]
    pub status: String,

    #[serde(rename = "montantTotal")]
    pub total: f64,

    #[serde(rename = "clientUsername")]
    pub client_username: String,

    #[serde(rename = "lignes", default)]
    pub lines: Vec<OrderLine>,
}

/// Body of `POST /api/commandes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "lignes")]
    pub lines: Vec<OrderLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_order_from_backend_json() {
        let body = r#"{
            "id": 7,
            "dateCommande": "2024-05-12T09:30:00Z",
            "statut": "EN_ATTENTE",
            "montantTotal": 99.8,
            "clientUsername": "alice",
            "lignes": [
                { "produitId": 3, "quantite": 2, "prix": 49.9 }
            ]
        }"#;

        let order: Order = serde_json::from_str(body).unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.status, "EN_ATTENTE");
        assert_eq!(order.client_username, "alice");
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.lines[0].product_id, 3);
        assert_eq!(order.lines[0].quantity, 2);
    }

    #[test]
    fn missing_lines_decodes_as_empty() {
        // Some list endpoints omit `lignes`; render as an order with no lines.
        let body = r#"{
            "id": 8,
            "dateCommande": "2024-05-12T09:30:00Z",
            "statut": "VALIDEE",
            "montantTotal": 0.0,
            "clientUsername": "bob"
        }"#;

        let order: Order = serde_json::from_str(body).unwrap();
        assert!(order.lines.is_empty());
    }

    #[test]
    fn create_request_uses_wire_names() {
        let request = CreateOrderRequest {
            lines: vec![OrderLine {
                product_id: 1,
                quantity: 2,
                price: 9.99,
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["lignes"][0]["produitId"], 1);
        assert_eq!(json["lignes"][0]["quantite"], 2);
        assert_eq!(json["lignes"][0]["prix"], 9.99);
    }
}
