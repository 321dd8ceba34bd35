use serde::{Deserialize, Serialize};

/// Product reference row as served by `GET /products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,

    /// Unit price; `POST /order/add` expects it as the line item amount.
    pub price: f64,

    pub description: String,
    pub category_id: String,

    /// Image attachment metadata; shape varies by upload backend, may be null.
    #[serde(default)]
    pub file: Option<serde_json::Value>,
}
