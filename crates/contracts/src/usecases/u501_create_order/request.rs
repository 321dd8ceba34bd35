use serde::{Deserialize, Serialize};

/// Body for `POST /order` (order header).
///
/// `amount` stays the raw digits string the form collected; the API parses
/// it on its side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub name: String,
    pub table_id: String,
    pub amount: String,
}

/// Body for `POST /order/add` (attach one product line item).
///
/// `amount` here carries the selected product's unit price, not the form's
/// total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddOrderItemRequest {
    pub order_id: String,
    pub product_id: String,
    pub amount: f64,
}
