use serde::{Deserialize, Serialize};

/// Response of `POST /order`.
///
/// The API returns the full order row; only the assigned id is consumed,
/// both for the follow-up `/order/add` call and the success message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub id: String,
}
