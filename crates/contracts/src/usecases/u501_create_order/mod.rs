pub mod draft;
pub mod request;
pub mod response;

pub use draft::{OrderDraft, MAX_CUSTOMER_NAME_LEN};
pub use request::{AddOrderItemRequest, CreateOrderRequest};
pub use response::CreateOrderResponse;
