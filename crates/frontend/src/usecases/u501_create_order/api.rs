use contracts::domain::a001_dining_table::DiningTable;
use contracts::domain::a002_product::Product;
use contracts::domain::a003_user::User;
use contracts::usecases::u501_create_order::{
    AddOrderItemRequest, CreateOrderRequest, CreateOrderResponse,
};
use gloo_net::http::Request;

use crate::shared::api::{api_url, error_message};

/// Tables the new order can be attached to.
pub async fn fetch_tables() -> Result<Vec<DiningTable>, String> {
    let response = Request::get(&api_url("/tables"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: Vec<DiningTable> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Menu products offered in the form.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/products"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: Vec<Product> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Staff members shown in the waiter select.
pub async fn fetch_users() -> Result<Vec<User>, String> {
    let response = Request::get(&api_url("/users"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: Vec<User> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Open the order and get its id back.
pub async fn create_order(request: &CreateOrderRequest) -> Result<CreateOrderResponse, String> {
    let response = Request::post(&api_url("/order"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: CreateOrderResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Attach the chosen product to an already opened order.
pub async fn add_order_item(request: &AddOrderItemRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/order/add"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}
