use contracts::domain::a001_dining_table::DiningTable;
use contracts::domain::a003_user::User;
use contracts::projections::p900_sales_report::dto::{PaymentRecord, PaymentsQuery};
use gloo_net::http::Request;

use crate::shared::api::{api_url, error_message};

/// Tables offered by the report filter.
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

/// Staff members offered by the report filter.
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

/// Settled payments matching the filter.
pub async fn fetch_payments(query: &PaymentsQuery) -> Result<Vec<PaymentRecord>, String> {
    let response = Request::post(&api_url("/payments"))
        .json(query)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    let data: Vec<PaymentRecord> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
