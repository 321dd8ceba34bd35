//! API plumbing shared by every page.
//!
//! The admin talks to the pizzeria API on port 3333 of the same host
//! that serves the frontend.

use gloo_net::http::Response;
use serde::Deserialize;

/// Get the base URL for API requests.
///
/// Constructs the API base URL from the current window location,
/// using port 3333 for the backend server. Returns an empty string
/// if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3333", protocol, hostname)
}

/// Build a full API URL from a path such as "/tables".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error payload the API attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Extract the human-readable message from a failed response.
///
/// The API reports failures as a JSON body with an `error` field; when
/// the body is not in that shape the HTTP status is reported instead.
pub async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP error: {}", status),
    }
}
