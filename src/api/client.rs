//! HTTP API Client
//!
//! Functions for communicating with the ServiceDash REST API. Thin fetch
//! wrapper: JSON in, JSON out, no retries, no caching. Non-2xx responses
//! surface as a generic error carrying the HTTP status.

use gloo_net::http::Request;

use crate::state::board::ColumnKey;
use crate::state::global::{Customer, DashboardStats, Order};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// localStorage key holding the configured base URL
const API_URL_STORAGE_KEY: &str = "servicedash_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_STORAGE_KEY, url);
        }
    }
}

/// Derive a placeholder e-mail address from a customer name:
/// lowercased, spaces replaced by dots.
pub fn placeholder_email(name: &str) -> String {
    format!("{}@example.com", name.trim().to_lowercase().replace(' ', "."))
}

// ============ API Functions ============

/// Fetch aggregate dashboard stats
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/dashboard/stats", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch stats: HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all customers
pub async fn fetch_customers() -> Result<Vec<Customer>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/customers", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch customers: HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Create a new customer
pub async fn create_customer(name: &str, email: &str) -> Result<Customer, String> {
    #[derive(serde::Serialize)]
    struct CreateCustomerRequest {
        name: String,
        email: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/customers", api_base))
        .json(&CreateCustomerRequest {
            name: name.to_string(),
            email: email.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create customer: HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Fetch all orders (the board buckets them by status)
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/orders", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Create a new order in the `new_requests` column
pub async fn create_order(title: &str, client_id: &str) -> Result<Order, String> {
    #[derive(serde::Serialize)]
    struct CreateOrderRequest {
        title: String,
        status: String,
        priority: String,
        tags: Vec<String>,
        client_id: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/orders", api_base))
        .json(&CreateOrderRequest {
            title: title.to_string(),
            status: ColumnKey::NewRequests.as_str().to_string(),
            priority: "normal".to_string(),
            tags: vec!["New".to_string()],
            client_id: client_id.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create order: HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

/// Persist an order's new workflow stage
pub async fn update_order_status(order_id: &str, status: ColumnKey) -> Result<Order, String> {
    #[derive(serde::Serialize)]
    struct UpdateStatusRequest {
        status: String,
    }

    let api_base = get_api_base();

    let response = Request::patch(&format!("{}/orders/{}", api_base, order_id))
        .json(&UpdateStatusRequest {
            status: status.as_str().to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update order status: HTTP {}", response.status()));
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_email_from_name() {
        assert_eq!(placeholder_email("Jane Doe"), "jane.doe@example.com");
        assert_eq!(placeholder_email("bob"), "bob@example.com");
        assert_eq!(
            placeholder_email("Ana Maria Silva"),
            "ana.maria.silva@example.com"
        );
    }

    #[test]
    fn test_placeholder_email_trims_surrounding_whitespace() {
        assert_eq!(placeholder_email("  Jane Doe "), "jane.doe@example.com");
    }
}
