//! HTTP client wrapper - fetches the customer list and formats failures

use std::time::{Duration, Instant};

use crate::messages::NetworkResponse;
use crate::models::CustomerList;

/// Fetch `{ "customers": [...] }` from `url`
pub async fn fetch_customers(
    client: &reqwest::Client,
    url: &str,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let result = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await;

    let resp = match result {
        Ok(resp) => resp,
        Err(e) => {
            return NetworkResponse::Error {
                id: request_id,
                message: describe_transport_error(&e),
                time_ms: start.elapsed().as_millis() as u64,
            };
        }
    };

    let status = resp.status();
    if !status.is_success() {
        return NetworkResponse::Error {
            id: request_id,
            message: format!("Server error: {}", status),
            time_ms: start.elapsed().as_millis() as u64,
        };
    }

    match resp.json::<CustomerList>().await {
        Ok(list) => NetworkResponse::CustomersLoaded {
            id: request_id,
            customers: list.customers,
            time_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => NetworkResponse::Error {
            id: request_id,
            message: format!("Invalid response body: {}", e),
            time_ms: start.elapsed().as_millis() as u64,
        },
    }
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "Request timed out".to_string()
    } else if e.is_connect() {
        format!("Connection failed: {}", e)
    } else {
        format!("Request failed: {}", e)
    }
}

/// Create an HTTP client with the given timeout
pub fn create_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
