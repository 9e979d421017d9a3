//! Network messages - communication between App and Network layers

use crate::models::Customer;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the customer list
    FetchCustomers {
        id: u64,
        url: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Customer list decoded from a 2xx response
    CustomersLoaded {
        id: u64,
        customers: Vec<Customer>,
        time_ms: u64,
    },
    /// Transport failure, non-2xx status or undecodable body
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::CustomersLoaded { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::CustomersLoaded { time_ms, .. } => *time_ms,
            NetworkResponse::Error { time_ms, .. } => *time_ms,
        }
    }
}
