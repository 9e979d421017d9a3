mod common;

use customer_desk::network::{create_client, fetch_customers};
use customer_desk::{Channel, NetworkResponse};

use common::{customers_router, spawn_server};

#[tokio::test]
async fn fetch_decodes_customer_list() {
    let base = spawn_server(customers_router()).await;
    let client = create_client(5);

    match fetch_customers(&client, &format!("{}/settings.json", base), 7).await {
        NetworkResponse::CustomersLoaded { id, customers, .. } => {
            assert_eq!(id, 7);
            assert_eq!(customers.len(), 3);
            assert_eq!(customers[1].name, "Another Customer");
            assert_eq!(customers[1].channel, Channel::Phone);
            assert_eq!(customers[2].postal, "M3M 3M3");
        }
        other => panic!("expected customers, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_empty_list() {
    let base = spawn_server(customers_router()).await;
    let client = create_client(5);

    let response = fetch_customers(&client, &format!("{}/empty.json", base), 1).await;
    assert!(matches!(
        response,
        NetworkResponse::CustomersLoaded { ref customers, .. } if customers.is_empty()
    ));
}

#[tokio::test]
async fn fetch_reports_error_status() {
    let base = spawn_server(customers_router()).await;
    let client = create_client(5);

    match fetch_customers(&client, &format!("{}/broken.json", base), 2).await {
        NetworkResponse::Error { id, message, .. } => {
            assert_eq!(id, 2);
            assert_eq!(message, "Server error: 500 Internal Server Error");
        }
        other => panic!("expected error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_reports_undecodable_body() {
    let base = spawn_server(customers_router()).await;
    let client = create_client(5);

    match fetch_customers(&client, &format!("{}/garbage.json", base), 3).await {
        NetworkResponse::Error { message, .. } => {
            assert!(message.starts_with("Invalid response body"), "{}", message);
        }
        other => panic!("expected error, got {:?}", other),
    }
}

#[tokio::test]
async fn fetch_reports_connection_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = create_client(5);
    match fetch_customers(&client, &format!("http://{}/settings.json", addr), 4).await {
        NetworkResponse::Error { message, .. } => {
            assert!(message.starts_with("Connection failed"), "{}", message);
        }
        other => panic!("expected error, got {:?}", other),
    }
}
