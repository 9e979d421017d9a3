//! Local mock of the customers endpoint
#![allow(dead_code)]

use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

pub fn mock_data() -> Value {
    json!({
        "customers": [
            {
                "id": 120911,
                "name": "A Customer",
                "email": "customer@email.com",
                "channel": "website",
                "address": "12 Main St.",
                "postal": "M1M 1M1",
                "city": "Toronto",
                "province": "ON",
                "country": "CA"
            },
            {
                "id": 146633,
                "name": "Another Customer",
                "email": "customer2@email.com",
                "channel": "phone",
                "address": "12 Yonge St. #23",
                "postal": "M2M 2M2",
                "city": "Toronto",
                "province": "ON",
                "country": "CA"
            },
            {
                "id": 171981,
                "name": "A Great Customer",
                "email": "customerplusplus@email.com",
                "channel": "email",
                "address": "2312 Eglinton Ave.",
                "postal": "M3M 3M3",
                "city": "Toronto",
                "province": "ON",
                "country": "CA"
            }
        ]
    })
}

/// Serve `router` on an ephemeral port, returning its base URL
pub async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn customers_router() -> Router {
    Router::new()
        .route("/settings.json", get(|| async { Json(mock_data()) }))
        .route(
            "/empty.json",
            get(|| async { Json(json!({ "customers": [] })) }),
        )
        .route(
            "/broken.json",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
        .route("/garbage.json", get(|| async { "not json at all" }))
        .route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Json(mock_data())
            }),
        )
}
