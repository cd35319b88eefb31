//! # Mock Framework
//!
//! Utilities for testing the lookup actor without a real backend.
//!
//! Use [`create_mock_source`] to get an [`OrderSource`] and a receiver. Every
//! fetch the actor starts shows up on the receiver as a [`FetchCall`]; the
//! test decides when and how it resolves, which makes response ordering
//! deterministic. For HTTP-level tests, [`spawn_backend`] serves a small
//! order backend on a local port.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::sync::{mpsc, oneshot, watch};

use crate::clients::LookupClient;
use crate::domain::{Delivery, Item, Order, Payment};
use crate::lookup_actor::{LookupError, LookupStatus};
use crate::source::{HttpOrderSource, OrderSource};

const WAIT: Duration = Duration::from_secs(5);

/// One fetch waiting for the test to answer it.
pub struct FetchCall {
    pub order_id: String,
    pub respond_to: oneshot::Sender<Result<Order, LookupError>>,
}

pub struct MockOrderSource {
    sender: mpsc::Sender<FetchCall>,
}

#[async_trait]
impl OrderSource for MockOrderSource {
    async fn fetch(&self, order_id: &str) -> Result<Order, LookupError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FetchCall {
                order_id: order_id.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| LookupError::other("mock source closed"))?;
        response
            .await
            .map_err(|_| LookupError::other("mock fetch dropped"))?
    }
}

/// Creates a mock source and the receiver its fetches arrive on.
pub fn create_mock_source(buffer_size: usize) -> (Arc<MockOrderSource>, mpsc::Receiver<FetchCall>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (Arc::new(MockOrderSource { sender }), receiver)
}

/// Next fetch, or `None` if nothing arrives in time.
pub async fn expect_fetch(receiver: &mut mpsc::Receiver<FetchCall>) -> Option<FetchCall> {
    tokio::time::timeout(WAIT, receiver.recv()).await.ok().flatten()
}

/// Asserts that no fetch arrives within a short grace period.
pub async fn expect_no_fetch(receiver: &mut mpsc::Receiver<FetchCall>) {
    let next = tokio::time::timeout(Duration::from_millis(50), receiver.recv()).await;
    if let Ok(Some(call)) = next {
        panic!("Unexpected fetch for {:?}", call.order_id);
    }
}

/// Waits until the published status satisfies `predicate`.
pub async fn wait_for_status(
    status_rx: &mut watch::Receiver<LookupStatus>,
    predicate: impl FnMut(&LookupStatus) -> bool,
) -> LookupStatus {
    let status = tokio::time::timeout(WAIT, status_rx.wait_for(predicate))
        .await
        .expect("Timed out waiting for status")
        .expect("Lookup actor stopped");
    status.clone()
}

/// Waits until the actor has processed `count` fetch completions.
pub async fn wait_for_completions(client: &LookupClient, count: usize) {
    tokio::time::timeout(WAIT, async {
        while client.completion_count().await.unwrap() < count {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("Timed out waiting for completions");
}

/// The reference order, with `order_uid` replaced.
pub fn sample_order(order_uid: &str) -> Order {
    Order {
        order_uid: order_uid.to_string(),
        delivery: Delivery {
            name: "Test Testov".to_string(),
            phone: "+9720000000".to_string(),
            city: "Kiryat Mozkin".to_string(),
            address: "Ploshad Mira 15".to_string(),
        },
        payment: Payment {
            amount: 1817.0,
            currency: "USD".to_string(),
        },
        items: vec![Item {
            chrt_id: 9934930,
            name: "Ascoona".to_string(),
            price: 2300.0,
            brand: "Vivienne Sabo".to_string(),
        }],
    }
}

/// Route behaviour of the test backend:
/// - `b563feb7b2b84b6test`: 200 with [`sample_order`]
/// - `boom`: 500
/// - `broken`: 200 with a body that is not JSON
/// - anything else: 404
async fn order_handler(Path(order_uid): Path<String>) -> Response {
    match order_uid.as_str() {
        "b563feb7b2b84b6test" => Json(sample_order(&order_uid)).into_response(),
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "message": "internal server error" })),
        )
            .into_response(),
        "broken" => (StatusCode::OK, "{\"order_uid\": ").into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": "order not found" })),
        )
            .into_response(),
    }
}

/// Serves the test backend on an ephemeral port and returns its base URL.
pub async fn spawn_backend() -> String {
    let app = Router::new().route("/order/:order_uid", get(order_handler));

    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind test backend");
    let addr = listener.local_addr().expect("Test backend has no address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}", addr)
}

/// HTTP source for `base`, bypassing any proxy configured in the environment.
pub fn local_http_source(base: &str) -> HttpOrderSource {
    let http = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("Failed to build HTTP client");
    HttpOrderSource::with_client(reqwest::Url::parse(base).unwrap(), http).unwrap()
}

/// Base URL of a local port nothing listens on.
pub async fn unused_local_url() -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_source_hands_fetch_to_test() {
        let (source, mut receiver) = create_mock_source(10);

        let fetch_task = tokio::spawn(async move { source.fetch("order_1").await });

        let call = expect_fetch(&mut receiver).await.expect("Expected a fetch");
        assert_eq!(call.order_id, "order_1");
        call.respond_to.send(Err(LookupError::NotFound)).unwrap();

        let result = fetch_task.await.unwrap();
        assert_eq!(result, Err(LookupError::NotFound));
    }
}
