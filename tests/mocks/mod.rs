//! Shared test fixtures: a mock DLN order endpoint served over real HTTP

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tokio::task::JoinHandle;

/// State shared with the mock order endpoint
#[derive(Clone)]
struct MockDln {
	status: StatusCode,
	received: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// Live HTTP server impersonating the aggregator
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
	received: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl TestServer {
	/// Server answering with a well-formed order response
	pub async fn spawn_success() -> TestServer {
		Self::spawn(StatusCode::OK).await
	}

	/// Server answering every order request with the given error status
	pub async fn spawn_failure(status: u16) -> TestServer {
		Self::spawn(StatusCode::from_u16(status).expect("valid status code")).await
	}

	async fn spawn(status: StatusCode) -> TestServer {
		let received = Arc::new(Mutex::new(Vec::new()));
		let state = MockDln {
			status,
			received: Arc::clone(&received),
		};
		let app = Router::new()
			.route("/dln/order/create-tx", get(create_tx))
			.with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("failed to bind test listener");
		let addr = listener.local_addr().expect("listener address");
		let base_url = format!("http://{}", addr);

		let handle = tokio::spawn(async move {
			// Ignore serve errors when a test aborts the task
			let _ = axum::serve(listener, app).await;
		});

		// Give the server time to start
		tokio::time::sleep(Duration::from_millis(10)).await;

		TestServer {
			base_url,
			handle,
			received,
		}
	}

	/// Number of order requests the mock endpoint has seen
	pub fn request_count(&self) -> usize {
		self.received.lock().unwrap().len()
	}

	/// Query parameters of the most recent order request
	pub fn last_query(&self) -> HashMap<String, String> {
		self.received
			.lock()
			.unwrap()
			.last()
			.cloned()
			.expect("no order request was received")
	}
}

async fn create_tx(
	State(state): State<MockDln>,
	Query(params): Query<HashMap<String, String>>,
) -> Response {
	state.received.lock().unwrap().push(params);

	if state.status != StatusCode::OK {
		return (
			state.status,
			Json(serde_json::json!({ "errorMessage": "simulated aggregator failure" })),
		)
			.into_response();
	}

	(
		StatusCode::OK,
		Json(serde_json::json!({
			"estimation": {
				"dstChainTokenOut": { "amount": "99850000" },
				"approximateFulfillmentDelay": 12
			},
			"tx": {
				"to": "0x663DC15D3C1aC63ff12E45Ab68FeA3F0a883C251",
				"data": "0xdeadbeef",
				"value": "0",
				"gas": 300000
			}
		})),
	)
		.into_response()
}
