//! Core aggregator trait for adapter implementations

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::aggregator::AggregatorResult;
use crate::swap::{OrderQuote, OrderRequest};

/// Runtime endpoint configuration handed to an adapter per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorRuntimeConfig {
	/// Base URL of the aggregator API
	pub endpoint: String,
	/// Additional headers (API keys, referral tags)
	pub headers: Option<HashMap<String, String>>,
}

impl AggregatorRuntimeConfig {
	pub fn new(endpoint: impl Into<String>) -> Self {
		Self {
			endpoint: endpoint.into(),
			headers: None,
		}
	}
}

/// Interface every bridge aggregator backend must implement
///
/// The widget depends only on this trait; tests and alternative routing
/// backends supply their own implementations.
#[async_trait]
pub trait BridgeAdapter: Send + Sync + Debug {
	/// Adapter identifier (for registration and logging)
	fn id(&self) -> &str;

	/// Create an order: fetch a quote and the executable transaction.
	///
	/// One request, no retries. Quotes are price-sensitive; a failed call is
	/// surfaced immediately rather than silently retried with stale
	/// parameters.
	async fn create_order(
		&self,
		request: &OrderRequest,
		config: &AggregatorRuntimeConfig,
	) -> AggregatorResult<OrderQuote>;

	/// Lightweight reachability probe of the aggregator endpoint
	async fn health_check(&self, config: &AggregatorRuntimeConfig) -> AggregatorResult<bool>;
}
