//! deBridge DLN adapter implementation
//!
//! This adapter uses an optimized client cache for connection pooling and
//! keep-alive. Orders are created in a single request; quote fetching is
//! never retried here because pricing moves between attempts.

use async_trait::async_trait;
use ponia_types::{
	describe_chain, AggregatorError, AggregatorResult, AggregatorRuntimeConfig, BridgeAdapter,
	ChainFamily, EvmTransaction, OrderQuote, OrderRequest, RawAmount, SolanaTransaction,
	TronTransaction, TxDescriptor,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::client_cache::{ClientCache, ClientConfig};

// ================================
// DLN API MODELS
// ================================

/// DLN order-creation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DlnCreateTxResponse {
	pub estimation: Option<DlnEstimation>,
	pub tx: Option<DlnTransaction>,
}

/// Estimation section of a DLN order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DlnEstimation {
	/// Destination token details including the estimated amount
	pub dst_chain_token_out: DlnTokenAmount,
	/// Approximate fulfillment delay in seconds
	pub approximate_fulfillment_delay: Option<u64>,
}

/// Token amount as reported by DLN
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DlnTokenAmount {
	pub amount: RawAmount,
}

/// Executable transaction payload returned by DLN
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DlnTransaction {
	pub to: Option<String>,
	pub data: Option<String>,
	pub value: Option<String>,
	pub gas: Option<u64>,
}

/// Client strategy for the DLN adapter
#[derive(Debug)]
enum ClientStrategy {
	/// Use optimized client cache for connection pooling and reuse
	Cached(ClientCache),
	/// Create clients on-demand with no caching
	OnDemand,
}

/// deBridge DLN adapter for cross-chain order creation
#[derive(Debug)]
pub struct DlnAdapter {
	id: String,
	client_strategy: ClientStrategy,
}

impl DlnAdapter {
	pub const DEFAULT_ID: &'static str = "dln-v1";

	/// Create a new DLN adapter with optimized client caching (recommended)
	pub fn new() -> Self {
		Self::with_cache(ClientCache::for_adapter())
	}

	/// Create DLN adapter with custom client cache
	pub fn with_cache(cache: ClientCache) -> Self {
		Self {
			id: Self::DEFAULT_ID.to_string(),
			client_strategy: ClientStrategy::Cached(cache),
		}
	}

	/// Create DLN adapter without client caching
	///
	/// Creates clients on-demand for each request. Simpler but less efficient
	/// than the cached approach.
	pub fn without_cache() -> Self {
		Self {
			id: Self::DEFAULT_ID.to_string(),
			client_strategy: ClientStrategy::OnDemand,
		}
	}

	/// Get an HTTP client for the given runtime configuration
	fn get_client(&self, config: &AggregatorRuntimeConfig) -> AggregatorResult<Arc<reqwest::Client>> {
		let client_config = ClientConfig::from(config);
		match &self.client_strategy {
			ClientStrategy::Cached(cache) => cache.get_client(&client_config),
			ClientStrategy::OnDemand => {
				let client = reqwest::Client::builder()
					.build()
					.map_err(AggregatorError::Http)?;
				Ok(Arc::new(client))
			},
		}
	}

	/// Convert a DLN response into the internal order quote format
	fn convert_response(
		response: DlnCreateTxResponse,
		request: &OrderRequest,
	) -> AggregatorResult<OrderQuote> {
		let estimation = response
			.estimation
			.ok_or_else(|| AggregatorError::MalformedResponse {
				reason: "response lacks an estimation".to_string(),
			})?;
		let tx = response
			.tx
			.ok_or_else(|| AggregatorError::MalformedResponse {
				reason: "response lacks a transaction payload".to_string(),
			})?;

		let family = describe_chain(request.src_chain_id)
			.map(|chain| chain.family)
			.map_err(|e| AggregatorError::MalformedResponse {
				reason: e.to_string(),
			})?;

		let descriptor = match family {
			ChainFamily::Evm => {
				let to = tx.to.ok_or_else(|| AggregatorError::MalformedResponse {
					reason: "EVM transaction lacks a target address".to_string(),
				})?;
				let data = tx.data.ok_or_else(|| AggregatorError::MalformedResponse {
					reason: "EVM transaction lacks calldata".to_string(),
				})?;
				TxDescriptor::Evm(EvmTransaction {
					to,
					data,
					value: tx.value.unwrap_or_else(|| "0".to_string()),
					gas_limit: tx.gas,
				})
			},
			ChainFamily::Solana => {
				let serialized =
					tx.data.ok_or_else(|| AggregatorError::MalformedResponse {
						reason: "Solana transaction lacks a serialized payload".to_string(),
					})?;
				TxDescriptor::Solana(SolanaTransaction { serialized })
			},
			ChainFamily::Tron => {
				let raw = serde_json::to_value(&tx).map_err(|e| {
					AggregatorError::MalformedResponse {
						reason: format!("unserializable TRON payload: {}", e),
					}
				})?;
				TxDescriptor::Tron(TronTransaction { raw })
			},
		};

		Ok(OrderQuote {
			estimated_output: estimation.dst_chain_token_out.amount,
			fulfillment_delay_secs: estimation.approximate_fulfillment_delay.unwrap_or(0),
			tx: descriptor,
		})
	}
}

impl Default for DlnAdapter {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl BridgeAdapter for DlnAdapter {
	fn id(&self) -> &str {
		&self.id
	}

	async fn create_order(
		&self,
		request: &OrderRequest,
		config: &AggregatorRuntimeConfig,
	) -> AggregatorResult<OrderQuote> {
		let client = self.get_client(config)?;
		let order_url = format!("{}/dln/order/create-tx", config.endpoint);

		debug!(
			"Fetching DLN order from {} - chain {} -> chain {}, amount {}",
			order_url, request.src_chain_id, request.dst_chain_id,
			request.src_chain_token_in_amount
		);

		let response = client
			.get(&order_url)
			.query(&[
				("srcChainId", request.src_chain_id.to_string()),
				("srcChainTokenIn", request.src_chain_token_in.clone()),
				(
					"srcChainTokenInAmount",
					request.src_chain_token_in_amount.to_string(),
				),
				("dstChainId", request.dst_chain_id.to_string()),
				("dstChainTokenOut", request.dst_chain_token_out.clone()),
				("dstChainTokenOutAmount", "auto".to_string()),
				(
					"dstChainTokenOutRecipient",
					request.dst_chain_token_out_recipient.clone(),
				),
				(
					"srcChainOrderAuthorityAddress",
					request.src_chain_order_authority_address.clone(),
				),
				(
					"dstChainOrderAuthorityAddress",
					request.dst_chain_order_authority_address.clone(),
				),
				(
					"affiliateFeePercent",
					request.affiliate_fee_percent.clone(),
				),
				(
					"affiliateFeeRecipient",
					request.affiliate_fee_recipient.clone(),
				),
				("prependOperatingExpenses", "true".to_string()),
			])
			.send()
			.await
			.map_err(AggregatorError::Http)?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(AggregatorError::HttpStatus {
				status: status.as_u16(),
				body,
			});
		}

		let payload: DlnCreateTxResponse =
			response
				.json()
				.await
				.map_err(|e| AggregatorError::MalformedResponse {
					reason: format!("failed to parse order response: {}", e),
				})?;

		let quote = Self::convert_response(payload, request)?;

		debug!(
			"DLN order created: estimated output {}, fulfillment in ~{}s",
			quote.estimated_output, quote.fulfillment_delay_secs
		);

		Ok(quote)
	}

	async fn health_check(&self, config: &AggregatorRuntimeConfig) -> AggregatorResult<bool> {
		let client = self.get_client(config)?;
		let probe_url = format!("{}/supported-chains-info", config.endpoint);

		let response = client.get(&probe_url).send().await.map_err(|e| {
			warn!("DLN health check failed: HTTP error - {}", e);
			AggregatorError::Http(e)
		})?;

		let is_healthy = response.status().is_success();
		if !is_healthy {
			warn!(
				"DLN health check failed: HTTP status {}",
				response.status()
			);
		}
		Ok(is_healthy)
	}
}
