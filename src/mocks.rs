//! Mock connectors and adapters for examples and testing
//!
//! Simple, working stand-ins for the wallet session, the injected TRON
//! wallet and the bridge aggregator, usable without a browser or network.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use ponia_types::{
	AggregatorError, AggregatorResult, AggregatorRuntimeConfig, BridgeAdapter, ChainFamily,
	EvmTransaction, OrderQuote, OrderRequest, RawAmount, SessionConnector, TronConnector,
	TxDescriptor, TxHash, WalletError, WalletResult,
};

/// Mock unified wallet session for the EVM and Solana families
#[derive(Debug, Default)]
pub struct MockSessionConnector {
	pub evm_address: Option<String>,
	pub solana_address: Option<String>,
	/// Simulate the user rejecting the signature prompt
	pub reject_signature: AtomicBool,
	pub submissions: AtomicUsize,
}

impl MockSessionConnector {
	/// Session with a connected EVM account
	pub fn connected_evm() -> Arc<Self> {
		Arc::new(Self {
			evm_address: Some("0x742d35cc6634c0532925a3b8d2a27f79c5a85b03".to_string()),
			..Default::default()
		})
	}

	/// Session with no authorized accounts at all
	pub fn disconnected() -> Arc<Self> {
		Arc::new(Self::default())
	}
}

#[async_trait]
impl SessionConnector for MockSessionConnector {
	async fn address(&self, family: ChainFamily) -> WalletResult<Option<String>> {
		Ok(match family {
			ChainFamily::Evm => self.evm_address.clone(),
			ChainFamily::Solana => self.solana_address.clone(),
			ChainFamily::Tron => None,
		})
	}

	async fn send_evm_transaction(
		&self,
		_chain_id: u64,
		_tx: &EvmTransaction,
	) -> WalletResult<TxHash> {
		if self.reject_signature.load(Ordering::SeqCst) {
			return Err(WalletError::UserRejected);
		}
		self.submissions.fetch_add(1, Ordering::SeqCst);
		Ok(TxHash::from("0xabc"))
	}
}

/// Mock injected TRON wallet
#[derive(Debug)]
pub struct MockTronConnector {
	pub address: Option<String>,
	pub prompted: AtomicBool,
}

impl MockTronConnector {
	pub fn connected() -> Arc<Self> {
		Arc::new(Self {
			address: Some("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL".to_string()),
			prompted: AtomicBool::new(true),
		})
	}
}

#[async_trait]
impl TronConnector for MockTronConnector {
	async fn request_accounts(&self) -> WalletResult<()> {
		self.prompted.store(true, Ordering::SeqCst);
		Ok(())
	}

	fn default_address(&self) -> Option<String> {
		if self.prompted.load(Ordering::SeqCst) {
			self.address.clone()
		} else {
			None
		}
	}
}

/// Mock bridge adapter returning a fixed quote or a fixed failure
#[derive(Debug)]
pub struct MockBridgeAdapter {
	pub estimated_output: RawAmount,
	pub fulfillment_delay_secs: u64,
	pub fail_with_status: Option<u16>,
	pub calls: AtomicUsize,
}

impl MockBridgeAdapter {
	pub fn quoting(estimated_output: u128) -> Arc<Self> {
		Arc::new(Self {
			estimated_output: RawAmount::new(estimated_output),
			fulfillment_delay_secs: 12,
			fail_with_status: None,
			calls: AtomicUsize::new(0),
		})
	}

	pub fn failing(status: u16) -> Arc<Self> {
		Arc::new(Self {
			estimated_output: RawAmount::new(0),
			fulfillment_delay_secs: 0,
			fail_with_status: Some(status),
			calls: AtomicUsize::new(0),
		})
	}
}

#[async_trait]
impl BridgeAdapter for MockBridgeAdapter {
	fn id(&self) -> &str {
		"mock-bridge-v1"
	}

	async fn create_order(
		&self,
		_request: &OrderRequest,
		_config: &AggregatorRuntimeConfig,
	) -> AggregatorResult<OrderQuote> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if let Some(status) = self.fail_with_status {
			return Err(AggregatorError::HttpStatus {
				status,
				body: "{\"errorMessage\":\"mock failure\"}".to_string(),
			});
		}
		Ok(OrderQuote {
			estimated_output: self.estimated_output,
			fulfillment_delay_secs: self.fulfillment_delay_secs,
			tx: TxDescriptor::Evm(EvmTransaction {
				to: "0x663DC15D3C1aC63ff12E45Ab68FeA3F0a883C251".to_string(),
				data: "0xdeadbeef".to_string(),
				value: "0".to_string(),
				gas_limit: Some(300_000),
			}),
		})
	}

	async fn health_check(&self, _config: &AggregatorRuntimeConfig) -> AggregatorResult<bool> {
		Ok(self.fail_with_status.is_none())
	}
}
