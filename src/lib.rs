//! Ponia Swap Widget Library
//!
//! Core of the Ponia cross-chain swap widget: chain/token registry, exact
//! amount conversion, wallet capability dispatch, order building, aggregator
//! quoting and the execution state machine. UI layers subscribe to state
//! snapshots; nothing here touches a concrete UI.

use std::sync::Arc;

use tracing::info;

// Core domain types - the most commonly used types
pub use ponia_types::{
	available_tokens,
	describe_chain,
	describe_token,
	// External dependencies for convenience
	serde_json,
	supported_chains,
	AggregatorError,
	AggregatorRuntimeConfig,
	AmountError,
	// Traits implemented by hosts and adapters
	BridgeAdapter,
	ChainDescriptor,
	ChainFamily,
	EvmTransaction,
	ExecutionStage,
	OrderQuote,
	OrderRequest,
	RawAmount,
	RegistryError,
	SessionConnector,
	SwapError,
	SwapOutcome,
	SwapResult,
	SwapSelection,
	TokenDescriptor,
	TokenSymbol,
	TronConnector,
	TxDescriptor,
	TxHash,
	WalletError,
	WidgetState,
};

// Service layer
pub use ponia_service::{build_order_request, SelectionState, SwapOrchestrator};

// Wallet layer
pub use ponia_wallet::WalletAdapter;

// Adapters
pub use ponia_adapters::{ClientCache, DlnAdapter};

// Config
pub use ponia_config::{destination_chain_from_query, load_config, LogFormat, Settings};

// Module aliases for qualified access
pub mod models {
	pub use ponia_types::*;
}

pub mod config {
	pub use ponia_config::*;
}

pub mod adapters {
	pub use ponia_adapters::*;
}

pub mod wallet {
	pub use ponia_wallet::*;
}

pub mod service {
	pub use ponia_service::*;
}

pub mod mocks;

// Re-export external dependencies for examples
pub use async_trait;
pub use reqwest;

/// Initialize tracing with configuration-based settings
pub fn init_tracing(settings: &Settings) {
	let log_level = &settings.logging.level;
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);
			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
	}

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);
}

/// Builder pattern for configuring one widget instance
pub struct SwapWidgetBuilder {
	settings: Option<Settings>,
	session: Option<Arc<dyn SessionConnector>>,
	tron: Option<Arc<dyn TronConnector>>,
	adapter: Option<Arc<dyn BridgeAdapter>>,
	destination_query: Option<String>,
}

impl SwapWidgetBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			session: None,
			tron: None,
			adapter: None,
			destination_query: None,
		}
	}

	/// Set custom settings (defaults to config file, then built-ins)
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Provide the unified EVM/Solana wallet session (required)
	pub fn with_session_connector(mut self, session: Arc<dyn SessionConnector>) -> Self {
		self.session = Some(session);
		self
	}

	/// Provide the injected TRON wallet surface (optional)
	pub fn with_tron_connector(mut self, tron: Arc<dyn TronConnector>) -> Self {
		self.tron = Some(tron);
		self
	}

	/// Register a custom bridge adapter (defaults to the DLN adapter)
	pub fn with_adapter(mut self, adapter: Arc<dyn BridgeAdapter>) -> Self {
		self.adapter = Some(adapter);
		self
	}

	/// Hand in the host page's query string for destination selection
	pub fn with_destination_query(mut self, query: impl Into<String>) -> Self {
		self.destination_query = Some(query.into());
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Validate the configuration and start the widget.
	///
	/// Configuration errors are fatal here: an unknown destination chain or
	/// a missing session connector never reaches the interactive stage.
	pub fn start(self) -> Result<SwapOrchestrator, Box<dyn std::error::Error>> {
		let settings = match self.settings {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};
		settings.validate().map_err(|e| format!("Invalid settings: {}", e))?;

		let destination_chain = match &self.destination_query {
			Some(query) => destination_chain_from_query(
				query,
				settings.widget.default_destination_chain,
			),
			None => settings.widget.default_destination_chain,
		};
		let destination = describe_chain(destination_chain)
			.map_err(|e| format!("Widget launched with unusable destination: {}", e))?;

		let session = self
			.session
			.ok_or("a wallet session connector is required to start the widget")?;
		let mut wallet_adapter = WalletAdapter::new(session);
		if let Some(tron) = self.tron {
			wallet_adapter = wallet_adapter.with_tron(tron);
		}

		let adapter = self
			.adapter
			.unwrap_or_else(|| Arc::new(DlnAdapter::new()) as Arc<dyn BridgeAdapter>);

		info!(
			"Starting swap widget: destination {} ({}), adapter {}",
			destination.name,
			destination.chain_id,
			adapter.id()
		);

		let orchestrator =
			SwapOrchestrator::new(destination.chain_id, wallet_adapter, adapter, settings)?;
		Ok(orchestrator)
	}
}

impl Default for SwapWidgetBuilder {
	fn default() -> Self {
		Self::new()
	}
}
