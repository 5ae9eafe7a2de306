//! Ponia Types
//!
//! Shared models and traits for the Ponia cross-chain swap widget.
//! This crate contains all domain models organized by business entity.

pub mod aggregator;
pub mod models;
pub mod registry;
pub mod swap;
pub mod wallet;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use models::{
	AddressError, AmountError, ChainDescriptor, ChainFamily, EvmTransaction, RawAmount,
	SolanaTransaction, TokenDescriptor, TokenSymbol, TronTransaction, TxDescriptor, TxHash,
};

pub use registry::{
	available_tokens, describe_chain, describe_token, supported_chains, RegistryError,
	RegistryResult,
};

pub use swap::{
	ExecutionStage, OrderQuote, OrderRequest, SwapError, SwapOutcome, SwapResult, SwapSelection,
	WidgetState,
};

pub use wallet::{SessionConnector, TronConnector, WalletError, WalletResult};

pub use aggregator::{
	AggregatorError, AggregatorResult, AggregatorRuntimeConfig, BridgeAdapter,
};
