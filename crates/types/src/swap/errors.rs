//! Error taxonomy for swap attempts

use thiserror::Error;

use crate::aggregator::AggregatorError;
use crate::models::{AddressError, AmountError, TokenSymbol};
use crate::registry::RegistryError;
use crate::wallet::WalletError;

/// Everything that can abort a swap attempt
///
/// All variants are caught at the orchestrator boundary; none is fatal to
/// the hosting page and recovery is always user-initiated.
#[derive(Error, Debug)]
pub enum SwapError {
	#[error("Invalid amount: {0}")]
	InvalidAmount(#[from] AmountError),

	#[error("Wallet error: {0}")]
	Wallet(#[from] WalletError),

	#[error("Token {token} has no address on chain {chain_id}")]
	UnsupportedTokenRoute { token: TokenSymbol, chain_id: u64 },

	#[error("Aggregator error: {0}")]
	Aggregator(#[from] AggregatorError),

	#[error("Registry error: {0}")]
	Registry(#[from] RegistryError),

	#[error("Address error: {0}")]
	Address(#[from] AddressError),

	#[error("A swap attempt is already in flight")]
	AttemptInFlight,
}

pub type SwapResult<T> = Result<T, SwapError>;
