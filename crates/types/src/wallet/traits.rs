//! Connector traits implemented by the hosting environment
//!
//! The widget never talks to wallet SDKs directly; hosts hand in objects
//! implementing these traits (an injected provider bridge in the browser,
//! mocks in tests).

use async_trait::async_trait;
use std::fmt::Debug;

use crate::models::{ChainFamily, EvmTransaction, TxHash};
use crate::wallet::WalletResult;

/// Unified multi-chain wallet session covering the EVM and Solana families
///
/// Mirrors the capability surface of session-based connectors: one session,
/// per-family authorized addresses, and an EVM signer for submission.
#[async_trait]
pub trait SessionConnector: Send + Sync + Debug {
	/// Currently authorized address for the given family, if any
	async fn address(&self, family: ChainFamily) -> WalletResult<Option<String>>;

	/// Sign and submit an EVM transaction through the session's signer.
	///
	/// Resolves only after on-chain inclusion; this can take seconds to
	/// minutes and blocks on the wallet's own approval UI first.
	async fn send_evm_transaction(
		&self,
		chain_id: u64,
		tx: &EvmTransaction,
	) -> WalletResult<TxHash>;
}

/// Injected TRON wallet surface
///
/// TRON is outside the unified session, so it is reached through the
/// page-injected wallet object instead.
#[async_trait]
pub trait TronConnector: Send + Sync + Debug {
	/// Trigger the wallet's account-authorization prompt
	async fn request_accounts(&self) -> WalletResult<()>;

	/// Base58 address of the active account, if one is authorized
	fn default_address(&self) -> Option<String>;
}
