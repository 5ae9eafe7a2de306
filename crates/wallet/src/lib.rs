//! Ponia Wallet
//!
//! Uniform wallet capability over three signing backends. Every capability
//! dispatches once on the chain family, so adding a family is a localized
//! change: one connector, one arm per capability.

use std::sync::Arc;

use tracing::{debug, warn};

use ponia_types::{
	ChainDescriptor, ChainFamily, SessionConnector, TronConnector, TxDescriptor, TxHash,
	WalletError, WalletResult,
};

/// Wallet capability adapter for one widget instance
///
/// EVM and Solana share the unified session connector; TRON rides on the
/// page-injected wallet object, a separate capability surface.
#[derive(Debug, Clone)]
pub struct WalletAdapter {
	session: Arc<dyn SessionConnector>,
	tron: Option<Arc<dyn TronConnector>>,
}

impl WalletAdapter {
	pub fn new(session: Arc<dyn SessionConnector>) -> Self {
		Self {
			session,
			tron: None,
		}
	}

	pub fn with_tron(mut self, tron: Arc<dyn TronConnector>) -> Self {
		self.tron = Some(tron);
		self
	}

	/// Currently authorized address for the given chain.
	///
	/// Recoverable failure: `NotConnected` sends the flow back to selection
	/// so the user can connect and retry.
	pub async fn connected_address(&self, chain: &ChainDescriptor) -> WalletResult<String> {
		match chain.family {
			ChainFamily::Evm | ChainFamily::Solana => {
				let address = self.session.address(chain.family).await?;
				address.ok_or(WalletError::NotConnected {
					family: chain.family,
				})
			},
			ChainFamily::Tron => self.tron_address().await,
		}
	}

	/// Sign and submit the aggregator's transaction on the given chain,
	/// resolving with the transaction hash after on-chain inclusion.
	pub async fn submit_transaction(
		&self,
		chain: &ChainDescriptor,
		tx: &TxDescriptor,
	) -> WalletResult<TxHash> {
		if tx.family() != chain.family {
			return Err(WalletError::SubmissionFailed {
				reason: format!(
					"{} payload cannot be submitted on {} chain {}",
					tx.family(),
					chain.family,
					chain.chain_id
				),
			});
		}

		match (chain.family, tx) {
			(ChainFamily::Evm, TxDescriptor::Evm(evm_tx)) => {
				debug!(
					"Submitting EVM transaction on chain {} to {}",
					chain.chain_id, evm_tx.to
				);
				let hash = self
					.session
					.send_evm_transaction(chain.chain_id, evm_tx)
					.await?;
				debug!("EVM transaction included: {}", hash);
				Ok(hash)
			},
			// Sign-and-broadcast for these families is pending; the contract
			// exists so the orchestrator needs no special cases.
			(ChainFamily::Solana, _) | (ChainFamily::Tron, _) => {
				warn!(
					"Submission requested for unimplemented family {}",
					chain.family
				);
				Err(WalletError::NotImplemented {
					family: chain.family,
				})
			},
			_ => unreachable!("family mismatch is rejected above"),
		}
	}

	async fn tron_address(&self) -> WalletResult<String> {
		let tron = self
			.tron
			.as_ref()
			.ok_or(WalletError::NotConnected {
				family: ChainFamily::Tron,
			})?;

		if let Some(address) = tron.default_address() {
			return Ok(address);
		}

		// One authorization prompt, then re-read; still nothing means the
		// user has no connected TRON wallet.
		debug!("No cached TRON address, requesting accounts");
		tron.request_accounts().await?;
		tron.default_address().ok_or(WalletError::NotConnected {
			family: ChainFamily::Tron,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use ponia_types::EvmTransaction;
	use std::sync::Mutex;

	#[derive(Debug, Default)]
	struct FakeSession {
		evm_address: Option<String>,
		solana_address: Option<String>,
		submissions: Mutex<Vec<EvmTransaction>>,
	}

	#[async_trait]
	impl SessionConnector for FakeSession {
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
			tx: &EvmTransaction,
		) -> WalletResult<TxHash> {
			self.submissions.lock().unwrap().push(tx.clone());
			Ok(TxHash::from("0xabc"))
		}
	}

	#[derive(Debug)]
	struct FakeTron {
		address_after_prompt: Option<String>,
		prompted: Mutex<bool>,
	}

	#[async_trait]
	impl TronConnector for FakeTron {
		async fn request_accounts(&self) -> WalletResult<()> {
			*self.prompted.lock().unwrap() = true;
			Ok(())
		}

		fn default_address(&self) -> Option<String> {
			if *self.prompted.lock().unwrap() {
				self.address_after_prompt.clone()
			} else {
				None
			}
		}
	}

	fn evm_tx() -> TxDescriptor {
		TxDescriptor::Evm(EvmTransaction {
			to: "0x663DC15D3C1aC63ff12E45Ab68FeA3F0a883C251".to_string(),
			data: "0x00".to_string(),
			value: "0".to_string(),
			gas_limit: None,
		})
	}

	#[tokio::test]
	async fn test_evm_address_from_session() {
		let adapter = WalletAdapter::new(Arc::new(FakeSession {
			evm_address: Some("0x742d35Cc6634C0532925a3b8D2a27F79c5a85b03".to_string()),
			..Default::default()
		}));

		let address = adapter
			.connected_address(&ChainDescriptor::polygon())
			.await
			.unwrap();
		assert_eq!(address, "0x742d35Cc6634C0532925a3b8D2a27F79c5a85b03");
	}

	#[tokio::test]
	async fn test_missing_session_address_is_not_connected() {
		let adapter = WalletAdapter::new(Arc::new(FakeSession::default()));

		let err = adapter
			.connected_address(&ChainDescriptor::ethereum())
			.await
			.unwrap_err();
		assert_eq!(
			err,
			WalletError::NotConnected {
				family: ChainFamily::Evm
			}
		);
	}

	#[tokio::test]
	async fn test_tron_address_prompts_once_then_reads() {
		let adapter = WalletAdapter::new(Arc::new(FakeSession::default())).with_tron(Arc::new(
			FakeTron {
				address_after_prompt: Some("TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL".to_string()),
				prompted: Mutex::new(false),
			},
		));

		let address = adapter
			.connected_address(&ChainDescriptor::tron())
			.await
			.unwrap();
		assert_eq!(address, "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL");
	}

	#[tokio::test]
	async fn test_tron_without_connector_is_not_connected() {
		let adapter = WalletAdapter::new(Arc::new(FakeSession::default()));

		let err = adapter
			.connected_address(&ChainDescriptor::tron())
			.await
			.unwrap_err();
		assert_eq!(
			err,
			WalletError::NotConnected {
				family: ChainFamily::Tron
			}
		);
	}

	#[tokio::test]
	async fn test_evm_submission_returns_hash() {
		let session = Arc::new(FakeSession {
			evm_address: Some("0x742d35Cc6634C0532925a3b8D2a27F79c5a85b03".to_string()),
			..Default::default()
		});
		let adapter = WalletAdapter::new(session.clone());

		let hash = adapter
			.submit_transaction(&ChainDescriptor::polygon(), &evm_tx())
			.await
			.unwrap();
		assert_eq!(hash.as_str(), "0xabc");
		assert_eq!(session.submissions.lock().unwrap().len(), 1);
	}

	#[tokio::test]
	async fn test_solana_submission_is_unimplemented() {
		let adapter = WalletAdapter::new(Arc::new(FakeSession::default()));
		let tx = TxDescriptor::Solana(ponia_types::SolanaTransaction {
			serialized: "AAAA".to_string(),
		});

		let err = adapter
			.submit_transaction(&ChainDescriptor::solana(), &tx)
			.await
			.unwrap_err();
		assert_eq!(
			err,
			WalletError::NotImplemented {
				family: ChainFamily::Solana
			}
		);
	}

	#[tokio::test]
	async fn test_family_mismatch_is_rejected() {
		let adapter = WalletAdapter::new(Arc::new(FakeSession::default()));

		// Solana payload on an EVM chain must never reach the signer
		let tx = TxDescriptor::Solana(ponia_types::SolanaTransaction {
			serialized: "AAAA".to_string(),
		});
		let err = adapter
			.submit_transaction(&ChainDescriptor::ethereum(), &tx)
			.await
			.unwrap_err();
		assert!(matches!(err, WalletError::SubmissionFailed { .. }));
	}
}
