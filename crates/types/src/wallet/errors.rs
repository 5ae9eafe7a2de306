//! Error types for wallet operations

use thiserror::Error;

use crate::models::ChainFamily;

/// Wallet-layer failures
///
/// All of these are recoverable from the widget's point of view: the flow
/// returns to the selection stage and the user may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
	#[error("No wallet connected for chain family {family}")]
	NotConnected { family: ChainFamily },

	#[error("Signature request rejected in the wallet")]
	UserRejected,

	#[error("Transaction submission failed: {reason}")]
	SubmissionFailed { reason: String },

	#[error("Submission is not implemented for chain family {family}")]
	NotImplemented { family: ChainFamily },

	#[error("Wallet provider error: {0}")]
	Provider(String),
}

pub type WalletResult<T> = Result<T, WalletError>;
