//! Swap attempt domain models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod errors;
pub mod quote;
pub mod request;

pub use errors::{SwapError, SwapResult};
pub use quote::OrderQuote;
pub use request::OrderRequest;

use crate::models::{RawAmount, TokenSymbol, TxHash};

/// User selection driving one widget session
///
/// Owned by a single widget instance; the destination chain is fixed once set
/// from the launch context and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SwapSelection {
	pub source_chain_id: u64,
	pub destination_chain_id: u64,
	pub token: TokenSymbol,
	/// Decimal amount exactly as typed; validated when the order is built
	pub amount: String,
}

impl SwapSelection {
	pub fn new(source_chain_id: u64, destination_chain_id: u64, token: TokenSymbol) -> Self {
		Self {
			source_chain_id,
			destination_chain_id,
			token,
			amount: String::new(),
		}
	}
}

/// Execution stage of the widget
///
/// `Select` is both the initial stage and the recovery target after any
/// failure; there is no retained failed state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStage {
	Select,
	Processing,
	Success,
}

/// Result of a completed swap attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SwapOutcome {
	pub attempt_id: Uuid,
	pub source_chain: String,
	pub destination_chain: String,
	pub tx_hash: TxHash,
	pub estimated_output: RawAmount,
	pub fulfillment_delay_secs: u64,
	pub completed_at: DateTime<Utc>,
}

/// Snapshot published to subscribed UI layers after every change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WidgetState {
	pub stage: ExecutionStage,
	/// Cosmetic liveness indicator; reaches 100 only on genuine confirmation
	pub progress_percent: u8,
	/// Platform fee folded into the pulled amount, once the order is built
	pub platform_fee: Option<RawAmount>,
	/// Estimated destination amount once a quote has been fetched
	pub estimated_output: Option<RawAmount>,
	pub fulfillment_delay_secs: Option<u64>,
	/// Transient user-facing message from the last failed attempt
	pub error: Option<String>,
	pub outcome: Option<SwapOutcome>,
}

impl WidgetState {
	pub fn is_confirm_enabled(&self) -> bool {
		self.stage != ExecutionStage::Processing
	}
}

impl Default for WidgetState {
	fn default() -> Self {
		Self {
			stage: ExecutionStage::Select,
			progress_percent: 0,
			platform_fee: None,
			estimated_output: None,
			fulfillment_delay_secs: None,
			error: None,
			outcome: None,
		}
	}
}
