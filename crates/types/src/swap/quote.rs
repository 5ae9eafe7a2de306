//! Order quote returned by the aggregator for one swap attempt

use serde::{Deserialize, Serialize};

use crate::models::{RawAmount, TxDescriptor};

/// Quote plus executable transaction for a single attempt
///
/// Created per attempt and discarded once execution completes or fails;
/// never persisted. A fresh attempt always fetches a fresh quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderQuote {
	/// Estimated destination amount, smallest units
	pub estimated_output: RawAmount,
	/// Approximate fulfillment delay reported by the aggregator
	pub fulfillment_delay_secs: u64,
	/// Payload to sign and submit on the source chain
	pub tx: TxDescriptor,
}
