//! Complete order request assembled from a validated selection

use serde::{Deserialize, Serialize};

use crate::models::RawAmount;

/// Everything the aggregator needs to create a cross-chain order
///
/// Amounts are smallest-unit integers; addresses are already formatted per
/// their chain family's convention (EVM checksummed, Solana/TRON base58).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
	pub src_chain_id: u64,
	pub src_chain_token_in: String,
	/// Amount pulled from the user: their amount plus the platform fee
	pub src_chain_token_in_amount: RawAmount,
	pub dst_chain_id: u64,
	pub dst_chain_token_out: String,
	pub dst_chain_token_out_recipient: String,
	pub src_chain_order_authority_address: String,
	pub dst_chain_order_authority_address: String,
	/// Fee percentage the aggregator layers on top, e.g. "0.15"
	pub affiliate_fee_percent: String,
	pub affiliate_fee_recipient: String,
	/// Breakdown retained for display; not sent on the wire
	pub user_amount: RawAmount,
	pub platform_fee: RawAmount,
}
