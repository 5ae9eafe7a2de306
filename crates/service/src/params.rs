//! Order request assembly
//!
//! Turns a validated selection into the complete request the aggregator
//! expects: smallest-unit amounts, the platform fee folded into the pulled
//! amount, token addresses resolved for both ends of the route, and every
//! address rendered per its chain family's convention.

use tracing::debug;

use ponia_config::Settings;
use ponia_types::models::format_for_family;
use ponia_types::{
	describe_chain, describe_token, OrderRequest, RawAmount, SwapError, SwapResult, SwapSelection,
};

/// Build the aggregator order request for one attempt.
///
/// `sender_address` is the connected wallet address on the source chain; it
/// becomes the source-side order authority.
pub fn build_order_request(
	selection: &SwapSelection,
	sender_address: &str,
	settings: &Settings,
) -> SwapResult<OrderRequest> {
	let source = describe_chain(selection.source_chain_id)?;
	let destination = describe_chain(selection.destination_chain_id)?;
	let token = describe_token(selection.token)?;

	let user_amount = RawAmount::from_human(&selection.amount, token.decimals)?;
	if user_amount.is_zero() {
		return Err(SwapError::InvalidAmount(
			ponia_types::AmountError::NotPositive,
		));
	}

	// Truncating basis-point fee: the platform never over-charges on rounding
	let platform_fee = user_amount.fee_bps(settings.fees.platform_fee_bps)?;
	let total_amount = user_amount.checked_add(platform_fee)?;

	// The actual transaction never falls back to a different token; a hole
	// in the route table aborts the attempt here.
	let input_token = token
		.address_on(source.chain_id)
		.ok_or(SwapError::UnsupportedTokenRoute {
			token: token.symbol,
			chain_id: source.chain_id,
		})?;
	let output_token = token
		.address_on(destination.chain_id)
		.ok_or(SwapError::UnsupportedTokenRoute {
			token: token.symbol,
			chain_id: destination.chain_id,
		})?;

	let recipient = format_for_family(
		destination.family,
		settings
			.widget
			.deposit_recipients
			.for_family(destination.family),
	)?;
	let affiliate_recipient = format_for_family(
		source.family,
		settings
			.fees
			.affiliate_recipients
			.for_family(source.family),
	)?;
	let sender = format_for_family(source.family, sender_address)?;

	debug!(
		"Order request: {} {} ({} + {} fee) {} -> {}",
		total_amount,
		token.symbol,
		user_amount,
		platform_fee,
		source.name,
		destination.name
	);

	Ok(OrderRequest {
		src_chain_id: source.chain_id,
		src_chain_token_in: input_token.to_string(),
		src_chain_token_in_amount: total_amount,
		dst_chain_id: destination.chain_id,
		dst_chain_token_out: output_token.to_string(),
		dst_chain_token_out_recipient: recipient.clone(),
		src_chain_order_authority_address: sender,
		dst_chain_order_authority_address: recipient,
		affiliate_fee_percent: settings.fees.affiliate_fee_percent.clone(),
		affiliate_fee_recipient: affiliate_recipient,
		user_amount,
		platform_fee,
	})
}
