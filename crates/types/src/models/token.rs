//! Fungible token descriptors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tokens the widget can bridge
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TokenSymbol {
	Native,
	Usdc,
	Usdt,
}

impl TokenSymbol {
	/// Coercion order when a selected token is unavailable on a chain
	pub const FALLBACK_ORDER: [TokenSymbol; 3] =
		[TokenSymbol::Native, TokenSymbol::Usdc, TokenSymbol::Usdt];
}

impl std::fmt::Display for TokenSymbol {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TokenSymbol::Native => write!(f, "native"),
			TokenSymbol::Usdc => write!(f, "usdc"),
			TokenSymbol::Usdt => write!(f, "usdt"),
		}
	}
}

/// Supported fungible token with its per-chain deployments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenDescriptor {
	pub symbol: TokenSymbol,
	/// Smallest-unit precision used for transaction amounts
	pub decimals: u8,
	/// Fractional digits shown in the UI (display only, amounts keep full precision)
	pub display_decimals: u8,
	/// Chain id -> on-chain address/mint/contract; absent means not bridgeable there
	pub addresses: HashMap<u64, String>,
}

impl TokenDescriptor {
	pub fn new(
		symbol: TokenSymbol,
		decimals: u8,
		display_decimals: u8,
		addresses: HashMap<u64, String>,
	) -> Self {
		Self {
			symbol,
			decimals,
			display_decimals,
			addresses,
		}
	}

	/// On-chain address of this token on the given chain, if deployed there
	pub fn address_on(&self, chain_id: u64) -> Option<&str> {
		self.addresses.get(&chain_id).map(String::as_str)
	}

	pub fn is_available_on(&self, chain_id: u64) -> bool {
		self.addresses.contains_key(&chain_id)
	}
}
