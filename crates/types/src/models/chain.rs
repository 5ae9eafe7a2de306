//! Blockchain network descriptors

use serde::{Deserialize, Serialize};

/// Group of blockchains sharing one address format and signing model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
	Evm,
	Solana,
	Tron,
}

impl std::fmt::Display for ChainFamily {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ChainFamily::Evm => write!(f, "evm"),
			ChainFamily::Solana => write!(f, "solana"),
			ChainFamily::Tron => write!(f, "tron"),
		}
	}
}

/// Supported blockchain network
///
/// Non-EVM chains carry synthetic large chain ids so the id space stays
/// collision-free across families.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ChainDescriptor {
	/// Chain ID (e.g. 1 for Ethereum mainnet, 7565164 for Solana)
	pub chain_id: u64,
	/// Human-readable name (e.g. "Ethereum", "Polygon", "Solana")
	pub name: String,
	/// Icon asset reference for the UI layer
	pub icon: String,
	/// Native asset symbol (e.g. "ETH", "SOL", "TRX")
	pub native_symbol: String,
	/// Address format / signing model of this chain
	pub family: ChainFamily,
}

impl ChainDescriptor {
	pub fn new(
		chain_id: u64,
		name: impl Into<String>,
		icon: impl Into<String>,
		native_symbol: impl Into<String>,
		family: ChainFamily,
	) -> Self {
		Self {
			chain_id,
			name: name.into(),
			icon: icon.into(),
			native_symbol: native_symbol.into(),
			family,
		}
	}
}

/// Well-known chain constants
impl ChainDescriptor {
	pub fn ethereum() -> Self {
		Self::new(1, "Ethereum", "chains/ethereum.svg", "ETH", ChainFamily::Evm)
	}

	pub fn bnb_chain() -> Self {
		Self::new(56, "BNB Chain", "chains/bnb.svg", "BNB", ChainFamily::Evm)
	}

	pub fn polygon() -> Self {
		Self::new(137, "Polygon", "chains/polygon.svg", "MATIC", ChainFamily::Evm)
	}

	pub fn base() -> Self {
		Self::new(8453, "Base", "chains/base.svg", "ETH", ChainFamily::Evm)
	}

	pub fn arbitrum() -> Self {
		Self::new(42161, "Arbitrum", "chains/arbitrum.svg", "ETH", ChainFamily::Evm)
	}

	pub fn avalanche() -> Self {
		Self::new(43114, "Avalanche", "chains/avalanche.svg", "AVAX", ChainFamily::Evm)
	}

	/// Solana under the aggregator's synthetic chain id
	pub fn solana() -> Self {
		Self::new(
			7_565_164,
			"Solana",
			"chains/solana.svg",
			"SOL",
			ChainFamily::Solana,
		)
	}

	/// TRON mainnet, identified by its registered EVM-style chain id
	pub fn tron() -> Self {
		Self::new(
			728_126_428,
			"TRON",
			"chains/tron.svg",
			"TRX",
			ChainFamily::Tron,
		)
	}
}
