//! Transaction descriptors returned by the aggregator
//!
//! The aggregator hands back an executable payload the wallet layer submits
//! verbatim; the widget never constructs calldata itself.

use serde::{Deserialize, Serialize};

use crate::models::ChainFamily;

/// EVM transaction request: `{to, data, value, gasLimit}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EvmTransaction {
	/// Target contract address
	pub to: String,
	/// Hex-encoded calldata
	pub data: String,
	/// Native value to attach, decimal string in wei
	pub value: String,
	/// Gas limit when the aggregator supplies one
	#[serde(skip_serializing_if = "Option::is_none")]
	pub gas_limit: Option<u64>,
}

/// Serialized Solana transaction, base64 as produced by the aggregator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolanaTransaction {
	pub serialized: String,
}

/// Raw TRON transaction payload, kept opaque
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TronTransaction {
	pub raw: serde_json::Value,
}

/// Family-tagged executable transaction payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum TxDescriptor {
	Evm(EvmTransaction),
	Solana(SolanaTransaction),
	Tron(TronTransaction),
}

impl TxDescriptor {
	pub fn family(&self) -> ChainFamily {
		match self {
			TxDescriptor::Evm(_) => ChainFamily::Evm,
			TxDescriptor::Solana(_) => ChainFamily::Solana,
			TxDescriptor::Tron(_) => ChainFamily::Tron,
		}
	}
}

/// Hash of a submitted transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TxHash(pub String);

impl TxHash {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for TxHash {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<String> for TxHash {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for TxHash {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tx_descriptor_family_tag() {
		let tx = TxDescriptor::Evm(EvmTransaction {
			to: "0x663DC15D3C1aC63ff12E45Ab68FeA3F0a883C251".to_string(),
			data: "0xdeadbeef".to_string(),
			value: "0".to_string(),
			gas_limit: Some(300_000),
		});
		assert_eq!(tx.family(), ChainFamily::Evm);

		let json = serde_json::to_value(&tx).unwrap();
		assert_eq!(json["family"], "evm");
		assert_eq!(json["gasLimit"], 300_000);
	}
}
