//! Per-family address formatting and validation
//!
//! EVM addresses are rendered in EIP-55 mixed-case checksum form. Solana and
//! TRON addresses stay in their native base58 encoding and are never
//! checksummed (the format has no such notion).

use alloy_primitives::Address;
use thiserror::Error;

use crate::models::ChainFamily;

/// Errors raised while formatting or validating addresses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
	#[error("Invalid EVM address: {address}")]
	InvalidEvm { address: String },

	#[error("Invalid {family} base58 address: {address}")]
	InvalidBase58 {
		family: ChainFamily,
		address: String,
	},
}

/// Render an address per its chain family's convention
pub fn format_for_family(family: ChainFamily, address: &str) -> Result<String, AddressError> {
	match family {
		ChainFamily::Evm => to_checksum_address(address),
		ChainFamily::Solana | ChainFamily::Tron => {
			validate_base58(family, address)?;
			Ok(address.to_string())
		},
	}
}

/// EIP-55 checksum encoding of an EVM address
pub fn to_checksum_address(address: &str) -> Result<String, AddressError> {
	let parsed: Address = address.parse().map_err(|_| AddressError::InvalidEvm {
		address: address.to_string(),
	})?;
	Ok(parsed.to_checksum(None))
}

fn validate_base58(family: ChainFamily, address: &str) -> Result<(), AddressError> {
	let invalid = || AddressError::InvalidBase58 {
		family,
		address: address.to_string(),
	};

	let bytes = bs58::decode(address).into_vec().map_err(|_| invalid())?;
	let valid = match family {
		// Solana addresses are 32-byte ed25519 public keys
		ChainFamily::Solana => bytes.len() == 32,
		// TRON addresses are base58check: 21-byte payload + 4-byte checksum
		ChainFamily::Tron => address.starts_with('T') && bytes.len() == 25,
		ChainFamily::Evm => false,
	};
	if valid {
		Ok(())
	} else {
		Err(invalid())
	}
}
