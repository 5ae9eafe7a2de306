//! Static chain and token registry
//!
//! Loaded once at process start; lookups are pure and never fail beyond
//! "not found". An unknown destination chain at widget launch is a
//! configuration error, not a runtime error.

use lazy_static::lazy_static;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{ChainDescriptor, TokenDescriptor, TokenSymbol};

/// Lookup errors; callers treat these as configuration-level failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
	#[error("Unsupported chain: {chain_id}")]
	UnknownChain { chain_id: u64 },

	#[error("Unknown token: {symbol}")]
	UnknownToken { symbol: TokenSymbol },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

const EVM_NATIVE: &str = "0x0000000000000000000000000000000000000000";

fn native_token() -> TokenDescriptor {
	let solana = ChainDescriptor::solana().chain_id;
	let tron = ChainDescriptor::tron().chain_id;
	let mut addresses: HashMap<u64, String> = [1, 56, 137, 8453, 42161, 43114]
		.into_iter()
		.map(|chain_id| (chain_id, EVM_NATIVE.to_string()))
		.collect();
	// System-program sentinel for native SOL, burn-address sentinel for TRX
	addresses.insert(solana, "11111111111111111111111111111111".to_string());
	addresses.insert(tron, "T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb".to_string());
	TokenDescriptor::new(TokenSymbol::Native, 18, 6, addresses)
}

fn usdc_token() -> TokenDescriptor {
	let addresses = HashMap::from([
		(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string()),
		(56, "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d".to_string()),
		(137, "0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174".to_string()),
		(8453, "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913".to_string()),
		(42161, "0xaf88d065e77c8cC2239327C5EDb3A432268e5831".to_string()),
		(43114, "0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E".to_string()),
		(
			ChainDescriptor::solana().chain_id,
			"EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
		),
		(
			ChainDescriptor::tron().chain_id,
			"TEkxiTehnzSmSe2XqrBj4w32RUN966rdz8".to_string(),
		),
	]);
	TokenDescriptor::new(TokenSymbol::Usdc, 6, 2, addresses)
}

fn usdt_token() -> TokenDescriptor {
	// No canonical USDT deployment on Base; the gap is deliberate and the
	// route checks depend on it staying absent.
	let addresses = HashMap::from([
		(1, "0xdAC17F958D2ee523a2206206994597C13D831ec7".to_string()),
		(56, "0x55d398326f99059fF775485246999027B3197955".to_string()),
		(137, "0xc2132D05D31c914a87C6611C10748AEb04B58e8F".to_string()),
		(42161, "0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9".to_string()),
		(43114, "0x9702230A8Ea53601f5cD2dc00fDBc13d4dF4A8c7".to_string()),
		(
			ChainDescriptor::solana().chain_id,
			"Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB".to_string(),
		),
		(
			ChainDescriptor::tron().chain_id,
			"TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t".to_string(),
		),
	]);
	TokenDescriptor::new(TokenSymbol::Usdt, 6, 2, addresses)
}

lazy_static! {
	static ref CHAINS: Vec<ChainDescriptor> = vec![
		ChainDescriptor::ethereum(),
		ChainDescriptor::bnb_chain(),
		ChainDescriptor::polygon(),
		ChainDescriptor::base(),
		ChainDescriptor::arbitrum(),
		ChainDescriptor::avalanche(),
		ChainDescriptor::solana(),
		ChainDescriptor::tron(),
	];
	static ref TOKENS: Vec<TokenDescriptor> =
		vec![native_token(), usdc_token(), usdt_token()];
}

/// All chains the widget can offer as source or destination
pub fn supported_chains() -> &'static [ChainDescriptor] {
	&CHAINS
}

pub fn describe_chain(chain_id: u64) -> RegistryResult<&'static ChainDescriptor> {
	CHAINS
		.iter()
		.find(|chain| chain.chain_id == chain_id)
		.ok_or(RegistryError::UnknownChain { chain_id })
}

pub fn describe_token(symbol: TokenSymbol) -> RegistryResult<&'static TokenDescriptor> {
	TOKENS
		.iter()
		.find(|token| token.symbol == symbol)
		.ok_or(RegistryError::UnknownToken { symbol })
}

/// Symbols with a defined address on the given chain
pub fn available_tokens(chain_id: u64) -> Vec<TokenSymbol> {
	TOKENS
		.iter()
		.filter(|token| token.is_available_on(chain_id))
		.map(|token| token.symbol)
		.collect()
}
