//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, File};
use tracing::debug;

/// Load configuration from config file
pub fn load_config() -> Result<Settings, ConfigError> {
	// Load only the default configuration file
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	s.try_deserialize()
}

/// Resolve the destination chain from the host page's query string.
///
/// Accepts a raw query string (with or without the leading `?`); an absent,
/// non-numeric or unrecognized `chain` parameter falls back to the default.
pub fn destination_chain_from_query(query: &str, default_chain: u64) -> u64 {
	let query = query.trim_start_matches('?');
	let requested = url::form_urlencoded::parse(query.as_bytes())
		.find(|(key, _)| key == "chain")
		.and_then(|(_, value)| value.parse::<u64>().ok());

	match requested {
		Some(chain_id) if ponia_types::describe_chain(chain_id).is_ok() => chain_id,
		Some(chain_id) => {
			debug!(
				"Ignoring unsupported destination chain {} from query, using {}",
				chain_id, default_chain
			);
			default_chain
		},
		None => default_chain,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_destination_from_query_parameter() {
		assert_eq!(destination_chain_from_query("chain=137", 1), 137);
		assert_eq!(destination_chain_from_query("?chain=137", 1), 137);
		assert_eq!(
			destination_chain_from_query("theme=dark&chain=8453", 1),
			8453
		);
	}

	#[test]
	fn test_destination_defaults_when_absent_or_unknown() {
		assert_eq!(destination_chain_from_query("", 1), 1);
		assert_eq!(destination_chain_from_query("theme=dark", 1), 1);
		// Unknown chain id falls back rather than launching misconfigured
		assert_eq!(destination_chain_from_query("chain=424242", 1), 1);
		assert_eq!(destination_chain_from_query("chain=abc", 1), 1);
	}
}
