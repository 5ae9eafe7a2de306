//! Configuration settings structures

use ponia_types::ChainFamily;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Main widget settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
	pub widget: WidgetSettings,
	pub aggregator: AggregatorSettings,
	pub fees: FeeSettings,
	pub logging: LoggingSettings,
}

/// Per-deployment widget configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WidgetSettings {
	/// Destination chain used when the launch context carries none
	pub default_destination_chain: u64,
	/// Where bridged funds land, one address per chain family
	pub deposit_recipients: FamilyAddresses,
	/// Progress indicator tick interval
	pub progress_tick_ms: u64,
	/// Ceiling the cosmetic progress indicator may reach before confirmation
	pub progress_cap_percent: u8,
}

/// Aggregator endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AggregatorSettings {
	pub endpoint: String,
	pub timeout_ms: u64,
	pub headers: Option<HashMap<String, String>>,
}

/// Fee configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FeeSettings {
	/// Platform fee folded into the pulled amount, in basis points
	pub platform_fee_bps: u32,
	/// Fee percentage the aggregator applies on top, e.g. "0.15"
	pub affiliate_fee_percent: String,
	/// Affiliate fee recipient, one address per chain family
	pub affiliate_recipients: FamilyAddresses,
}

/// One address per chain family, picked by the family of the chain in play
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FamilyAddresses {
	pub evm: String,
	pub solana: String,
	pub tron: String,
}

impl FamilyAddresses {
	pub fn for_family(&self, family: ChainFamily) -> &str {
		match family {
			ChainFamily::Evm => &self.evm,
			ChainFamily::Solana => &self.solana,
			ChainFamily::Tron => &self.tron,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			widget: WidgetSettings {
				default_destination_chain: 1,
				deposit_recipients: FamilyAddresses {
					evm: "0x6fde8c93a06ee1d0933a42e723b02e4bdf9fcbc0".to_string(),
					solana: "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1".to_string(),
					tron: "TNPeeaaFB7K9cmo4uQpcU32zGK8G1NYqeL".to_string(),
				},
				progress_tick_ms: 400,
				progress_cap_percent: 95,
			},
			aggregator: AggregatorSettings {
				endpoint: "https://dln.debridge.finance/v1.0".to_string(),
				timeout_ms: 30_000,
				headers: None,
			},
			fees: FeeSettings {
				platform_fee_bps: 150,
				affiliate_fee_percent: "0.15".to_string(),
				affiliate_recipients: FamilyAddresses {
					evm: "0x8e2c34b5d2e9d65e9905c1023a4a4b590bcf22a6".to_string(),
					solana: "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM".to_string(),
					tron: "TKHuVq1oKVruCGLvqVexFs6dawKv6fQgFs".to_string(),
				},
			},
			logging: LoggingSettings {
				level: "info".to_string(),
				format: LogFormat::Pretty,
				structured: false,
			},
		}
	}
}

impl Settings {
	/// Check that the platform fee stays inside sane bounds (at most 100%)
	pub fn validate(&self) -> Result<(), String> {
		if self.fees.platform_fee_bps > 10_000 {
			return Err(format!(
				"platform_fee_bps {} exceeds 10000",
				self.fees.platform_fee_bps
			));
		}
		if self.widget.progress_cap_percent >= 100 {
			return Err(format!(
				"progress_cap_percent {} must stay below 100",
				self.widget.progress_cap_percent
			));
		}
		Ok(())
	}
}
