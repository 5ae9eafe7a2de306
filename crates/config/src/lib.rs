//! Ponia Config
//!
//! Settings structures and loading for the Ponia swap widget.

pub mod loader;
pub mod settings;

pub use loader::{destination_chain_from_query, load_config};
pub use settings::{
	AggregatorSettings, FamilyAddresses, FeeSettings, LogFormat, LoggingSettings, Settings,
	WidgetSettings,
};
