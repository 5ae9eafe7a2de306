//! Ponia Adapters
//!
//! Bridge aggregator adapters for the Ponia swap widget.

pub mod client_cache;
pub mod dln_adapter;

pub use client_cache::{ClientCache, ClientConfig};
pub use dln_adapter::DlnAdapter;
pub use ponia_types::{AggregatorError, AggregatorResult, BridgeAdapter};
