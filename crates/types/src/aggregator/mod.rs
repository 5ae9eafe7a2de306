//! Bridge aggregator contract consumed by the widget

pub mod errors;
pub mod traits;

pub use errors::{AggregatorError, AggregatorResult};
pub use traits::{AggregatorRuntimeConfig, BridgeAdapter};
