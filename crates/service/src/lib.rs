//! Ponia Service
//!
//! Selection handling, order assembly and execution orchestration for the
//! Ponia swap widget.

pub mod orchestrator;
pub mod params;
pub mod selection;

pub use orchestrator::SwapOrchestrator;
pub use params::build_order_request;
pub use selection::SelectionState;
