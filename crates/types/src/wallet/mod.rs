//! Wallet capability surface consumed by the widget

pub mod errors;
pub mod traits;

pub use errors::{WalletError, WalletResult};
pub use traits::{SessionConnector, TronConnector};
