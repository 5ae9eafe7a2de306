//! Shared domain models for the swap widget

pub mod address;
pub mod chain;
pub mod token;
pub mod transaction;
pub mod units;

pub use address::{format_for_family, to_checksum_address, AddressError};
pub use chain::{ChainDescriptor, ChainFamily};
pub use token::{TokenDescriptor, TokenSymbol};
pub use transaction::{EvmTransaction, SolanaTransaction, TronTransaction, TxDescriptor, TxHash};
pub use units::{AmountError, RawAmount};
