// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the poolfee service.
//!
//! Each upstream concern has its own error type, and [`FeeTrackerError`] unifies
//! them for the lookup path:
//!
//! - [`HashError`] - malformed transaction hashes, raised before any network call
//! - [`RpcError`] - failures talking to the blockchain-data provider
//! - [`PriceError`] - failures talking to the price-history provider
//! - [`ConfigError`] - problems loading or validating the config file
//!
//! # Examples
//!
//! ```rust,ignore
//! use poolfee::{FeeTrackerError, RpcError};
//!
//! match tracker.transaction_fee("0xabc...").await {
//!     Ok(record) => println!("fee: {} USDT", record.fee_fiat),
//!     Err(FeeTrackerError::Rpc(RpcError::TransactionNotFound { tx_hash })) => {
//!         eprintln!("unknown transaction {tx_hash}");
//!     }
//!     Err(e) => eprintln!("lookup failed: {e}"),
//! }
//! ```

mod config;
mod hash;
mod price;
mod rpc;

pub use config::ConfigError;
pub use hash::HashError;
pub use price::PriceError;
pub use rpc::RpcError;

use alloy_primitives::{Address, TxHash};

/// Unified error type for transaction fee lookups.
///
/// All module-specific error types convert into `FeeTrackerError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum FeeTrackerError {
    /// The supplied transaction hash is not well-formed.
    #[error("Invalid transaction hash: {0}")]
    Hash(#[from] HashError),

    /// The blockchain-data provider failed or did not know the transaction.
    #[error("Blockchain data error: {0}")]
    Rpc(#[from] RpcError),

    /// The price-history provider failed or had no price for the date.
    #[error("Price error: {0}")]
    Price(#[from] PriceError),

    /// The transaction exists but never touched the tracked pool.
    #[error("Transaction {tx_hash} does not interact with pool {pool}")]
    NotPoolTransaction {
        /// Hash of the rejected transaction
        tx_hash: TxHash,
        /// Pool the service is tracking
        pool: Address,
    },

    /// The block timestamp could not be mapped to a calendar date.
    #[error("Block {block_number} has an out-of-range timestamp {timestamp}")]
    InvalidBlockTimestamp {
        /// Block whose timestamp was rejected
        block_number: u64,
        /// Raw unix timestamp reported by the provider
        timestamp: u64,
    },

    /// The lookup task is gone or dropped the request.
    #[error("Fee tracker unavailable: {0}")]
    Unavailable(String),
}

impl FeeTrackerError {
    /// Create an `Unavailable` error with details.
    pub fn unavailable(details: impl Into<String>) -> Self {
        FeeTrackerError::Unavailable(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_errors_convert_with_context() {
        let err = FeeTrackerError::from(HashError::Empty);
        assert!(matches!(err, FeeTrackerError::Hash(HashError::Empty)));
        assert!(err.to_string().starts_with("Invalid transaction hash"));
    }

    #[test]
    fn upstream_errors_convert_with_context() {
        let err = FeeTrackerError::from(RpcError::RateLimited {
            message: "Max rate limit reached".to_string(),
        });
        assert!(err.to_string().starts_with("Blockchain data error"));

        let err = FeeTrackerError::from(PriceError::PriceUnavailable {
            date: chrono::NaiveDate::from_ymd_opt(2021, 5, 5).unwrap(),
        });
        assert_eq!(
            err.to_string(),
            "Price error: No daily price available for 2021-05-05"
        );
    }

    #[test]
    fn not_found_names_the_hash() {
        let err = FeeTrackerError::from(RpcError::TransactionNotFound {
            tx_hash: TxHash::ZERO,
        });
        assert!(err.to_string().contains("Transaction not found"));
        assert!(err.to_string().contains(&TxHash::ZERO.to_string()));
    }
}
