// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # poolfee
//!
//! Fiat gas fees for transactions of the Uniswap V3 USDC/ETH pool.
//!
//! Given a transaction hash, the service resolves the gas used and effective
//! gas price from a blockchain-data provider, prices the fee in USDT at the
//! opening ETH price of the block's UTC day, and caches the result.
//!
//! ```text
//! GET /transaction_fee?txn_hash=0x...
//!   → validate hash → cache → TransactionSource → PriceResolver → cache → JSON
//! ```
//!
//! The pieces are usable on their own:
//!
//! ```rust,ignore
//! use poolfee::{FeeTracker, PriceResolver};
//! use poolfee::cache::MemoryCache;
//! use poolfee::fee::RpcSource;
//! use poolfee::price::BinanceSource;
//!
//! let tracker = FeeTracker::new(
//!     Box::new(RpcSource::http(rpc_url)),
//!     PriceResolver::new(Box::new(BinanceSource::new(client, klines_url, "ETHUSDT"))),
//!     Box::new(MemoryCache::new()),
//! );
//! let record = tracker.transaction_fee("0x...").await?;
//! println!("{} ETH = {} USDT", record.fee_native, record.fee_fiat);
//! ```

pub mod api;
pub mod bootstrap;
pub mod cache;
pub mod command;
pub mod config;
pub mod errors;
pub mod fee;
pub mod price;
mod tracing;
pub mod tracker;
pub mod types;

pub use cache::{CacheStats, FeeCache};
pub use command::{CommandHandler, FeeTrackerHandle};
pub use config::{CacheConfig, SourceKind, TrackerConfig, TrackerConfigBuilder};
pub use errors::{ConfigError, FeeTrackerError, HashError, PriceError, RpcError};
pub use fee::TransactionSource;
pub use price::{PriceResolver, PriceSource};
pub use tracker::FeeTracker;
pub use types::fees::{GasData, TransactionFeeRecord};
pub use types::hash::parse_transaction_hash;
pub use types::price::DailyPrice;
pub use types::wei::WeiAmount;
