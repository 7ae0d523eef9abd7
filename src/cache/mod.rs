// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Cache backends for resolved transaction fees
//!
//! - [`MemoryCache`]: In-memory map, unbounded by default, with optional LRU size limit
//! - [`NoOpCache`]: Disables caching entirely (for testing or specific use cases)
//!
//! Fee records never change once a transaction is mined, so entries have no TTL;
//! the only eviction is the optional LRU bound.
//!
//! # Examples
//!
//! ```rust,ignore
//! use poolfee::cache::{MemoryCache, NoOpCache};
//!
//! // Keep everything for the life of the process
//! let cache = MemoryCache::new();
//!
//! // Keep the 10,000 most recently used records
//! let cache = MemoryCache::new().with_max_entries(10_000);
//!
//! // No cache (always resolve upstream)
//! let cache = NoOpCache::default();
//! ```

use alloy_primitives::TxHash;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::fees::TransactionFeeRecord;

pub(crate) mod keyed;
mod memory;
mod noop;
pub mod types;

pub use memory::MemoryCache;
pub use noop::NoOpCache;

/// Statistics about cache performance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits (successful retrievals)
    pub hits: u64,
    /// Number of cache misses (key not found)
    pub misses: u64,
    /// Number of entries evicted due to size limits
    pub evictions: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, evictions={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.evictions,
            self.entries,
            self.hit_rate()
        )
    }
}

/// Trait for fee cache backends
///
/// # Thread Safety
///
/// Implementations must be thread-safe and support concurrent access. Use interior
/// mutability (e.g., `Mutex`, `RwLock`) as needed.
///
/// # Consistency
///
/// A record returned by `get` must be identical to the record passed to `insert`
/// for the same hash. Records are immutable once cached.
#[async_trait]
pub trait FeeCache: Send + Sync {
    /// Retrieves the cached fee record for a transaction hash
    async fn get(&self, tx_hash: &TxHash) -> Option<TransactionFeeRecord>;

    /// Stores a fee record
    ///
    /// If the cache has a size limit and is full, this evicts the least
    /// recently used entry first.
    async fn insert(&self, tx_hash: TxHash, record: TransactionFeeRecord);

    /// Clears all entries from the cache
    async fn clear(&self);

    /// Returns current cache statistics
    async fn stats(&self) -> CacheStats;

    /// Returns a human-readable name for this cache backend
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}
