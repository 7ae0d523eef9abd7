// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory cache implementation with an optional LRU size limit

use alloy_primitives::TxHash;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::debug;

use super::{types::AccessSequence, CacheStats, FeeCache};
use crate::types::fees::TransactionFeeRecord;

/// Entry in the memory cache with metadata
#[derive(Debug, Clone)]
struct CacheEntry {
    record: TransactionFeeRecord,
    /// Sequence number of the last access, for LRU eviction
    access_seq: AccessSequence,
}

/// Internal state for memory cache
#[derive(Debug, Default)]
struct MemoryCacheState {
    entries: HashMap<TxHash, CacheEntry>,
    stats: CacheStats,
    next_seq: AccessSequence,
}

impl MemoryCacheState {
    fn bump_seq(&mut self) -> AccessSequence {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.next();
        seq
    }
}

/// In-memory fee cache
///
/// Without a limit this is a plain map that keeps every resolved fee for the
/// life of the process. With [`MemoryCache::with_max_entries`] it becomes an
/// LRU cache: inserting into a full cache evicts the entry that was read or
/// written least recently.
///
/// # Examples
///
/// ```rust,ignore
/// use poolfee::cache::MemoryCache;
///
/// // Unbounded cache
/// let cache = MemoryCache::new();
///
/// // Cache with size limit
/// let cache = MemoryCache::new().with_max_entries(1000);
/// ```
///
/// # Performance
///
/// - Get: O(1) average case (HashMap lookup)
/// - Insert: O(1) without eviction, O(n) with eviction (finds LRU)
#[derive(Debug, Default)]
pub struct MemoryCache {
    max_entries: Option<usize>,
    state: Mutex<MemoryCacheState>,
}

impl MemoryCache {
    /// Creates a new memory cache with no limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of entries in the cache
    ///
    /// When the limit is reached, the least recently used (LRU) entry will be evicted
    /// to make room for new entries.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Evicts the least recently used entry from the cache
    fn evict_lru(state: &mut MemoryCacheState) {
        let lru_key = state
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.access_seq)
            .map(|(key, _)| *key);

        if let Some(key) = lru_key {
            debug!(tx_hash = %key, "Evicting LRU cache entry");
            state.entries.remove(&key);
            state.stats.evictions += 1;
        }
    }
}

#[async_trait]
impl FeeCache for MemoryCache {
    async fn get(&self, tx_hash: &TxHash) -> Option<TransactionFeeRecord> {
        let mut state = self.state.lock().await;
        let seq = state.next_seq;

        let result = state.entries.get_mut(tx_hash).map(|entry| {
            entry.access_seq = seq;
            entry.record.clone()
        });

        if result.is_some() {
            state.next_seq = seq.next();
            state.stats.hits += 1;
            debug!(tx_hash = %tx_hash, "Cache hit (memory)");
        } else {
            state.stats.misses += 1;
            debug!(tx_hash = %tx_hash, "Cache miss (memory)");
        }

        result
    }

    async fn insert(&self, tx_hash: TxHash, record: TransactionFeeRecord) {
        let mut state = self.state.lock().await;

        // Replacing an existing key never needs room
        if let Some(max_entries) = self.max_entries {
            if !state.entries.contains_key(&tx_hash) {
                while !state.entries.is_empty() && state.entries.len() >= max_entries {
                    Self::evict_lru(&mut state);
                }
            }
        }

        debug!(tx_hash = %tx_hash, "Inserting entry into memory cache");
        let access_seq = state.bump_seq();
        state
            .entries
            .insert(tx_hash, CacheEntry { record, access_seq });
        state.stats.entries = state.entries.len();
    }

    async fn clear(&self) {
        let mut state = self.state.lock().await;
        debug!(entries = state.entries.len(), "Clearing memory cache");
        state.entries.clear();
        state.stats.entries = 0;
    }

    async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        state.stats.clone()
    }

    fn name(&self) -> &'static str {
        "MemoryCache"
    }
}
