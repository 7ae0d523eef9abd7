// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! No-operation cache that disables caching entirely

use alloy_primitives::TxHash;
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{CacheStats, FeeCache};
use crate::types::fees::TransactionFeeRecord;

/// Cache that stores nothing; every lookup is a miss
///
/// Misses are still counted so `/cache/stats` stays meaningful.
#[derive(Debug, Default)]
pub struct NoOpCache {
    misses: AtomicU64,
}

#[async_trait]
impl FeeCache for NoOpCache {
    async fn get(&self, _tx_hash: &TxHash) -> Option<TransactionFeeRecord> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    async fn insert(&self, _tx_hash: TxHash, _record: TransactionFeeRecord) {}

    async fn clear(&self) {}

    async fn stats(&self) -> CacheStats {
        CacheStats {
            misses: self.misses.load(Ordering::Relaxed),
            ..CacheStats::default()
        }
    }

    fn name(&self) -> &'static str {
        "NoOpCache"
    }
}
