// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Read-through fee lookup
//!
//! [`FeeTracker`] owns a transaction source, a price resolver and a cache and
//! runs the lookup: validate → cache → gas data → pool check → daily price →
//! record → cache.
//!
//! Lookups take a per-hash lock around the cache check, so concurrent requests
//! for one hash resolve upstream once while other hashes are not held up.

use alloy_primitives::{Address, TxHash};
use tracing::{debug, info, warn, Instrument};

use crate::cache::keyed::KeyedLocks;
use crate::cache::{CacheStats, FeeCache};
use crate::errors::FeeTrackerError;
use crate::fee::TransactionSource;
use crate::price::PriceResolver;
use crate::tracing::spans;
use crate::types::fees::TransactionFeeRecord;
use crate::types::hash::parse_transaction_hash;

/// Resolves and caches the fiat gas fee of pool transactions
pub struct FeeTracker {
    transactions: Box<dyn TransactionSource>,
    prices: PriceResolver,
    cache: Box<dyn FeeCache>,
    pool: Option<Address>,
    in_flight: KeyedLocks<TxHash>,
}

impl FeeTracker {
    /// Create a tracker that prices any mined transaction
    pub fn new(
        transactions: Box<dyn TransactionSource>,
        prices: PriceResolver,
        cache: Box<dyn FeeCache>,
    ) -> Self {
        info!(
            transactions = transactions.name(),
            cache = cache.name(),
            "Created fee tracker"
        );
        Self {
            transactions,
            prices,
            cache,
            pool: None,
            in_flight: KeyedLocks::default(),
        }
    }

    /// Only accept transactions that emitted a log from `pool`
    pub fn with_pool_filter(mut self, pool: Address) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Look up the fee for a raw, user-supplied hash
    ///
    /// The hash is validated before anything else, so malformed input never
    /// reaches the cache or an upstream provider.
    pub async fn transaction_fee(
        &self,
        raw_hash: &str,
    ) -> Result<TransactionFeeRecord, FeeTrackerError> {
        let tx_hash = parse_transaction_hash(raw_hash)?;
        self.resolve(tx_hash).await
    }

    /// Look up the fee for an already validated hash
    pub async fn resolve(&self, tx_hash: TxHash) -> Result<TransactionFeeRecord, FeeTrackerError> {
        let span = spans::resolve_fee(tx_hash);
        self.lookup(tx_hash).instrument(span).await
    }

    async fn lookup(&self, tx_hash: TxHash) -> Result<TransactionFeeRecord, FeeTrackerError> {
        let _guard = self.in_flight.lock(tx_hash).await;

        if let Some(record) = self.cache.get(&tx_hash).await {
            debug!("Fee served from cache");
            return Ok(record);
        }

        let gas = self.transactions.fetch_gas_data(tx_hash).await?;

        if let Some(pool) = self.pool {
            if !gas.touches(pool) {
                warn!(pool = %pool, "Rejected transaction outside the tracked pool");
                return Err(FeeTrackerError::NotPoolTransaction { tx_hash, pool });
            }
        }

        let date = gas
            .block_date()
            .ok_or(FeeTrackerError::InvalidBlockTimestamp {
                block_number: gas.block_number,
                timestamp: gas.block_timestamp,
            })?;

        let price = self.prices.daily_price(date).await?;
        let record = TransactionFeeRecord::new(tx_hash, &gas, &price);

        self.cache.insert(tx_hash, record.clone()).await;

        info!(
            block_number = record.block_number,
            fee_native = %record.fee_native,
            fee_fiat = %record.fee_fiat,
            price_date = %record.price_date,
            "Resolved transaction fee"
        );

        Ok(record)
    }

    /// Current cache statistics
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}

impl std::fmt::Debug for FeeTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeeTracker")
            .field("transactions", &self.transactions.name())
            .field("prices", &self.prices)
            .field("cache", &self.cache.name())
            .field("pool", &self.pool)
            .finish()
    }
}
