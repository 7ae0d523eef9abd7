// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for poolfee integration tests
//!
//! Provides mock upstream sources with call counters so tests can assert how
//! often the tracker reached out, without any network access.

#![allow(dead_code)]

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::{address, Address, TxHash};
use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use poolfee::cache::MemoryCache;
use poolfee::config::constants::pools::UNISWAP_V3_USDC_ETH;
use poolfee::fee::TransactionSource;
use poolfee::price::PriceSource;
use poolfee::{DailyPrice, FeeTracker, GasData, PriceError, PriceResolver, RpcError};

/// A mined pool transaction: 150,000 gas at 40 gwei on 2021-05-05
pub const POOL_TX: &str = "0x5e4a1ef0a5a7b1a0b5c3e8ad6a6b2c1d9f6e2a3b4c5d6e7f8091a2b3c4d5e6f7";

/// A second pool transaction mined the same day
pub const SECOND_POOL_TX: &str =
    "0x1111111111111111111111111111111111111111111111111111111111111111";

/// A mined transaction that never touched the pool
pub const OTHER_TX: &str = "0x2222222222222222222222222222222222222222222222222222222222222222";

/// A well-formed hash the mock source does not know
pub const UNKNOWN_TX: &str = "0x3333333333333333333333333333333333333333333333333333333333333333";

pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");

pub fn tx(hash: &str) -> TxHash {
    TxHash::from_str(hash).unwrap()
}

pub fn may_5() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 5, 5).unwrap()
}

/// ETH opened at 3240.50 USDT on 2021-05-05
pub fn may_5_price() -> BigDecimal {
    BigDecimal::from_str("3240.5").unwrap()
}

pub fn pool_gas_data() -> GasData {
    GasData {
        block_number: 12_376_729,
        // 2021-05-05T13:55:12Z
        block_timestamp: 1_620_222_912,
        gas_used: 150_000,
        gas_price: 40_000_000_000,
        touched_addresses: vec![WETH, UNISWAP_V3_USDC_ETH],
    }
}

pub fn other_gas_data() -> GasData {
    GasData {
        touched_addresses: vec![WETH],
        ..pool_gas_data()
    }
}

/// Mock TransactionSource answering from a fixed map
///
/// Unknown hashes yield [`RpcError::TransactionNotFound`].
pub struct MockTransactionSource {
    transactions: HashMap<TxHash, GasData>,
    delays: HashMap<TxHash, Duration>,
    rate_limited: bool,
    calls: Arc<AtomicUsize>,
}

impl MockTransactionSource {
    pub fn new() -> Self {
        Self {
            transactions: HashMap::new(),
            delays: HashMap::new(),
            rate_limited: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The standard fixture: two pool transactions and one unrelated transaction
    pub fn with_fixtures() -> Self {
        Self::new()
            .with_transaction(tx(POOL_TX), pool_gas_data())
            .with_transaction(
                tx(SECOND_POOL_TX),
                GasData {
                    gas_used: 21_000,
                    ..pool_gas_data()
                },
            )
            .with_transaction(tx(OTHER_TX), other_gas_data())
    }

    pub fn with_transaction(mut self, tx_hash: TxHash, gas: GasData) -> Self {
        self.transactions.insert(tx_hash, gas);
        self
    }

    /// Answer `tx_hash` only after `delay`, like a slow provider
    pub fn with_delay(mut self, tx_hash: TxHash, delay: Duration) -> Self {
        self.delays.insert(tx_hash, delay);
        self
    }

    /// Fail every call as if the provider throttled us
    pub fn rate_limited(mut self) -> Self {
        self.rate_limited = true;
        self
    }

    /// Shared call counter, valid after the source is boxed
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl TransactionSource for MockTransactionSource {
    async fn fetch_gas_data(&self, tx_hash: TxHash) -> Result<GasData, RpcError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(&tx_hash) {
            tokio::time::sleep(*delay).await;
        }
        if self.rate_limited {
            return Err(RpcError::RateLimited {
                message: "Max rate limit reached".to_string(),
            });
        }
        self.transactions
            .get(&tx_hash)
            .cloned()
            .ok_or(RpcError::TransactionNotFound { tx_hash })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Mock PriceSource answering from a fixed map
///
/// Dates without a price yield [`PriceError::PriceUnavailable`].
pub struct MockPriceSource {
    prices: HashMap<NaiveDate, BigDecimal>,
    rate_limited: bool,
    calls: Arc<AtomicUsize>,
}

impl MockPriceSource {
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
            rate_limited: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The standard fixture: a price for 2021-05-05 only
    pub fn with_fixtures() -> Self {
        Self::new().with_price(may_5(), may_5_price())
    }

    pub fn with_price(mut self, date: NaiveDate, price: BigDecimal) -> Self {
        self.prices.insert(date, price);
        self
    }

    pub fn rate_limited(mut self) -> Self {
        self.rate_limited = true;
        self
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl PriceSource for MockPriceSource {
    async fn daily_price(&self, date: NaiveDate) -> Result<DailyPrice, PriceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.rate_limited {
            return Err(PriceError::RateLimited);
        }
        self.prices
            .get(&date)
            .cloned()
            .map(|price| DailyPrice::new(date, price))
            .ok_or(PriceError::PriceUnavailable { date })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Build a pool-filtered tracker with an unbounded memory cache
pub fn tracker(transactions: MockTransactionSource, prices: MockPriceSource) -> FeeTracker {
    FeeTracker::new(
        Box::new(transactions),
        PriceResolver::new(Box::new(prices)),
        Box::new(MemoryCache::new()),
    )
    .with_pool_filter(UNISWAP_V3_USDC_ETH)
}

pub fn count(calls: &Arc<AtomicUsize>) -> usize {
    calls.load(Ordering::SeqCst)
}
