// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Daily ETH price lookup
//!
//! A [`PriceSource`] answers "what did ETH open at on this UTC date?".
//! [`BinanceSource`] implements it with Binance daily klines, and
//! [`PriceResolver`] puts a per-date memo in front of any source so each date
//! is fetched from upstream at most once per process.
//!
//! Using the day's opening price for every transaction mined that day is an
//! accepted approximation, not the exact price at transaction time.
//!
//! # Example: a fixed-price source for tests
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//! use poolfee::{DailyPrice, PriceError, price::PriceSource};
//!
//! struct FixedPrice(BigDecimal);
//!
//! #[async_trait]
//! impl PriceSource for FixedPrice {
//!     async fn daily_price(&self, date: NaiveDate) -> Result<DailyPrice, PriceError> {
//!         Ok(DailyPrice::new(date, self.0.clone()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "fixed"
//!     }
//! }
//! ```

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::Mutex;
use tracing::{debug, Instrument};

use crate::cache::keyed::KeyedLocks;
use crate::errors::PriceError;
use crate::tracing::spans;
use crate::types::price::DailyPrice;

mod binance;

pub use binance::BinanceSource;

/// Source of historical daily prices
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// The opening price on `date` (UTC)
    async fn daily_price(&self, date: NaiveDate) -> Result<DailyPrice, PriceError>;

    /// Returns a human-readable name for this source
    fn name(&self) -> &'static str;
}

/// Memoising front for a [`PriceSource`]
///
/// A day's opening price never changes once the day has started, so
/// successful lookups are kept for the life of the process. Failures are not
/// remembered.
pub struct PriceResolver {
    source: Box<dyn PriceSource>,
    prices: Mutex<HashMap<NaiveDate, DailyPrice>>,
    in_flight: KeyedLocks<NaiveDate>,
}

impl PriceResolver {
    pub fn new(source: Box<dyn PriceSource>) -> Self {
        Self {
            source,
            prices: Mutex::new(HashMap::new()),
            in_flight: KeyedLocks::default(),
        }
    }

    /// The opening price on `date`, from memory when already known
    pub async fn daily_price(&self, date: NaiveDate) -> Result<DailyPrice, PriceError> {
        let _guard = self.in_flight.lock(date).await;

        if let Some(price) = self.prices.lock().await.get(&date) {
            debug!(%date, "Daily price served from memory");
            return Ok(price.clone());
        }

        let span = spans::fetch_daily_price(self.source.name(), date);
        let price = self.source.daily_price(date).instrument(span).await?;

        self.prices.lock().await.insert(date, price.clone());
        Ok(price)
    }

    /// Number of dates currently remembered
    pub async fn known_dates(&self) -> usize {
        self.prices.lock().await.len()
    }
}

impl std::fmt::Debug for PriceResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceResolver")
            .field("source", &self.source.name())
            .finish_non_exhaustive()
    }
}
