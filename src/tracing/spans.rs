// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for fee lookups.
//!
//! Telemetry is kept out of business logic: instead of `#[instrument]`
//! attributes, each instrumented operation has a span helper here and attaches
//! it with [`tracing::Instrument`]:
//!
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     self.inner(param).instrument(span).await
//! }
//! ```

use alloy_primitives::TxHash;
use chrono::NaiveDate;
use tracing::{Level, Span};

/// Create span for resolving the fiat fee of one transaction.
///
/// Parent: None (root span for this operation)
/// Children: fetch_gas_data, fetch_daily_price
#[inline]
pub(crate) fn resolve_fee(tx_hash: TxHash) -> Span {
    tracing::span!(Level::INFO, "poolfee.resolve_fee", tx_hash = %tx_hash)
}

/// Create span for fetching receipt and block data from a transaction source.
///
/// Parent: resolve_fee span
#[inline]
pub(crate) fn fetch_gas_data(source: &str, tx_hash: TxHash) -> Span {
    tracing::debug_span!("poolfee.fetch_gas_data", source = source, tx_hash = %tx_hash)
}

/// Create span for fetching a daily opening price.
///
/// Parent: resolve_fee span
#[inline]
pub(crate) fn fetch_daily_price(source: &str, date: NaiveDate) -> Span {
    tracing::debug_span!("poolfee.fetch_daily_price", source = source, date = %date)
}
