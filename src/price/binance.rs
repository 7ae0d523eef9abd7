// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Binance klines price source
//!
//! Requests one daily candle (`interval=1d`) for the UTC day and uses its open.
//! Kline rows are positional arrays: `[open_time_ms, "open", "high", "low",
//! "close", "volume", close_time_ms, ...]`.

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveTime};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, info};
use url::Url;

use super::PriceSource;
use crate::errors::PriceError;
use crate::types::price::DailyPrice;

const DAY_MILLIS: i64 = 86_400_000;

/// Daily price source backed by the Binance klines endpoint
#[derive(Debug, Clone)]
pub struct BinanceSource {
    client: Client,
    base_url: Url,
    symbol: String,
}

impl BinanceSource {
    /// Create a source for `symbol` (e.g. `ETHUSDT`)
    pub fn new(client: Client, base_url: Url, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        info!(url = %base_url, %symbol, "Created Binance price source");
        Self {
            client,
            base_url,
            symbol,
        }
    }
}

/// Millisecond bounds of a UTC day, both inclusive
fn day_bounds_millis(date: NaiveDate) -> (i64, i64) {
    let start = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    (start, start + DAY_MILLIS - 1)
}

/// Extract the opening price for `date` from a klines response body
fn parse_klines(date: NaiveDate, body: Value) -> Result<DailyPrice, PriceError> {
    let candles = match body {
        Value::Array(candles) => candles,
        Value::Object(map) => {
            return Err(PriceError::ProviderError {
                code: map.get("code").and_then(Value::as_i64).unwrap_or_default(),
                message: map
                    .get("msg")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string(),
            });
        }
        other => {
            return Err(PriceError::invalid_response(format!(
                "expected kline array, got {other}"
            )))
        }
    };

    let Some(candle) = candles.first() else {
        return Err(PriceError::PriceUnavailable { date });
    };

    let fields = candle
        .as_array()
        .ok_or_else(|| PriceError::invalid_response("kline row is not an array"))?;

    let open_time = fields
        .first()
        .and_then(Value::as_i64)
        .ok_or_else(|| PriceError::invalid_response("kline row has no open time"))?;

    // A candle for another day means the pair did not trade on `date`
    let (start, _) = day_bounds_millis(date);
    if open_time != start {
        return Err(PriceError::PriceUnavailable { date });
    }

    let open = fields
        .get(1)
        .and_then(Value::as_str)
        .ok_or_else(|| PriceError::invalid_response("kline row has no open price"))?;

    let price = BigDecimal::from_str(open)
        .map_err(|e| PriceError::invalid_response(format!("bad open price {open:?}: {e}")))?;

    Ok(DailyPrice::new(date, price.normalized()))
}

#[async_trait]
impl PriceSource for BinanceSource {
    async fn daily_price(&self, date: NaiveDate) -> Result<DailyPrice, PriceError> {
        let (start, end) = day_bounds_millis(date);
        let start = start.to_string();
        let end = end.to_string();

        debug!(%date, symbol = %self.symbol, "Making Binance klines request");

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&[
                ("symbol", self.symbol.as_str()),
                ("interval", "1d"),
                ("startTime", start.as_str()),
                ("endTime", end.as_str()),
                ("limit", "1"),
            ])
            .send()
            .await
            .map_err(|e| PriceError::request_failed(date, e))?;

        // 418 is Binance's IP ban after ignoring 429s
        if matches!(
            response.status(),
            StatusCode::TOO_MANY_REQUESTS | StatusCode::IM_A_TEAPOT
        ) {
            return Err(PriceError::RateLimited);
        }

        // Error bodies are JSON too, so decode before looking at the status
        let body: Value = response
            .json()
            .await
            .map_err(|e| PriceError::request_failed(date, e))?;

        let price = parse_klines(date, body)?;
        info!(%date, price = %price.price, "Resolved daily price from Binance");
        Ok(price)
    }

    fn name(&self) -> &'static str {
        "binance"
    }
}
