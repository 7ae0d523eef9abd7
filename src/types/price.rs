// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Daily ETH price

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The ETH price at the start of a UTC day
///
/// This is an approximation of the price at transaction time: every
/// transaction mined on `date` is priced with the day's opening value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPrice {
    pub date: NaiveDate,
    pub price: BigDecimal,
}

impl DailyPrice {
    pub fn new(date: NaiveDate, price: BigDecimal) -> Self {
        Self { date, price }
    }

    /// Convert an ETH amount to the quote currency
    pub fn fiat_value(&self, ether: &BigDecimal) -> BigDecimal {
        ether * &self.price
    }
}
