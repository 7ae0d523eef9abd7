// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fee records produced by the tracker
//!
//! [`GasData`] is what a transaction source reports for a hash;
//! [`TransactionFeeRecord`] is the priced result that gets cached and served.

use alloy_primitives::{Address, TxHash};
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use super::price::DailyPrice;
use super::wei::WeiAmount;

/// Gas facts for a mined transaction, as reported by the blockchain-data provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasData {
    /// Block that includes the transaction
    pub block_number: u64,
    /// Block timestamp (unix seconds, UTC)
    pub block_timestamp: u64,
    /// Gas consumed by the transaction
    pub gas_used: u64,
    /// Effective gas price paid, in wei
    pub gas_price: u128,
    /// Contracts that emitted logs during the transaction
    #[serde(default)]
    pub touched_addresses: Vec<Address>,
}

impl GasData {
    /// Total gas cost in wei
    pub fn gas_cost(&self) -> WeiAmount {
        WeiAmount::from_gas(self.gas_used, self.gas_price)
    }

    /// Whether the transaction emitted a log from `address`
    pub fn touches(&self, address: Address) -> bool {
        self.touched_addresses.contains(&address)
    }

    /// UTC calendar date of the including block
    ///
    /// Returns `None` if the timestamp is outside chrono's representable range.
    pub fn block_date(&self) -> Option<NaiveDate> {
        let secs = i64::try_from(self.block_timestamp).ok()?;
        DateTime::from_timestamp(secs, 0).map(|dt| dt.date_naive())
    }
}

/// The gas fee of one transaction, priced in fiat
///
/// Invariants:
/// - `fee_native == gas_used * gas_price * 10^-18`
/// - `fee_fiat == fee_native * price`
///
/// Both hold exactly because every value is a [`BigDecimal`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFeeRecord {
    /// Canonical (lowercase) transaction hash
    pub transaction_hash: TxHash,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub gas_used: u64,
    /// Effective gas price in wei
    pub gas_price: u128,
    /// Fee in ETH
    pub fee_native: BigDecimal,
    /// UTC date whose opening price was used
    pub price_date: NaiveDate,
    /// ETH price on `price_date`
    pub price: BigDecimal,
    /// Fee in the quote currency
    pub fee_fiat: BigDecimal,
}

impl TransactionFeeRecord {
    /// Price a transaction's gas cost with the given daily price
    pub fn new(transaction_hash: TxHash, gas: &GasData, daily_price: &DailyPrice) -> Self {
        let fee_native = gas.gas_cost().to_ether();
        let fee_fiat = daily_price.fiat_value(&fee_native);

        Self {
            transaction_hash,
            block_number: gas.block_number,
            block_timestamp: gas.block_timestamp,
            gas_used: gas.gas_used,
            gas_price: gas.gas_price,
            fee_native: fee_native.normalized(),
            price_date: daily_price.date,
            price: daily_price.price.clone(),
            fee_fiat: fee_fiat.normalized(),
        }
    }
}
