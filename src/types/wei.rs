// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for native currency amounts
//!
//! Gas costs are carried in wei as [`U256`] and only converted to ETH as an
//! exact [`BigDecimal`] at the edge, so no precision is lost between the
//! receipt and the fiat conversion.

use alloy_primitives::U256;
use bigdecimal::num_bigint::{BigInt, Sign};
use bigdecimal::BigDecimal;

/// Number of decimals between wei and ether
pub const ETHER_DECIMALS: i64 = 18;

/// Represents an amount of native currency (ETH) in wei
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use poolfee::WeiAmount;
/// use std::str::FromStr;
///
/// // 21,000 gas at 50 gwei
/// let cost = WeiAmount::from_gas(21_000, 50_000_000_000);
/// assert_eq!(cost.to_ether(), BigDecimal::from_str("0.00105").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// Total cost of `gas_used` units at `gas_price` wei per unit
    ///
    /// The product of a `u64` and a `u128` always fits in 256 bits.
    pub fn from_gas(gas_used: u64, gas_price: u128) -> Self {
        Self(U256::from(gas_used).saturating_mul(U256::from(gas_price)))
    }

    /// Convert to ether (1 ETH = 10^18 wei) without rounding
    pub fn to_ether(&self) -> BigDecimal {
        let digits = BigInt::from_bytes_be(Sign::Plus, &self.0.to_be_bytes::<32>());
        BigDecimal::new(digits, ETHER_DECIMALS)
    }
}
