// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for fee arithmetic and hash validation
//!
//! These tests use proptest to check that fees are exact over realistic gas,
//! gas price and ETH price ranges, and that hash parsing is canonical.

use alloy_primitives::B256;
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use poolfee::{
    parse_transaction_hash, DailyPrice, GasData, HashError, TransactionFeeRecord,
};
use proptest::prelude::*;

// Gas used: a plain transfer up to a full 30M block
fn arb_gas_used() -> impl Strategy<Value = u64> {
    21_000u64..=30_000_000
}

// Effective gas price: 1 wei up to 10,000 gwei
fn arb_gas_price() -> impl Strategy<Value = u128> {
    1u128..=10_000_000_000_000
}

// ETH price in USDT with up to 8 decimals, below 100,000
fn arb_price() -> impl Strategy<Value = BigDecimal> {
    (1i64..=10_000_000_000_000).prop_map(|units| BigDecimal::new(BigInt::from(units), 8))
}

fn gas_data(gas_used: u64, gas_price: u128) -> GasData {
    GasData {
        block_number: 1,
        block_timestamp: 1_620_222_912,
        gas_used,
        gas_price,
        touched_addresses: vec![],
    }
}

proptest! {
    /// Property: fee_native is exactly gas_used * gas_price * 10^-18
    #[test]
    fn prop_fee_native_is_exact(gas_used in arb_gas_used(), gas_price in arb_gas_price()) {
        let gas = gas_data(gas_used, gas_price);
        let expected = BigDecimal::new(BigInt::from(gas_used) * BigInt::from(gas_price), 18);

        prop_assert_eq!(gas.gas_cost().to_ether(), expected);
    }

    /// Property: fee_fiat is exactly (gas_used * gas_price * 10^-18) * price
    #[test]
    fn prop_fee_fiat_is_exact(
        gas_used in arb_gas_used(),
        gas_price in arb_gas_price(),
        price in arb_price(),
    ) {
        let gas = gas_data(gas_used, gas_price);
        let date = NaiveDate::from_ymd_opt(2021, 5, 5).unwrap();
        let daily = DailyPrice::new(date, price.clone());

        let record = TransactionFeeRecord::new(B256::ZERO, &gas, &daily);

        let fee_native = BigDecimal::new(BigInt::from(gas_used) * BigInt::from(gas_price), 18);
        prop_assert_eq!(&record.fee_native, &fee_native);
        prop_assert_eq!(&record.fee_fiat, &(fee_native * price));
    }

    /// Property: any 32 bytes parse back regardless of case and prefix
    #[test]
    fn prop_hash_parsing_is_canonical(bytes in any::<[u8; 32]>(), prefixed in any::<bool>(), upper in any::<bool>()) {
        let hash = B256::from(bytes);
        let digits = hash.to_string()[2..].to_string();
        let digits = if upper { digits.to_uppercase() } else { digits };
        let input = if prefixed { format!("0x{digits}") } else { digits };

        prop_assert_eq!(parse_transaction_hash(&input), Ok(hash));
    }

    /// Property: hex strings of any other length are rejected by length
    #[test]
    fn prop_wrong_length_is_rejected(len in 1usize..=130) {
        prop_assume!(len != 64);
        let input = "a".repeat(len);

        prop_assert_eq!(
            parse_transaction_hash(&input),
            Err(HashError::InvalidLength { length: len })
        );
    }
}
