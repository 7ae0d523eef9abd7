// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and default endpoints
//!
//! Centralizes the pool address and upstream URLs the service uses unless the
//! config file says otherwise.

use alloy_primitives::{address, Address};

/// Well-known liquidity pools
pub mod pools {
    use super::*;

    /// Uniswap V3 USDC/ETH 0.05% pool on Ethereum Mainnet
    ///
    /// Contract: 0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640
    pub const UNISWAP_V3_USDC_ETH: Address = address!("88e6a0c2ddd26feeb64f039a2c41296fcb3f5640");
}

/// Default upstream endpoints
pub mod endpoints {
    /// Etherscan multichain (v2) API
    pub const ETHERSCAN_V2: &str = "https://api.etherscan.io/v2/api";

    /// Binance spot klines
    pub const BINANCE_KLINES: &str = "https://api.binance.com/api/v3/klines";
}

/// Binance symbol quoting ETH in USDT
pub const DEFAULT_PRICE_SYMBOL: &str = "ETHUSDT";

/// Port the HTTP server listens on by default
pub const DEFAULT_PORT: u16 = 5000;

/// Upper bound on a single upstream HTTP request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_address_checksum() {
        assert_eq!(
            pools::UNISWAP_V3_USDC_ETH.to_checksum(None),
            "0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640"
        );
    }
}
