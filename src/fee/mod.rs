// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transaction sources: hash → block → gas used and gas price
//!
//! A [`TransactionSource`] turns a validated transaction hash into [`GasData`].
//! Two implementations are provided:
//!
//! - [`EtherscanSource`] - the Etherscan API (`proxy` module), authenticated with an API key
//! - [`RpcSource`] - any alloy [`Provider`](alloy_provider::Provider) speaking Ethereum JSON-RPC
//!
//! Neither retries or backs off; a provider rate limit surfaces as
//! [`RpcError::RateLimited`].

use alloy_primitives::TxHash;
use async_trait::async_trait;

use crate::errors::RpcError;
use crate::types::fees::GasData;

mod etherscan;
mod rpc;

pub use etherscan::EtherscanSource;
pub use rpc::{EthereumHttpProvider, RpcSource};

/// Resolves gas facts for a mined transaction
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch block number, block timestamp, gas used, effective gas price and
    /// the addresses that emitted logs for `tx_hash`
    ///
    /// Returns [`RpcError::TransactionNotFound`] when the provider does not
    /// know the hash.
    async fn fetch_gas_data(&self, tx_hash: TxHash) -> Result<GasData, RpcError>;

    /// Returns a human-readable name for this source
    fn name(&self) -> &'static str;
}
