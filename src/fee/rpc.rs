// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! JSON-RPC transaction source built on an alloy provider

use alloy_network::Ethereum;
use alloy_primitives::TxHash;
use alloy_provider::{Provider, ProviderBuilder, RootProvider};
use async_trait::async_trait;
use tracing::{info, Instrument};
use url::Url;

use super::TransactionSource;
use crate::errors::RpcError;
use crate::tracing::spans;
use crate::types::fees::GasData;

/// Type alias for an HTTP provider using Ethereum network
pub type EthereumHttpProvider = RootProvider<Ethereum>;

/// Transaction source that queries an Ethereum node directly
///
/// # Examples
///
/// ```rust,ignore
/// use poolfee::fee::RpcSource;
///
/// let source = RpcSource::http("https://eth.llamarpc.com".parse()?);
/// let gas = source.fetch_gas_data(tx_hash).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RpcSource<P> {
    provider: P,
}

impl<P> RpcSource<P> {
    /// Wrap an existing provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl RpcSource<EthereumHttpProvider> {
    /// Connect a read-only HTTP provider to `url`
    pub fn http(url: Url) -> Self {
        info!(url = %url, "Created JSON-RPC transaction source");
        // Read-only lookups need no nonce/gas fillers
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_http(url);
        Self::new(provider)
    }
}

impl<P: Provider> RpcSource<P> {
    async fn resolve_receipt(&self, tx_hash: TxHash) -> Result<GasData, RpcError> {
        let receipt = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| RpcError::request_failed(format!("get_transaction_receipt({tx_hash})"), e))?
            .ok_or(RpcError::TransactionNotFound { tx_hash })?;

        let block_number = receipt
            .block_number
            .ok_or(RpcError::PendingTransaction { tx_hash })?;

        let block = self
            .provider
            .get_block_by_number(block_number.into())
            .await
            .map_err(|e| RpcError::request_failed(format!("get_block_by_number({block_number})"), e))?
            .ok_or(RpcError::BlockNotFound { block_number })?;

        let gas_data = GasData {
            block_number,
            block_timestamp: block.header.timestamp,
            gas_used: receipt.gas_used,
            gas_price: receipt.effective_gas_price,
            touched_addresses: receipt
                .inner
                .logs()
                .iter()
                .map(|log| log.inner.address)
                .collect(),
        };

        info!(
            block_number,
            gas_used = gas_data.gas_used,
            gas_price = %gas_data.gas_price,
            "Resolved gas data from JSON-RPC"
        );

        Ok(gas_data)
    }
}

#[async_trait]
impl<P: Provider> TransactionSource for RpcSource<P> {
    async fn fetch_gas_data(&self, tx_hash: TxHash) -> Result<GasData, RpcError> {
        let span = spans::fetch_gas_data(self.name(), tx_hash);
        self.resolve_receipt(tx_hash).instrument(span).await
    }

    fn name(&self) -> &'static str {
        "rpc"
    }
}
