// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan-backed transaction source
//!
//! Uses the Etherscan `proxy` module, which forwards standard JSON-RPC calls:
//!
//! 1. `eth_getTransactionReceipt` for block number, gas used, effective gas price and logs
//! 2. `eth_getBlockByNumber` for the block timestamp
//!
//! Etherscan wraps failures in a `{"status":"0","message":"NOTOK","result":"..."}`
//! envelope even on HTTP 200, so every body goes through [`parse_proxy_response`].

use alloy_primitives::{Address, TxHash, U128, U64};
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use tracing::{debug, info, Instrument};
use url::Url;

use super::TransactionSource;
use crate::errors::RpcError;
use crate::tracing::spans;
use crate::types::fees::GasData;

/// Receipt fields we need from `eth_getTransactionReceipt`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProxyReceipt {
    block_number: Option<U64>,
    gas_used: U64,
    effective_gas_price: U128,
    #[serde(default)]
    logs: Vec<ProxyLog>,
}

#[derive(Debug, Deserialize)]
struct ProxyLog {
    address: Address,
}

/// Block fields we need from `eth_getBlockByNumber`
#[derive(Debug, Deserialize)]
struct ProxyBlock {
    timestamp: U64,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorBody {
    code: i64,
    message: String,
}

/// Every shape the proxy module answers with
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorBody>,
}

/// Decode an Etherscan proxy response body.
///
/// Returns `Ok(None)` when the call succeeded with a `null` result (unknown
/// transaction or block).
fn parse_proxy_response<T: DeserializeOwned>(
    operation: &str,
    body: Value,
) -> Result<Option<T>, RpcError> {
    let envelope: ProxyEnvelope = serde_json::from_value(body)
        .map_err(|e| RpcError::invalid_response(operation, e.to_string()))?;

    if envelope.status.as_deref() == Some("0") {
        let message = match envelope.result {
            Some(Value::String(result)) => result,
            _ => envelope.message.unwrap_or_else(|| "NOTOK".to_string()),
        };
        if message.to_ascii_lowercase().contains("rate limit") {
            return Err(RpcError::RateLimited { message });
        }
        return Err(RpcError::provider_error(operation, message));
    }

    if let Some(error) = envelope.error {
        return Err(RpcError::provider_error(
            operation,
            format!("{} (code {})", error.message, error.code),
        ));
    }

    match envelope.result {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| RpcError::invalid_response(operation, e.to_string())),
    }
}

/// Transaction source backed by the Etherscan API
#[derive(Debug, Clone)]
pub struct EtherscanSource {
    client: Client,
    base_url: Url,
    api_key: String,
    chain_id: u64,
}

impl EtherscanSource {
    /// Create a source for `chain_id` using the given HTTP client
    pub fn new(client: Client, base_url: Url, api_key: impl Into<String>, chain_id: u64) -> Self {
        info!(url = %base_url, chain_id, "Created Etherscan transaction source");
        Self {
            client,
            base_url,
            api_key: api_key.into(),
            chain_id,
        }
    }

    async fn proxy_call<T: DeserializeOwned>(
        &self,
        action: &str,
        params: &[(&str, String)],
    ) -> Result<Option<T>, RpcError> {
        let chain_id = self.chain_id.to_string();
        let mut query: Vec<(&str, &str)> = vec![
            ("chainid", chain_id.as_str()),
            ("module", "proxy"),
            ("action", action),
        ];
        query.extend(params.iter().map(|(k, v)| (*k, v.as_str())));
        query.push(("apikey", self.api_key.as_str()));

        debug!(action, "Making Etherscan request");

        let response = self
            .client
            .get(self.base_url.clone())
            .query(&query)
            .send()
            .await
            .map_err(|e| RpcError::request_failed(action, e))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RpcError::RateLimited {
                message: format!("HTTP {}", response.status()),
            });
        }

        let body: Value = response
            .error_for_status()
            .map_err(|e| RpcError::request_failed(action, e))?
            .json()
            .await
            .map_err(|e| RpcError::request_failed(action, e))?;

        parse_proxy_response(action, body)
    }

    async fn block_timestamp(&self, block_number: u64) -> Result<u64, RpcError> {
        let block: ProxyBlock = self
            .proxy_call(
                "eth_getBlockByNumber",
                &[
                    ("tag", format!("{block_number:#x}")),
                    ("boolean", "false".to_string()),
                ],
            )
            .await?
            .ok_or(RpcError::BlockNotFound { block_number })?;

        Ok(block.timestamp.to::<u64>())
    }

    async fn resolve_receipt(&self, tx_hash: TxHash) -> Result<GasData, RpcError> {
        let receipt: ProxyReceipt = self
            .proxy_call("eth_getTransactionReceipt", &[("txhash", tx_hash.to_string())])
            .await?
            .ok_or(RpcError::TransactionNotFound { tx_hash })?;

        let block_number = receipt
            .block_number
            .ok_or(RpcError::PendingTransaction { tx_hash })?
            .to::<u64>();
        let block_timestamp = self.block_timestamp(block_number).await?;

        let gas_data = GasData {
            block_number,
            block_timestamp,
            gas_used: receipt.gas_used.to::<u64>(),
            gas_price: receipt.effective_gas_price.to::<u128>(),
            touched_addresses: receipt.logs.into_iter().map(|log| log.address).collect(),
        };

        info!(
            block_number,
            gas_used = gas_data.gas_used,
            gas_price = %gas_data.gas_price,
            "Resolved gas data from Etherscan"
        );

        Ok(gas_data)
    }
}

#[async_trait]
impl TransactionSource for EtherscanSource {
    async fn fetch_gas_data(&self, tx_hash: TxHash) -> Result<GasData, RpcError> {
        let span = spans::fetch_gas_data(self.name(), tx_hash);
        self.resolve_receipt(tx_hash).instrument(span).await
    }

    fn name(&self) -> &'static str {
        "etherscan"
    }
}
