// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors for blockchain-data provider operations.
//!
//! Both the Etherscan and JSON-RPC transaction sources report failures through
//! [`RpcError`], carrying the operation that was being performed.

use alloy_primitives::TxHash;

/// Errors that can occur while resolving a transaction's gas data.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::TxHash;
/// use poolfee::RpcError;
///
/// let error = RpcError::TransactionNotFound { tx_hash: TxHash::ZERO };
/// assert!(error.to_string().starts_with("Transaction not found"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The provider has no receipt for this hash.
    ///
    /// Either the hash was never mined or the provider has not indexed it yet.
    #[error("Transaction not found: {tx_hash}")]
    TransactionNotFound {
        /// The transaction hash that wasn't found
        tx_hash: TxHash,
    },

    /// The receipt points at a block the provider cannot return.
    #[error("Block not found: {block_number}")]
    BlockNotFound {
        /// The block number that wasn't found
        block_number: u64,
    },

    /// The receipt has no block number, i.e. the transaction is still pending.
    #[error("Transaction {tx_hash} is not mined yet")]
    PendingTransaction {
        /// The pending transaction
        tx_hash: TxHash,
    },

    /// The request never produced a usable HTTP response.
    #[error("Request failed during {operation}")]
    RequestFailed {
        /// Description of the operation that failed
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The provider answered with an explicit error.
    #[error("Provider rejected {operation}: {message}")]
    ProviderError {
        /// Description of the operation that failed
        operation: String,
        /// Message reported by the provider
        message: String,
    },

    /// The provider refused the request because of its rate limit.
    #[error("Provider rate limit reached: {message}")]
    RateLimited {
        /// Message reported by the provider
        message: String,
    },

    /// The provider answered with a payload we could not decode.
    #[error("Invalid response for {operation}: {details}")]
    InvalidResponse {
        /// Description of the operation that failed
        operation: String,
        /// What was wrong with the payload
        details: String,
    },
}

impl RpcError {
    /// Helper to create a `RequestFailed` error from any error type.
    pub fn request_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::RequestFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `ProviderError` error.
    pub fn provider_error(operation: impl Into<String>, message: impl Into<String>) -> Self {
        RpcError::ProviderError {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Helper to create an `InvalidResponse` error.
    pub fn invalid_response(operation: impl Into<String>, details: impl Into<String>) -> Self {
        RpcError::InvalidResponse {
            operation: operation.into(),
            details: details.into(),
        }
    }
}
