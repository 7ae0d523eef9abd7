// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface
//!
//! - `GET /transaction_fee?txn_hash=0x...` - fee record for one transaction
//! - `GET /health` - liveness
//! - `GET /cache/stats` - fee cache statistics

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::cache::CacheStats;
use crate::command::FeeTrackerHandle;
use crate::errors::{FeeTrackerError, PriceError, RpcError};
use crate::types::fees::TransactionFeeRecord;

/// Query parameter and fallback header carrying the transaction hash
pub const TXN_HASH_PARAM: &str = "txn_hash";

/// Query parameters for the fee endpoint.
#[derive(Debug, Deserialize)]
pub struct FeeQuery {
    txn_hash: Option<String>,
}

/// Failures returned to HTTP clients as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    /// Neither the query parameter nor the header was supplied
    MissingHash,
    /// The query string could not be decoded
    InvalidQuery(QueryRejection),
    Tracker(FeeTrackerError),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection)
    }
}

impl From<FeeTrackerError> for ApiError {
    fn from(err: FeeTrackerError) -> Self {
        ApiError::Tracker(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingHash | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Tracker(err) => match err {
                FeeTrackerError::Hash(_) => StatusCode::BAD_REQUEST,
                FeeTrackerError::Rpc(
                    RpcError::TransactionNotFound { .. } | RpcError::PendingTransaction { .. },
                ) => StatusCode::NOT_FOUND,
                FeeTrackerError::NotPoolTransaction { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                FeeTrackerError::Rpc(RpcError::RateLimited { .. })
                | FeeTrackerError::Price(PriceError::RateLimited) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                FeeTrackerError::Rpc(_)
                | FeeTrackerError::Price(_)
                | FeeTrackerError::InvalidBlockTimestamp { .. } => StatusCode::BAD_GATEWAY,
                FeeTrackerError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::MissingHash => format!("Missing required parameter: {TXN_HASH_PARAM}"),
            ApiError::InvalidQuery(rejection) => rejection.body_text(),
            ApiError::Tracker(err) => err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Handler for the transaction fee endpoint.
///
/// The query parameter wins; the `txn_hash` header is only read when the
/// parameter is absent.
pub async fn get_transaction_fee(
    State(handle): State<FeeTrackerHandle>,
    query: Result<Query<FeeQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Json<TransactionFeeRecord>, ApiError> {
    let Query(params) = query?;
    let raw_hash = match params.txn_hash {
        Some(hash) => hash,
        None => headers
            .get(TXN_HASH_PARAM)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .ok_or(ApiError::MissingHash)?,
    };

    info!(txn_hash = %raw_hash, "Received transaction fee request");

    let record = handle.transaction_fee(&raw_hash).await?;
    Ok(Json(record))
}

/// Handler for the cache statistics endpoint.
pub async fn get_cache_stats(
    State(handle): State<FeeTrackerHandle>,
) -> Result<Json<CacheStats>, ApiError> {
    Ok(Json(handle.cache_stats().await?))
}

/// Handler for the liveness endpoint.
pub async fn get_health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Builds the router with every endpoint attached to `handle`.
pub fn router(handle: FeeTrackerHandle) -> Router {
    Router::new()
        .route("/transaction_fee", get(get_transaction_fee))
        .route("/health", get(get_health))
        .route("/cache/stats", get(get_cache_stats))
        .with_state(handle)
}

/// Starts the API server.
pub async fn serve_api(listener: TcpListener, handle: FeeTrackerHandle) -> anyhow::Result<()> {
    let app = router(handle);

    let addr = listener.local_addr()?;

    info!(address = ?addr, "Starting server");

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HashError;
    use alloy_primitives::{Address, TxHash};
    use chrono::NaiveDate;

    fn status_of(err: FeeTrackerError) -> StatusCode {
        ApiError::Tracker(err).status()
    }

    #[test]
    fn maps_tracker_errors_to_status_codes() {
        assert_eq!(ApiError::MissingHash.status(), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(HashError::Empty.into()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(RpcError::TransactionNotFound { tx_hash: TxHash::ZERO }.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(RpcError::PendingTransaction { tx_hash: TxHash::ZERO }.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(FeeTrackerError::NotPoolTransaction {
                tx_hash: TxHash::ZERO,
                pool: Address::ZERO,
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(PriceError::RateLimited.into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(
                PriceError::PriceUnavailable {
                    date: NaiveDate::from_ymd_opt(2021, 5, 5).unwrap(),
                }
                .into()
            ),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(FeeTrackerError::unavailable("gone")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
