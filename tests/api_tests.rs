// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP tests for the axum router
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no socket is bound.

mod helpers;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use helpers::*;
use poolfee::api::router;
use poolfee::CommandHandler;
use serde_json::Value;
use tower::ServiceExt;

fn app(transactions: MockTransactionSource, prices: MockPriceSource) -> Router {
    router(CommandHandler::init(tracker(transactions, prices)))
}

fn fixture_app() -> Router {
    app(
        MockTransactionSource::with_fixtures(),
        MockPriceSource::with_fixtures(),
    )
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn test_transaction_fee_ok() {
    let (status, body) = get(fixture_app(), &format!("/transaction_fee?txn_hash={POOL_TX}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction_hash"], POOL_TX);
    assert_eq!(body["block_number"], 12_376_729);
    assert_eq!(body["gas_used"], 150_000);
    assert_eq!(body["price_date"], "2021-05-05");
    assert_eq!(body["fee_native"], "0.006");
    assert_eq!(body["fee_fiat"], "19.443");
}

#[tokio::test]
async fn test_transaction_fee_hash_is_canonicalised() {
    let upper = POOL_TX[2..].to_uppercase();
    let (status, body) = get(fixture_app(), &format!("/transaction_fee?txn_hash={upper}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction_hash"], POOL_TX);
}

#[tokio::test]
async fn test_missing_hash_is_bad_request() {
    let (status, body) = get(fixture_app(), "/transaction_fee").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("txn_hash"));
}

#[tokio::test]
async fn test_malformed_hash_is_bad_request() {
    let transactions = MockTransactionSource::with_fixtures();
    let tx_calls = transactions.calls();
    let app = app(transactions, MockPriceSource::with_fixtures());

    let (status, body) = get(app, "/transaction_fee?txn_hash=0x1234").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    assert_eq!(count(&tx_calls), 0);
}

#[tokio::test]
async fn test_empty_hash_is_bad_request() {
    let (status, _) = get(fixture_app(), "/transaction_fee?txn_hash=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_query_parameter_is_json_bad_request() {
    let transactions = MockTransactionSource::with_fixtures();
    let tx_calls = transactions.calls();
    let app = app(transactions, MockPriceSource::with_fixtures());

    let (status, body) = get(
        app,
        &format!("/transaction_fee?txn_hash={POOL_TX}&txn_hash={POOL_TX}"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("txn_hash"));
    assert_eq!(count(&tx_calls), 0);
}

#[tokio::test]
async fn test_header_is_accepted_when_query_absent() {
    let request = Request::get("/transaction_fee")
        .header("txn_hash", POOL_TX)
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(fixture_app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["transaction_hash"], POOL_TX);
}

#[tokio::test]
async fn test_query_takes_precedence_over_header() {
    let request = Request::get(format!("/transaction_fee?txn_hash={POOL_TX}"))
        .header("txn_hash", "garbage")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(fixture_app(), request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_transaction_is_not_found() {
    let (status, body) = get(fixture_app(), &format!("/transaction_fee?txn_hash={UNKNOWN_TX}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_non_pool_transaction_is_unprocessable() {
    let (status, body) = get(fixture_app(), &format!("/transaction_fee?txn_hash={OTHER_TX}")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("pool"));
}

#[tokio::test]
async fn test_price_rate_limit_is_service_unavailable() {
    let app = app(
        MockTransactionSource::with_fixtures(),
        MockPriceSource::with_fixtures().rate_limited(),
    );

    let (status, _) = get(app, &format!("/transaction_fee?txn_hash={POOL_TX}")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_missing_price_is_bad_gateway() {
    let app = app(MockTransactionSource::with_fixtures(), MockPriceSource::new());

    let (status, _) = get(app, &format!("/transaction_fee?txn_hash={POOL_TX}")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(fixture_app(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_cache_stats_reflect_lookups() {
    let app = fixture_app();
    let uri = format!("/transaction_fee?txn_hash={POOL_TX}");

    get(app.clone(), &uri).await;
    get(app.clone(), &uri).await;
    let (status, body) = get(app, "/cache/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hits"], 1);
    assert_eq!(body["misses"], 1);
    assert_eq!(body["entries"], 1);
}
