// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    api::serve_api,
    cache::{FeeCache, MemoryCache},
    command::CommandHandler,
    config::{SourceKind, TrackerConfig},
    errors::ConfigError,
    fee::{EtherscanSource, RpcSource, TransactionSource},
    price::{BinanceSource, PriceResolver},
    tracker::FeeTracker,
};

/// Main entry point for the application.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = TrackerConfig::from_env()?;
    info!(
        bind = %config.bind,
        chain = config.chain,
        source = ?config.source,
        pool_filter = ?config.pool_filter(),
        "Loaded configuration"
    );

    let tracker = build_tracker(&config)?;

    // Initialize the command handler
    let handle = CommandHandler::init(tracker);

    let listener = TcpListener::bind(config.bind).await?;

    // Start the API server
    serve_api(listener, handle).await?;

    Ok(())
}

/// Wire sources, price resolver and cache together as described by `config`.
pub fn build_tracker(config: &TrackerConfig) -> anyhow::Result<FeeTracker> {
    let client = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .build()?;

    let transactions: Box<dyn TransactionSource> = match config.source {
        SourceKind::Etherscan => {
            let api_key = config.api_key.clone().ok_or(ConfigError::MissingApiKey)?;
            Box::new(EtherscanSource::new(
                client.clone(),
                config.etherscan_endpoint()?,
                api_key,
                config.chain,
            ))
        }
        SourceKind::Rpc => Box::new(RpcSource::http(config.rpc_endpoint()?)),
    };

    let prices = PriceResolver::new(Box::new(BinanceSource::new(
        client,
        config.binance_endpoint()?,
        config.price_symbol.clone(),
    )));

    let cache: Box<dyn FeeCache> = match config.cache.max_entries {
        Some(max) => Box::new(MemoryCache::new().with_max_entries(max)),
        None => Box::new(MemoryCache::new()),
    };

    let tracker = FeeTracker::new(transactions, prices, cache);
    Ok(match config.pool_filter() {
        Some(pool) => tracker.with_pool_filter(pool),
        None => tracker,
    })
}
