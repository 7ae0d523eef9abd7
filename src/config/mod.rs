// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the poolfee service
//!
//! The service reads a TOML file named by the `CONFIG_FILE` environment
//! variable (a `.env` file is honoured). Every key except `api_key` has a
//! default.
//!
//! # Example: config file
//!
//! ```toml
//! api_key = "YOUR_ETHERSCAN_KEY"
//! bind = "0.0.0.0:5000"
//! source = "etherscan"
//! require_pool_membership = true
//!
//! [cache]
//! max_entries = 10000
//! ```
//!
//! # Example: Building in code
//!
//! ```rust
//! use poolfee::{SourceKind, TrackerConfigBuilder};
//! use alloy_chains::NamedChain;
//!
//! let config = TrackerConfigBuilder::new()
//!     .source(SourceKind::Rpc)
//!     .rpc_url("https://eth.llamarpc.com")
//!     .chain(NamedChain::Mainnet)
//!     .max_cache_entries(1_000)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.cache.max_entries, Some(1_000));
//! ```

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ConfigError;

pub mod constants;

use constants::{endpoints, pools};

/// Environment variable naming the config file
pub const CONFIG_FILE_ENV: &str = "CONFIG_FILE";

/// Which upstream resolves transaction receipts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Etherscan API, needs `api_key`
    #[default]
    Etherscan,
    /// Ethereum JSON-RPC node, needs `rpc_url`
    Rpc,
}

/// Fee cache settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// LRU bound on cached records; `None` keeps every record
    pub max_entries: Option<usize>,
}

/// Configuration for the poolfee service
///
/// Use [`TrackerConfigBuilder`] to construct instances in code, or
/// [`TrackerConfig::from_env`] to load the file named by `CONFIG_FILE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrackerConfig {
    /// Etherscan API key
    pub api_key: Option<String>,

    /// Address the HTTP server binds to
    /// Default: 0.0.0.0:5000
    pub bind: SocketAddr,

    /// Chain id passed to Etherscan
    /// Default: 1 (Ethereum Mainnet)
    pub chain: u64,

    /// Transaction source
    /// Default: etherscan
    pub source: SourceKind,

    /// JSON-RPC endpoint, required when `source = "rpc"`
    pub rpc_url: Option<String>,

    /// Etherscan API base URL
    pub etherscan_url: String,

    /// Binance klines URL
    pub binance_url: String,

    /// Binance symbol whose daily open prices fees
    /// Default: ETHUSDT
    pub price_symbol: String,

    /// Pool whose transactions are accepted
    pub pool_address: Address,

    /// Reject transactions that never emitted a log from `pool_address`
    /// Default: true
    pub require_pool_membership: bool,

    /// Timeout for each upstream HTTP request, in seconds
    /// Default: 30
    pub request_timeout_secs: u64,

    pub cache: CacheConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, constants::DEFAULT_PORT)),
            chain: NamedChain::Mainnet as u64,
            source: SourceKind::default(),
            rpc_url: None,
            etherscan_url: endpoints::ETHERSCAN_V2.to_string(),
            binance_url: endpoints::BINANCE_KLINES.to_string(),
            price_symbol: constants::DEFAULT_PRICE_SYMBOL.to_string(),
            pool_address: pools::UNISWAP_V3_USDC_ETH,
            require_pool_membership: true,
            request_timeout_secs: constants::DEFAULT_REQUEST_TIMEOUT_SECS,
            cache: CacheConfig::default(),
        }
    }
}

fn parse_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        field,
        details: e.to_string(),
    })
}

impl TrackerConfig {
    /// Load the file named by `CONFIG_FILE`
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = dotenvy::var(CONFIG_FILE_ENV).map_err(|_| ConfigError::MissingConfigFile)?;
        Self::load(path)
    }

    /// Read, parse and validate a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate TOML config text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the selected source has what it needs and every URL parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.source {
            SourceKind::Etherscan => {
                if self.api_key.as_deref().map_or(true, |key| key.trim().is_empty()) {
                    return Err(ConfigError::MissingApiKey);
                }
            }
            SourceKind::Rpc => {
                self.rpc_endpoint()?;
            }
        }

        self.etherscan_endpoint()?;
        self.binance_endpoint()?;

        if self.cache.max_entries == Some(0) {
            return Err(ConfigError::ZeroCacheCapacity);
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ZeroRequestTimeout);
        }

        Ok(())
    }

    pub fn etherscan_endpoint(&self) -> Result<Url, ConfigError> {
        parse_url("etherscan_url", &self.etherscan_url)
    }

    pub fn binance_endpoint(&self) -> Result<Url, ConfigError> {
        parse_url("binance_url", &self.binance_url)
    }

    pub fn rpc_endpoint(&self) -> Result<Url, ConfigError> {
        let url = self.rpc_url.as_deref().ok_or(ConfigError::MissingRpcUrl)?;
        parse_url("rpc_url", url)
    }

    /// The pool to filter on, if membership is enforced
    pub fn pool_filter(&self) -> Option<Address> {
        self.require_pool_membership.then_some(self.pool_address)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Builder for [`TrackerConfig`]
///
/// Starts from the defaults and validates on [`build`](Self::build).
///
/// # Example
///
/// ```rust
/// use poolfee::TrackerConfigBuilder;
/// use std::time::Duration;
///
/// let config = TrackerConfigBuilder::new()
///     .api_key("KEY")
///     .request_timeout(Duration::from_secs(10))
///     .require_pool_membership(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.pool_filter(), None);
/// ```
#[derive(Debug, Default)]
pub struct TrackerConfigBuilder {
    config: TrackerConfig,
}

impl TrackerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn bind(mut self, addr: SocketAddr) -> Self {
        self.config.bind = addr;
        self
    }

    pub fn chain(mut self, chain: NamedChain) -> Self {
        self.config.chain = chain as u64;
        self
    }

    pub fn source(mut self, source: SourceKind) -> Self {
        self.config.source = source;
        self
    }

    pub fn rpc_url(mut self, url: impl Into<String>) -> Self {
        self.config.rpc_url = Some(url.into());
        self
    }

    pub fn etherscan_url(mut self, url: impl Into<String>) -> Self {
        self.config.etherscan_url = url.into();
        self
    }

    pub fn binance_url(mut self, url: impl Into<String>) -> Self {
        self.config.binance_url = url.into();
        self
    }

    pub fn price_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.config.price_symbol = symbol.into();
        self
    }

    pub fn pool_address(mut self, pool: Address) -> Self {
        self.config.pool_address = pool;
        self
    }

    pub fn require_pool_membership(mut self, required: bool) -> Self {
        self.config.require_pool_membership = required;
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout_secs = timeout.as_secs();
        self
    }

    /// Bound the fee cache with LRU eviction
    pub fn max_cache_entries(mut self, max: usize) -> Self {
        self.config.cache.max_entries = Some(max);
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<TrackerConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
