// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading the service configuration.

use std::path::PathBuf;

/// Errors that can occur while loading or validating [`crate::TrackerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `CONFIG_FILE` is not set.
    #[error("No config file provided (set CONFIG_FILE)")]
    MissingConfigFile,

    /// The config file could not be read.
    #[error("Failed to read config file {path}")]
    Read {
        /// Path that was read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`crate::TrackerConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The Etherscan source needs an API key.
    #[error("api_key is required when source = \"etherscan\"")]
    MissingApiKey,

    /// The RPC source needs an endpoint.
    #[error("rpc_url is required when source = \"rpc\"")]
    MissingRpcUrl,

    /// One of the configured URLs does not parse.
    #[error("Invalid URL for {field}: {details}")]
    InvalidUrl {
        /// Config field holding the URL
        field: &'static str,
        /// Parser message
        details: String,
    },

    /// An LRU cache with room for zero entries can never hit.
    #[error("cache.max_entries must be greater than zero")]
    ZeroCacheCapacity,

    /// A zero timeout fails every upstream request immediately.
    #[error("request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,
}
