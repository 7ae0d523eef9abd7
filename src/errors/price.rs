// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for daily price lookups.

use chrono::NaiveDate;

/// Errors that can occur while resolving the daily ETH price.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use poolfee::PriceError;
///
/// let date = NaiveDate::from_ymd_opt(2021, 5, 5).unwrap();
/// let err = PriceError::PriceUnavailable { date };
/// assert_eq!(err.to_string(), "No daily price available for 2021-05-05");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    /// The provider returned no candle for the requested day.
    #[error("No daily price available for {date}")]
    PriceUnavailable {
        /// The requested UTC date
        date: NaiveDate,
    },

    /// The request never produced a usable HTTP response.
    #[error("Price request failed for {date}")]
    RequestFailed {
        /// The requested UTC date
        date: NaiveDate,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The provider answered with an explicit error.
    #[error("Price provider error (code {code}): {message}")]
    ProviderError {
        /// Provider-specific error code
        code: i64,
        /// Message reported by the provider
        message: String,
    },

    /// The provider refused the request because of its rate limit.
    #[error("Price provider rate limit reached")]
    RateLimited,

    /// The provider answered with a payload we could not decode.
    #[error("Invalid price response: {details}")]
    InvalidResponse {
        /// What was wrong with the payload
        details: String,
    },
}

impl PriceError {
    /// Helper to create a `RequestFailed` error from any error type.
    pub fn request_failed(
        date: NaiveDate,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PriceError::RequestFailed {
            date,
            source: Box::new(source),
        }
    }

    /// Helper to create an `InvalidResponse` error.
    pub fn invalid_response(details: impl Into<String>) -> Self {
        PriceError::InvalidResponse {
            details: details.into(),
        }
    }
}
