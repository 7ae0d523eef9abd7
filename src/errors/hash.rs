// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Validation errors for user-supplied transaction hashes.

/// Reasons a transaction hash string is rejected.
///
/// These are raised by [`crate::parse_transaction_hash`] before any upstream
/// request is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// No hash was supplied (or only a bare `0x`).
    #[error("transaction hash is empty")]
    Empty,

    /// The hash does not contain exactly 64 hex digits.
    #[error("expected 64 hex digits, got {length}")]
    InvalidLength {
        /// Number of digits after the optional `0x` prefix
        length: usize,
    },

    /// The hash contains a character outside `[0-9a-fA-F]`.
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character
        character: char,
        /// Zero-based offset into the digits (after the prefix)
        position: usize,
    },
}
