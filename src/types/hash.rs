// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Validation of user-supplied transaction hashes.

use alloy_primitives::TxHash;
use std::str::FromStr;

use crate::errors::HashError;

/// Number of hex digits in a transaction hash
pub const TX_HASH_HEX_LEN: usize = 64;

/// Parse and validate a transaction hash string.
///
/// Accepts 64 hex digits with an optional `0x`/`0X` prefix, in any letter case,
/// with surrounding whitespace ignored. The returned [`TxHash`] displays and
/// serialises in canonical lowercase form, so differently-cased inputs map to
/// the same cache key.
///
/// # Examples
///
/// ```
/// use poolfee::{parse_transaction_hash, HashError};
///
/// let hash = parse_transaction_hash(
///     "0xA4C3D2B1A4C3D2B1A4C3D2B1A4C3D2B1A4C3D2B1A4C3D2B1A4C3D2B1A4C3D2B1",
/// )
/// .unwrap();
/// assert!(hash.to_string().starts_with("0xa4c3d2b1"));
///
/// assert_eq!(
///     parse_transaction_hash("0x12345"),
///     Err(HashError::InvalidLength { length: 5 })
/// );
/// ```
pub fn parse_transaction_hash(input: &str) -> Result<TxHash, HashError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(HashError::Empty);
    }

    if let Some((position, character)) = digits
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(HashError::InvalidCharacter {
            character,
            position,
        });
    }

    // All digits are ASCII here, so byte length equals digit count
    if digits.len() != TX_HASH_HEX_LEN {
        return Err(HashError::InvalidLength {
            length: digits.len(),
        });
    }

    TxHash::from_str(digits).map_err(|_| HashError::InvalidLength {
        length: digits.len(),
    })
}
