// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across poolfee.
//!
//! - Wei amounts and their exact conversion to ETH
//! - Validated transaction hashes
//! - Gas data and priced fee records
//! - Daily prices

pub mod fees;
pub mod hash;
pub mod price;
pub mod wei;

// Note: Public types are re-exported from lib.rs, not here
