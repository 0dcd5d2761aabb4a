// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Library error types.
use thiserror::Error;

/// Errors raised by card construction and deck operations.
///
/// Errors are raised at the offending call and never caught inside the
/// library, recovery is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A special suit card with a token outside the special set.
    #[error("invalid special card {0:?}")]
    InvalidSpecialCard(String),
    /// A suit or value outside the standard tables.
    #[error("invalid suit or value {suit:?}/{value:?}")]
    InvalidCard {
        /// The rejected suit token.
        suit: String,
        /// The rejected value token.
        value: String,
    },
    /// A seed request for an unrecognized deck type.
    #[error("unknown deck type {0:?}")]
    UnknownDeckType(String),
    /// A find call with neither a suit nor a value.
    #[error("no search data given")]
    InvalidQuery,
}

/// Result alias for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;
