// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Canonical card type tables.
//!
//! These tables are fixed for the process lifetime, validation and
//! seeding strategies are pure functions of their contents and order.

/// The standard suits in declaration order.
pub const SUITS: [&str; 4] = ["spades", "hearts", "clubs", "diamonds"];

/// The standard values in declaration order.
pub const VALUES: [&str; 13] = [
    "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
];

/// Tokens accepted as the value of a special card.
pub const SPECIAL_CARDS: [&str; 1] = ["joker"];

/// The suit marker for special cards.
pub const SPECIAL_SUIT: &str = "special";

/// The value subset used to build pinochle decks.
pub const PINOCHLE_VALUES: [&str; 6] = ["A", "10", "K", "Q", "J", "9"];

/// Maps a token to its entry in a canonical table.
fn canonical(table: &'static [&'static str], token: &str) -> Option<&'static str> {
    table.iter().find(|entry| **entry == token).copied()
}

pub(crate) fn suit_token(token: &str) -> Option<&'static str> {
    canonical(&SUITS, token)
}

pub(crate) fn value_token(token: &str) -> Option<&'static str> {
    canonical(&VALUES, token)
}

pub(crate) fn special_token(token: &str) -> Option<&'static str> {
    canonical(&SPECIAL_CARDS, token)
}
