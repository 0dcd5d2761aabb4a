// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardstock playing cards types.
//!
//! This crate defines a validated [Card] type:
//!
//! ```
//! # use cardstock_cards::{Card, DeckError};
//! let ace = Card::new("spades", "A")?;
//! assert_eq!(ace.suit(), "spades");
//! assert_eq!(ace.value(), "A");
//!
//! // Suit and value tokens are checked against the canonical tables.
//! assert!(Card::new("stars", "A").is_err());
//! # Ok::<(), DeckError>(())
//! ```
//!
//! and a [Deck] container seeded by named deck types:
//!
//! ```
//! # use cardstock_cards::{Deck, DeckError};
//! let mut deck = Deck::new();
//! deck.seed_deck("poker")?;
//! assert_eq!(deck.len(), 52);
//!
//! let hearts = deck.find(Some("hearts"), None)?;
//! assert_eq!(hearts.len(), 13);
//!
//! let queens = deck.filter(|card| card.value() == "Q");
//! assert_eq!(queens.len(), 4);
//! # Ok::<(), DeckError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod card;
mod deck;
mod error;
mod strategy;

pub mod meta;

pub use card::Card;
pub use deck::Deck;
pub use error::{DeckError, Result};
pub use strategy::{SeedPair, seed_order};
