// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The validated playing card value type.
use std::{fmt, rc::Weak};

use crate::{deck::Deck, error::DeckError, meta};

/// A single playing card.
///
/// A card is either a standard suit/value combination or a special
/// card, a card in the [special suit](meta::SPECIAL_SUIT) whose value
/// comes from [meta::SPECIAL_CARDS]. Tokens are validated against the
/// canonical tables at construction and the card is immutable
/// afterwards.
#[derive(Debug)]
pub struct Card {
    suit: &'static str,
    value: &'static str,
    deck: Option<Weak<Deck>>,
}

impl Card {
    /// Creates a card, validating the suit and value tokens.
    pub fn new(suit: &str, value: &str) -> Result<Self, DeckError> {
        let (suit, value) = if suit == meta::SPECIAL_SUIT {
            let value = meta::special_token(value)
                .ok_or_else(|| DeckError::InvalidSpecialCard(value.to_string()))?;
            (meta::SPECIAL_SUIT, value)
        } else {
            match (meta::suit_token(suit), meta::value_token(value)) {
                (Some(suit), Some(value)) => (suit, value),
                _ => {
                    return Err(DeckError::InvalidCard {
                        suit: suit.to_string(),
                        value: value.to_string(),
                    });
                }
            }
        };

        Ok(Self {
            suit,
            value,
            deck: None,
        })
    }

    /// The card suit token.
    pub fn suit(&self) -> &str {
        self.suit
    }

    /// The card value token.
    pub fn value(&self) -> &str {
        self.value
    }

    /// Checks if this card is in the special suit.
    pub fn is_special(&self) -> bool {
        self.suit == meta::SPECIAL_SUIT
    }

    /// The deck back-reference slot.
    ///
    /// The slot starts empty and no operation assigns it, membership is
    /// tracked by the owning [Deck] itself, see [Deck::contains].
    pub fn deck(&self) -> Option<Weak<Deck>> {
        self.deck.clone()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_special() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} of {}", self.value, self.suit)
        }
    }
}
