// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deck seeding strategies.
use crate::{
    error::{DeckError, Result},
    meta,
};

/// A (suit, value) pair emitted by a seeding strategy.
pub type SeedPair = (&'static str, &'static str);

/// Resolves a deck type name to its seeding order.
///
/// Strategies are pure functions of the [meta] tables: resolving the
/// same name again reproduces the identical sequence. An unknown name
/// fails before any pair is emitted.
///
/// Known deck types:
///
/// - `"poker"`: every standard value for every standard suit, both in
///   declaration order, 52 pairs.
/// - `"pinochle"`: per suit the pinochle value subset emitted twice
///   back to back before the next suit, 48 pairs. Pinochle decks hold
///   two copies of each relevant rank per suit.
pub fn seed_order(kind: &str) -> Result<Box<dyn Iterator<Item = SeedPair>>> {
    match kind {
        "poker" => Ok(Box::new(meta::SUITS.into_iter().flat_map(|suit| {
            meta::VALUES.into_iter().map(move |value| (suit, value))
        }))),
        "pinochle" => Ok(Box::new(meta::SUITS.into_iter().flat_map(|suit| {
            meta::PINOCHLE_VALUES
                .into_iter()
                .chain(meta::PINOCHLE_VALUES)
                .map(move |value| (suit, value))
        }))),
        kind => Err(DeckError::UnknownDeckType(kind.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poker_order_is_suits_by_values() {
        let pairs: Vec<_> = seed_order("poker").unwrap().collect();
        assert_eq!(pairs.len(), 52);
        assert_eq!(pairs[0], ("spades", "A"));
        assert_eq!(pairs[12], ("spades", "K"));
        assert_eq!(pairs[13], ("hearts", "A"));
        assert_eq!(pairs[51], ("diamonds", "K"));
    }

    #[test]
    fn pinochle_repeats_the_subset_per_suit() {
        let pairs: Vec<_> = seed_order("pinochle").unwrap().collect();
        assert_eq!(pairs.len(), 48);

        for (block, suit) in pairs.chunks(12).zip(meta::SUITS) {
            let expected: Vec<_> = meta::PINOCHLE_VALUES
                .into_iter()
                .chain(meta::PINOCHLE_VALUES)
                .map(|value| (suit, value))
                .collect();
            assert_eq!(block, expected);
        }
    }

    #[test]
    fn strategies_are_restartable() {
        let first: Vec<_> = seed_order("poker").unwrap().collect();
        let second: Vec<_> = seed_order("poker").unwrap().collect();
        assert_eq!(first, second);

        let first: Vec<_> = seed_order("pinochle").unwrap().collect();
        let second: Vec<_> = seed_order("pinochle").unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = seed_order("canasta").err().unwrap();
        assert_eq!(err, DeckError::UnknownDeckType("canasta".to_string()));
    }
}
