// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The deck container and its query operations.
use log::debug;
use std::rc::Rc;

use crate::{
    card::Card,
    error::{DeckError, Result},
    strategy,
};

/// An ordered, duplicate-permitting collection of cards.
///
/// A deck starts empty and only grows: cards are appended by
/// [seed_deck](Deck::seed_deck) in strategy emission order and no
/// operation removes them. Queries return new sequences that preserve
/// that order.
#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<Rc<Card>>,
}

impl Deck {
    /// Creates an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cards in this deck in append order.
    pub fn cards(&self) -> &[Rc<Card>] {
        &self.cards
    }

    /// The number of cards in this deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if this deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Seeds the deck with the cards of the given deck type.
    ///
    /// Appends one card per pair emitted by the strategy, in emission
    /// order. On failure the cards appended before the error stay in
    /// the deck, there is no rollback.
    pub fn seed_deck(&mut self, kind: &str) -> Result<()> {
        for (suit, value) in strategy::seed_order(kind)? {
            let card = Card::new(suit, value)?;
            self.cards.push(Rc::new(card));
        }

        debug!("seeded {kind} deck, {} cards total", self.cards.len());
        Ok(())
    }

    /// Finds cards by suit, by value, or by both.
    ///
    /// Fails if both arguments are absent. Results preserve deck order.
    pub fn find(&self, suit: Option<&str>, value: Option<&str>) -> Result<Vec<Rc<Card>>> {
        match (suit, value) {
            (None, None) => Err(DeckError::InvalidQuery),
            (Some(suit), None) => Ok(self.filter(|card| card.suit() == suit)),
            (None, Some(value)) => Ok(self.filter(|card| card.value() == value)),
            (Some(suit), Some(value)) => {
                Ok(self.filter(|card| card.suit() == suit && card.value() == value))
            }
        }
    }

    /// Returns the cards matching a predicate, in deck order.
    pub fn filter<P>(&self, predicate: P) -> Vec<Rc<Card>>
    where
        P: Fn(&Card) -> bool,
    {
        self.cards
            .iter()
            .filter(|card| predicate(card))
            .cloned()
            .collect()
    }

    /// Checks if this exact card instance is in the deck.
    ///
    /// Identity check: a structurally identical card that was never
    /// appended to this deck is not contained.
    pub fn contains(&self, card: &Rc<Card>) -> bool {
        self.cards.iter().any(|c| Rc::ptr_eq(c, card))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta;
    use ahash::HashSet;

    #[test]
    fn poker_seed_covers_the_cross_product() {
        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();
        assert_eq!(deck.len(), 52);

        let mut seen = HashSet::default();
        for card in deck.cards() {
            assert!(seen.insert((card.suit().to_string(), card.value().to_string())));
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn poker_seed_preserves_emission_order() {
        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();

        let first = &deck.cards()[0];
        assert_eq!((first.suit(), first.value()), ("spades", "A"));

        let last = &deck.cards()[51];
        assert_eq!((last.suit(), last.value()), ("diamonds", "K"));
    }

    #[test]
    fn pinochle_seed_has_two_copies_per_suit() {
        let mut deck = Deck::new();
        deck.seed_deck("pinochle").unwrap();
        assert_eq!(deck.len(), 48);

        for (block, suit) in deck.cards().chunks(12).zip(meta::SUITS) {
            for value in meta::PINOCHLE_VALUES {
                let copies = block
                    .iter()
                    .filter(|card| card.suit() == suit && card.value() == value)
                    .count();
                assert_eq!(copies, 2);
            }
        }
    }

    #[test]
    fn unknown_deck_type_leaves_the_deck_empty() {
        let mut deck = Deck::new();
        let err = deck.seed_deck("tarot").unwrap_err();
        assert_eq!(err, DeckError::UnknownDeckType("tarot".to_string()));
        assert!(deck.is_empty());
    }

    #[test]
    fn repeated_seeding_appends() {
        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();
        deck.seed_deck("pinochle").unwrap();
        assert_eq!(deck.len(), 100);
    }

    #[test]
    fn find_by_suit() {
        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();

        let hearts = deck.find(Some("hearts"), None).unwrap();
        assert_eq!(hearts.len(), 13);
        assert!(hearts.iter().all(|card| card.suit() == "hearts"));
    }

    #[test]
    fn find_by_value() {
        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();

        let aces = deck.find(None, Some("A")).unwrap();
        assert_eq!(aces.len(), 4);

        // One ace per suit, in declaration order.
        let suits: Vec<_> = aces.iter().map(|card| card.suit().to_string()).collect();
        assert_eq!(suits, meta::SUITS);
    }

    #[test]
    fn find_by_suit_and_value() {
        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();

        let found = deck.find(Some("clubs"), Some("7")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].suit(), found[0].value()), ("clubs", "7"));
    }

    #[test]
    fn find_without_arguments_is_rejected() {
        let deck = Deck::new();
        assert_eq!(deck.find(None, None).unwrap_err(), DeckError::InvalidQuery);

        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();
        assert_eq!(deck.find(None, None).unwrap_err(), DeckError::InvalidQuery);
    }

    #[test]
    fn filter_preserves_deck_order() {
        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();

        let queens = deck.filter(|card| card.value() == "Q");
        let suits: Vec<_> = queens.iter().map(|card| card.suit().to_string()).collect();
        assert_eq!(suits, meta::SUITS);

        // The deck itself is untouched.
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn contains_is_identity_based() {
        let mut deck = Deck::new();
        deck.seed_deck("poker").unwrap();

        let card = deck.cards()[0].clone();
        assert!(deck.contains(&card));

        // A structural twin was never appended to this deck.
        let twin = Rc::new(Card::new(card.suit(), card.value()).unwrap());
        assert!(!deck.contains(&twin));
    }

    #[test]
    fn contains_on_empty_deck() {
        let deck = Deck::new();
        let card = Rc::new(Card::new("spades", "A").unwrap());
        assert!(!deck.contains(&card));
    }
}
