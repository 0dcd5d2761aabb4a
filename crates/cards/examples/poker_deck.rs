// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seed a poker deck and run a few queries.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;

use cardstock_cards::Deck;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let mut deck = Deck::new();
    deck.seed_deck("poker")?;

    println!("Hearts:");
    for card in deck.find(Some("hearts"), None)? {
        println!("  {card}");
    }

    let aces = deck.find(None, Some("A"))?;
    println!("{} aces", aces.len());

    let faces = deck.filter(|card| matches!(card.value(), "J" | "Q" | "K"));
    println!("{} face cards", faces.len());

    Ok(())
}
