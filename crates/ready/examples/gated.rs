// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seed a deck once the readiness gate opens.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use tokio::sync::oneshot;

use cardstock_cards::Deck;
use cardstock_ready::{Component, ReadyGate};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let gate = ReadyGate::new();
    let (done_tx, done_rx) = oneshot::channel();

    gate.register_callback(move || {
        let mut deck = Deck::new();
        deck.seed_deck("pinochle").expect("known deck type");
        done_tx.send(deck.len()).ok();
    });

    // Capability checks would report here.
    gate.signal_component_ready(Component::Library);
    gate.signal_component_ready(Component::Polyfills);

    let seeded = done_rx.await.expect("callback runs after the gate opens");
    println!("seeded {seeded} cards");
}
