// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cardstock readiness gate.
//!
//! Host capability checks must pass before any deck operation is
//! considered safe, this crate tracks those checks and defers
//! registered callbacks until every component reports ready:
//!
//! ```
//! # use cardstock_ready::{Component, ReadyGate};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let gate = ReadyGate::new();
//!
//! // Deferred until the gate opens.
//! let registered = gate.register_callback(|| println!("decks are safe to use"));
//! assert!(!registered);
//!
//! gate.signal_component_ready(Component::Library);
//! gate.signal_component_ready(Component::Polyfills);
//! assert!(gate.is_ready());
//! # }
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

mod gate;
pub use gate::{Component, ReadyGate};
