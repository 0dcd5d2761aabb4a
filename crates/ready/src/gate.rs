// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Readiness gate for deferred library startup.
use log::debug;
use parking_lot::Mutex;
use std::{fmt, mem, sync::Arc};

/// A deferred callback run once the gate opens.
type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Components whose capability checks gate library use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The library itself has loaded.
    Library,
    /// Host environment feature checks have passed.
    Polyfills,
}

/// Process-wide readiness state.
///
/// The gate starts closed and opens once every [Component] has been
/// signalled ready, at that point the callbacks registered while it
/// was closed run in registration order. Callbacks never run
/// synchronously inside the registering call, they are spawned onto
/// the current tokio runtime.
///
/// Create one gate at startup and clone it wherever it is needed,
/// clones share the same state.
#[derive(Clone, Default)]
pub struct ReadyGate(Arc<Mutex<Shared>>);

#[derive(Default)]
struct Shared {
    library: bool,
    polyfills: bool,
    ready: bool,
    pending: Vec<Callback>,
}

impl ReadyGate {
    /// Creates a closed gate with no pending callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the gate is open.
    pub fn is_ready(&self) -> bool {
        self.0.lock().ready
    }

    /// Registers a callback to run once the gate is open.
    ///
    /// Returns the gate state at registration time: true means the
    /// callback has been scheduled, false means it stays pending until
    /// the gate opens. The callback is never invoked before this call
    /// returns.
    ///
    /// Must be called within a tokio runtime.
    pub fn register_callback<F>(&self, callback: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let mut shared = self.0.lock();
        if shared.ready {
            tokio::spawn(async move { callback() });
        } else {
            shared.pending.push(Box::new(callback));
        }

        shared.ready
    }

    /// Signals that a component's capability checks have passed.
    ///
    /// The signal that marks the last component ready opens the gate
    /// and schedules every pending callback, in registration order.
    /// Signals after the gate has opened are no-ops.
    ///
    /// Must be called within a tokio runtime.
    pub fn signal_component_ready(&self, component: Component) {
        let pending = {
            let mut shared = self.0.lock();
            match component {
                Component::Library => shared.library = true,
                Component::Polyfills => shared.polyfills = true,
            }

            if shared.library && shared.polyfills && !shared.ready {
                shared.ready = true;
                mem::take(&mut shared.pending)
            } else {
                return;
            }
        };

        debug!("gate open, scheduling {} pending callbacks", pending.len());
        if !pending.is_empty() {
            tokio::spawn(async move {
                for callback in pending {
                    callback();
                }
            });
        }
    }
}

impl fmt::Debug for ReadyGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.0.lock();
        f.debug_struct("ReadyGate")
            .field("library", &shared.library)
            .field("polyfills", &shared.polyfills)
            .field("ready", &shared.ready)
            .field("pending", &shared.pending.len())
            .finish()
    }
}
