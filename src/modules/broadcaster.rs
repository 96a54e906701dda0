//! The entry module.

use crate::circuit::{Pulse, BUTTON};
use crate::error::{PulserError, Result};

/// The unique entry module: forwards the pulse it receives from the
/// button, unchanged, to every destination.
///
/// Only the external button may drive it. Any other source means the
/// propagation loop mis-routed an event, so the error is surfaced
/// rather than absorbed.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    pub destinations: Vec<String>,
}

impl Broadcaster {
    /// Create a new broadcaster.
    pub fn new(destinations: Vec<String>) -> Self {
        Self { destinations }
    }

    /// React to an incoming pulse: forward it verbatim.
    pub fn send(&self, source: &str, pulse: Pulse) -> Result<Pulse> {
        if source != BUTTON {
            return Err(PulserError::contract(
                "broadcaster",
                format!("driven by '{source}', expected '{BUTTON}'"),
            ));
        }
        Ok(pulse)
    }
}
