//! Circuit validation.

use crate::error::{PulserError, Result};

use super::{Circuit, BROADCASTER};

/// Validate a circuit for simulation.
///
/// Checks:
/// - The wiring declares at least one module
/// - The entry module `broadcaster` exists (the press seed would
///   otherwise have nowhere to go)
///
/// Destinations without a module definition are deliberately not
/// flagged: they are sinks, and absorbing pulses there is defined
/// behavior.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    if circuit.is_empty() {
        return Err(PulserError::EmptyCircuit);
    }

    if !circuit.contains(BROADCASTER) {
        return Err(PulserError::MissingBroadcaster);
    }

    Ok(())
}
