//! Error types for the Pulser network simulator.
//!
//! This module provides a unified error type [`PulserError`] that covers
//! all error conditions that can occur during wiring parsing, circuit
//! construction, and signal propagation.

use thiserror::Error;

/// Result type alias using [`PulserError`].
pub type Result<T> = std::result::Result<T, PulserError>;

/// Unified error type for all Pulser operations.
#[derive(Error, Debug)]
pub enum PulserError {
    // ============ Wiring Parsing Errors ============
    /// Malformed wiring line
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    // ============ Circuit Construction Errors ============
    /// The same module name declared on the left of two wiring lines
    #[error("Duplicate module name '{name}'")]
    DuplicateModule { name: String },

    /// No `broadcaster` module in the wiring
    #[error("Circuit has no 'broadcaster' module")]
    MissingBroadcaster,

    /// Wiring with no module declarations at all
    #[error("Circuit has no modules")]
    EmptyCircuit,

    // ============ Propagation Errors ============
    /// A module was driven in a way its contract forbids.
    /// Indicates a bug in the propagation loop, not bad input data.
    #[error("Contract violation in module '{module}': {message}")]
    ContractViolation { module: String, message: String },

    /// Defensive event cap exceeded; the network never quiesced
    #[error("Press did not quiesce after {events} events - network may contain an unsupported cycle")]
    PropagationOverflow { events: usize },

    // ============ Period Measurement Errors ============
    /// Ran out of presses before every watched predecessor fired
    #[error("No period found after {presses} presses")]
    PressLimitExceeded { presses: u64 },

    /// A watched predecessor's recurrence interval did not match its first trigger index
    #[error("Module '{name}' is not periodic: first trigger at press {first}, next after {interval} more")]
    AperiodicPredecessor {
        name: String,
        first: u64,
        interval: u64,
    },

    // ============ I/O Errors ============
    /// Error reading a wiring file
    #[error("Failed to read wiring file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PulserError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a contract violation error
    pub fn contract(module: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ContractViolation {
            module: module.into(),
            message: message.into(),
        }
    }
}
