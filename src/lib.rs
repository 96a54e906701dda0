//! # Pulser Core
//!
//! A discrete-event simulator for pulse-based logic networks.
//!
//! This library provides:
//! - A line-oriented language for describing module wirings
//! - Three module kinds (broadcaster, flip-flop, conjunction) dispatched
//!   as a closed sum type
//! - A breadth-first press loop that propagates one button press to
//!   quiescence
//! - Pulse counting and per-module first-trigger observation, with an
//!   LCM-based period resolver on top
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Parser for the wiring description language
//! - [`circuit`] - Network representation and validation
//! - [`modules`] - Module models (broadcaster, flip-flop, conjunction)
//! - [`sim`] - Press loop, analyzer, and period resolver
//!
//! ## Usage
//!
//! ```
//! use pulser_core::{Analyzer, Circuit, Propagator};
//!
//! let wiring = "\
//! broadcaster -> a, b, c
//! %a -> b
//! %b -> c
//! %c -> inv
//! &inv -> a";
//!
//! let circuit = Circuit::build(wiring.lines()).unwrap();
//! let mut propagator = Propagator::new(circuit);
//!
//! let mut analyzer = Analyzer::new();
//! propagator.press(Some(&mut analyzer)).unwrap();
//! assert_eq!(analyzer.counts(), (8, 4));
//! ```
//!
//! ## Simulation Method
//!
//! A press injects a single low pulse at the `broadcaster` module and
//! drains a FIFO queue of `(source, pulse, destination)` events. Modules
//! react in strict arrival order - breadth-first, which matters because
//! a conjunction's output depends on which of its inputs was most recent
//! at the instant of delivery. Module state is mutated in place and
//! persists across presses; that persistence is what the periodicity
//! measurement observes.

pub mod circuit;
pub mod dsl;
pub mod error;
pub mod modules;
pub mod sim;

// Re-export main types for convenience
pub use circuit::{validate_circuit, Circuit, Pulse, BROADCASTER, BUTTON};
pub use error::{PulserError, Result};
pub use sim::{resolve_period, Analyzer, PeriodMeasurement, Propagator, PropagatorConfig};

/// Press count used by the aggregate measurement.
pub const DEFAULT_PRESSES: usize = 1000;
