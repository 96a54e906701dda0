//! Press simulation and analysis.
//!
//! This module provides the engine that drives a built circuit.
//!
//! ## Press algorithm
//!
//! One press is one drain of a FIFO event queue:
//!
//! 1. Enqueue the seed event `(button, low, broadcaster)`.
//! 2. Dequeue the oldest event, record it, and deliver it: sinks absorb
//!    it, modules react to it and may emit one pulse.
//! 3. Enqueue the emission once per destination, in declaration order.
//! 4. The press is complete when the queue empties; module state
//!    carries over to the next press.
//!
//! Strict FIFO order is what makes this breadth-first: all events
//! produced at one propagation depth are delivered before any event
//! they caused, so a conjunction never observes siblings out of order.
//!
//! On top of the loop sit the [`Analyzer`] (pulse counting and watch
//! triggers) and the period resolver (LCM over per-module first-trigger
//! indices).

mod analyzer;
mod period;
mod propagator;

pub use analyzer::Analyzer;
pub use period::{gcd, lcm, resolve_period, PeriodMeasurement};
pub use propagator::{Propagator, PropagatorConfig};

/// Per-press event cap. A finite well-formed network quiesces in far
/// fewer events; the cap exists to turn a malformed cyclic wiring into
/// an error instead of a hang.
pub const DEFAULT_MAX_EVENTS: usize = 1_000_000;

/// Press budget for the periodicity measurement.
pub const DEFAULT_MAX_PRESSES: u64 = 100_000;
