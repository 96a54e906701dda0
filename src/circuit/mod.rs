//! Network representation.
//!
//! This module provides the internal representation of a pulse network
//! after parsing. The [`Circuit`] struct owns all module state and the
//! static wiring, in a form suitable for simulation.

mod graph;
mod types;
mod validate;

pub use graph::Circuit;
pub use types::{Pulse, BROADCASTER, BUTTON};
pub use validate::validate_circuit;
