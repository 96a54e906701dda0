//! Module models for network simulation.
//!
//! This module provides the three module kinds a wiring can declare:
//! - Broadcaster: the unique entry point, forwards its input unchanged
//! - Flip-flop: toggles on low pulses, blind to high pulses
//! - Conjunction: NAND over the last pulse remembered per input
//!
//! Each kind implements a pure transition function from an incoming
//! `(source, pulse)` pair to an optional outgoing pulse; [`Module`]
//! dispatches over them exhaustively.

mod broadcaster;
mod conjunction;
mod flipflop;

pub use broadcaster::Broadcaster;
pub use conjunction::Conjunction;
pub use flipflop::FlipFlop;

use crate::circuit::Pulse;
use crate::dsl::{ModuleDef, ModuleKind};
use crate::error::Result;

/// A network module.
#[derive(Debug, Clone)]
pub enum Module {
    Broadcaster(Broadcaster),
    FlipFlop(FlipFlop),
    Conjunction(Conjunction),
}

impl Module {
    /// Create a module from a wiring definition.
    ///
    /// Conjunction memories are left unconnected here; they are seeded
    /// once the full wiring has been read.
    pub fn from_def(def: &ModuleDef) -> Self {
        match def.kind {
            ModuleKind::Broadcaster => {
                Module::Broadcaster(Broadcaster::new(def.destinations.clone()))
            }
            ModuleKind::FlipFlop => Module::FlipFlop(FlipFlop::new(def.destinations.clone())),
            ModuleKind::Conjunction => {
                Module::Conjunction(Conjunction::new(def.destinations.clone()))
            }
        }
    }

    /// React to an incoming pulse from `source`.
    ///
    /// Returns `Ok(None)` when the module absorbs the pulse without
    /// emitting (a flip-flop receiving high).
    pub fn send(&mut self, source: &str, pulse: Pulse) -> Result<Option<Pulse>> {
        match self {
            Module::Broadcaster(b) => b.send(source, pulse).map(Some),
            Module::FlipFlop(ff) => Ok(ff.send(pulse)),
            Module::Conjunction(c) => Ok(Some(c.send(source, pulse))),
        }
    }

    /// Destination names, in declaration order.
    pub fn destinations(&self) -> &[String] {
        match self {
            Module::Broadcaster(b) => &b.destinations,
            Module::FlipFlop(ff) => &ff.destinations,
            Module::Conjunction(c) => &c.destinations,
        }
    }

    /// Human-readable kind label.
    pub fn kind(&self) -> &'static str {
        match self {
            Module::Broadcaster(_) => "broadcaster",
            Module::FlipFlop(_) => "flip-flop",
            Module::Conjunction(_) => "conjunction",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::BUTTON;

    fn def(kind: ModuleKind, name: &str) -> ModuleDef {
        ModuleDef {
            name: name.to_string(),
            kind,
            destinations: vec!["x".to_string(), "y".to_string()],
            line: 1,
        }
    }

    #[test]
    fn test_from_def_preserves_destination_order() {
        let m = Module::from_def(&def(ModuleKind::FlipFlop, "a"));
        assert_eq!(m.destinations(), ["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_dispatch_matches_variant_behavior() {
        let mut b = Module::from_def(&def(ModuleKind::Broadcaster, "broadcaster"));
        assert_eq!(b.send(BUTTON, Pulse::Low).unwrap(), Some(Pulse::Low));

        let mut ff = Module::from_def(&def(ModuleKind::FlipFlop, "a"));
        assert_eq!(ff.send("broadcaster", Pulse::High).unwrap(), None);
        assert_eq!(
            ff.send("broadcaster", Pulse::Low).unwrap(),
            Some(Pulse::High)
        );
    }
}
