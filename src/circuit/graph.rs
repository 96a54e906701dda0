//! Circuit graph structure.

use std::collections::HashMap;

use crate::dsl::{self, WiringAst};
use crate::error::{PulserError, Result};
use crate::modules::Module;

use super::validate::validate_circuit;

/// A complete pulse network ready for simulation.
///
/// Owns every module's state; a press mutates modules in place, and the
/// state persists into the next press. Callers that need an independent
/// replay of the same wiring must clone the circuit (or rebuild it), not
/// share one.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// All modules, by name
    pub modules: HashMap<String, Module>,

    /// Inbound sources per destination name, in declaration order.
    /// Includes entries for unmodeled sinks.
    inbound: HashMap<String, Vec<String>>,
}

impl Circuit {
    /// Build a circuit from wiring lines: parse, construct, validate.
    pub fn build<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        let circuit = Self::from_ast(dsl::parse(&text)?)?;
        validate_circuit(&circuit)?;
        Ok(circuit)
    }

    /// Build a circuit from a parsed wiring description.
    ///
    /// Construction is two-phase: first every declared module is
    /// instantiated and inbound edges are recorded, then each
    /// conjunction memory is seeded from the complete inbound set.
    /// A conjunction connected before all lines are seen would miss
    /// inputs and compute its NAND over a partial memory.
    pub fn from_ast(ast: WiringAst) -> Result<Self> {
        let mut modules = HashMap::with_capacity(ast.modules.len());
        let mut inbound: HashMap<String, Vec<String>> = HashMap::new();

        // Phase 1: instantiate modules and record who feeds whom
        for def in &ast.modules {
            if modules.contains_key(&def.name) {
                return Err(PulserError::DuplicateModule {
                    name: def.name.clone(),
                });
            }
            modules.insert(def.name.clone(), Module::from_def(def));

            for dest in &def.destinations {
                let sources = inbound.entry(dest.clone()).or_default();
                if !sources.contains(&def.name) {
                    sources.push(def.name.clone());
                }
            }
        }

        // Phase 2: seed conjunction memories from the complete input sets
        for (name, module) in modules.iter_mut() {
            if let Module::Conjunction(c) = module {
                match inbound.get(name) {
                    Some(sources) => c.connect(sources.iter().cloned()),
                    None => log::warn!("conjunction '{name}' has no inbound wires"),
                }
            }
        }

        let flipflops = modules
            .values()
            .filter(|m| matches!(m, Module::FlipFlop(_)))
            .count();
        let conjunctions = modules
            .values()
            .filter(|m| matches!(m, Module::Conjunction(_)))
            .count();
        log::debug!(
            "built circuit: {} modules ({flipflops} flip-flops, {conjunctions} conjunctions)",
            modules.len()
        );

        Ok(Self { modules, inbound })
    }

    /// Check whether a name is a modeled module (not a sink).
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Number of modeled modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check whether the circuit has no modules.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Destination names of a module, in declaration order.
    /// Returns `None` for sinks and unknown names.
    pub fn destinations_of(&self, name: &str) -> Option<&[String]> {
        self.modules.get(name).map(|m| m.destinations())
    }

    /// Modules that wire directly into `name`, in declaration order.
    ///
    /// Works for sinks too, which is how a caller obtains the
    /// predecessor set for the periodicity measurement.
    pub fn sources_of(&self, name: &str) -> &[String] {
        self.inbound.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::Pulse;

    const WIRING: &str = "\
broadcaster -> a, b
%a -> con
%b -> con
&con -> sink";

    #[test]
    fn test_build_registers_every_declared_module() {
        let circuit = Circuit::build(WIRING.lines()).unwrap();
        assert_eq!(circuit.len(), 4);
        assert!(circuit.contains("broadcaster"));
        assert!(circuit.contains("con"));
        assert!(!circuit.contains("sink"));
    }

    #[test]
    fn test_conjunction_memory_seeded_with_all_sources() {
        let circuit = Circuit::build(WIRING.lines()).unwrap();
        match &circuit.modules["con"] {
            Module::Conjunction(c) => {
                assert_eq!(c.memory.len(), 2);
                assert_eq!(c.memory["a"], Pulse::Low);
                assert_eq!(c.memory["b"], Pulse::Low);
            }
            other => panic!("expected conjunction, got {}", other.kind()),
        }
    }

    #[test]
    fn test_sources_of_covers_sinks() {
        let circuit = Circuit::build(WIRING.lines()).unwrap();
        assert_eq!(circuit.sources_of("sink"), ["con".to_string()]);
        assert_eq!(
            circuit.sources_of("con"),
            ["a".to_string(), "b".to_string()]
        );
        assert!(circuit.sources_of("nope").is_empty());
    }

    #[test]
    fn test_duplicate_module_is_an_error() {
        let err = Circuit::build(["broadcaster -> a", "%a -> b", "%a -> c"]).unwrap_err();
        assert!(matches!(err, PulserError::DuplicateModule { name } if name == "a"));
    }

    #[test]
    fn test_missing_broadcaster_fails_validation() {
        let err = Circuit::build(["%a -> b"]).unwrap_err();
        assert!(matches!(err, PulserError::MissingBroadcaster));
    }

    #[test]
    fn test_empty_wiring_fails_validation() {
        let err = Circuit::build(["# nothing here"]).unwrap_err();
        assert!(matches!(err, PulserError::EmptyCircuit));
    }
}
