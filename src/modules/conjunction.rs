//! The conjunction module.

use std::collections::HashMap;

use crate::circuit::Pulse;

/// A module that remembers the last pulse received from each of its
/// inputs and emits low only when every remembered value is high
/// (a NAND over last-seen inputs).
///
/// The memory must be seeded with one low entry per inbound source
/// before the first pulse arrives; [`Conjunction::connect`] does this
/// once the full wiring is known. Seeding lazily during propagation
/// would under-populate the memory and corrupt the NAND.
#[derive(Debug, Clone)]
pub struct Conjunction {
    pub destinations: Vec<String>,
    /// Last pulse seen per inbound source
    pub memory: HashMap<String, Pulse>,
}

impl Conjunction {
    /// Create a new conjunction with an unconnected (empty) memory.
    pub fn new(destinations: Vec<String>) -> Self {
        Self {
            destinations,
            memory: HashMap::new(),
        }
    }

    /// Seed the memory with one low entry per inbound source.
    pub fn connect<I>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.memory = inputs.into_iter().map(|name| (name, Pulse::Low)).collect();
    }

    /// React to an incoming pulse. Always emits.
    pub fn send(&mut self, source: &str, pulse: Pulse) -> Pulse {
        debug_assert!(
            self.memory.contains_key(source),
            "conjunction received pulse from unconnected source '{source}'"
        );
        self.memory.insert(source.to_string(), pulse);

        let filled = self.memory.values().all(|p| p.is_high());
        if filled {
            Pulse::Low
        } else {
            Pulse::High
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(inputs: &[&str]) -> Conjunction {
        let mut c = Conjunction::new(vec!["out".to_string()]);
        c.connect(inputs.iter().map(|s| s.to_string()));
        c
    }

    #[test]
    fn test_connect_seeds_memory_low() {
        let c = connected(&["a", "b"]);
        assert_eq!(c.memory.len(), 2);
        assert!(c.memory.values().all(|p| *p == Pulse::Low));
    }

    #[test]
    fn test_emits_high_until_all_inputs_high() {
        let mut c = connected(&["a", "b"]);
        assert_eq!(c.send("a", Pulse::High), Pulse::High);
        assert_eq!(c.send("b", Pulse::High), Pulse::Low);
    }

    #[test]
    fn test_one_stale_input_flips_output_back_high() {
        let mut c = connected(&["a", "b"]);
        c.send("a", Pulse::High);
        c.send("b", Pulse::High);
        assert_eq!(c.send("a", Pulse::Low), Pulse::High);
    }

    #[test]
    fn test_single_input_acts_as_inverter() {
        let mut c = connected(&["a"]);
        assert_eq!(c.send("a", Pulse::High), Pulse::Low);
        assert_eq!(c.send("a", Pulse::Low), Pulse::High);
    }
}
