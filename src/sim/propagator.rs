//! The press loop.

use std::collections::VecDeque;

use crate::circuit::{Circuit, Pulse, BROADCASTER, BUTTON};
use crate::error::{PulserError, Result};

use super::analyzer::Analyzer;
use super::DEFAULT_MAX_EVENTS;

/// Configuration for the propagator.
#[derive(Debug, Clone)]
pub struct PropagatorConfig {
    /// Event cap per press. A well-formed network always quiesces, so
    /// hitting the cap means an unsupported wiring shape.
    pub max_events: usize,
}

impl Default for PropagatorConfig {
    fn default() -> Self {
        Self {
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

impl PropagatorConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-press event cap.
    pub fn with_max_events(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }
}

/// One in-flight pulse: `source` sent `pulse` towards `destination`.
/// Queue-only; never persisted beyond the press that produced it.
#[derive(Debug, Clone)]
struct Event {
    source: String,
    pulse: Pulse,
    destination: String,
}

/// Executes button presses against a circuit it exclusively owns.
///
/// A press is one uninterrupted drain of a FIFO event queue: the seed
/// event goes in, and every module emission is appended behind whatever
/// is already queued. The FIFO order is a correctness requirement, not
/// an optimization: a conjunction's NAND reads whichever inputs were
/// most recent at dispatch time, so sibling events at the same depth
/// must be delivered in the order they were generated.
pub struct Propagator {
    circuit: Circuit,
    queue: VecDeque<Event>,
    config: PropagatorConfig,
}

impl Propagator {
    /// Create a propagator with the default configuration.
    pub fn new(circuit: Circuit) -> Self {
        Self::with_config(circuit, PropagatorConfig::default())
    }

    /// Create a propagator with a custom configuration.
    pub fn with_config(circuit: Circuit, config: PropagatorConfig) -> Self {
        Self {
            circuit,
            queue: VecDeque::new(),
            config,
        }
    }

    /// Press the button once and propagate to quiescence.
    ///
    /// Module state persists into the next press. When an analyzer is
    /// given, every dispatched event is recorded, the seed included.
    pub fn press(&mut self, mut analyzer: Option<&mut Analyzer>) -> Result<()> {
        if let Some(a) = analyzer.as_deref_mut() {
            a.begin_press();
        }

        self.queue.push_back(Event {
            source: BUTTON.to_string(),
            pulse: Pulse::Low,
            destination: BROADCASTER.to_string(),
        });

        let result = self.drain(analyzer);
        if result.is_err() {
            // Leave no half-press behind for the next call
            self.queue.clear();
        }
        result
    }

    fn drain(&mut self, mut analyzer: Option<&mut Analyzer>) -> Result<()> {
        let mut events = 0usize;

        while let Some(event) = self.queue.pop_front() {
            events += 1;
            if events > self.config.max_events {
                return Err(PulserError::PropagationOverflow { events });
            }

            let Event {
                source,
                pulse,
                destination,
            } = event;
            log::trace!("{source} -{pulse}-> {destination}");

            if let Some(a) = analyzer.as_deref_mut() {
                a.record(&source, pulse);
            }

            let Some(module) = self.circuit.modules.get_mut(&destination) else {
                // Unmodeled sink: the pulse is absorbed
                continue;
            };

            let Some(out) = module.send(&source, pulse)? else {
                continue;
            };
            for dest in module.destinations() {
                self.queue.push_back(Event {
                    source: destination.clone(),
                    pulse: out,
                    destination: dest.clone(),
                });
            }
        }

        log::debug!("press quiesced after {events} events");
        Ok(())
    }

    /// Run a fixed number of presses with counting enabled and return
    /// the accumulated `(low, high)` totals.
    pub fn count_pulses(&mut self, presses: usize) -> Result<(u64, u64)> {
        let mut analyzer = Analyzer::new();
        for _ in 0..presses {
            self.press(Some(&mut analyzer))?;
        }
        Ok(analyzer.counts())
    }

    /// Get a reference to the circuit.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Consume the propagator and recover the circuit.
    pub fn into_circuit(self) -> Circuit {
        self.circuit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const INVERTER_LOOP: &str = "\
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a";

    const TWO_CHAIN: &str = "\
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output";

    fn propagator(wiring: &str) -> Propagator {
        Propagator::new(Circuit::build(wiring.lines()).unwrap())
    }

    #[test]
    fn test_single_press_counts_include_seed() {
        let mut p = propagator(INVERTER_LOOP);
        let mut analyzer = Analyzer::new();
        p.press(Some(&mut analyzer)).unwrap();
        assert_eq!(analyzer.counts(), (8, 4));
    }

    #[test]
    fn test_four_presses_of_two_chain_network() {
        let mut p = propagator(TWO_CHAIN);
        assert_eq!(p.count_pulses(4).unwrap(), (17, 11));
    }

    #[test]
    fn test_thousand_press_product() {
        let mut p = propagator(TWO_CHAIN);
        let (low, high) = p.count_pulses(1000).unwrap();
        assert_eq!(low * high, 11_687_500);
    }

    #[test]
    fn test_pulses_to_sinks_are_absorbed() {
        let mut p = propagator("broadcaster -> nowhere");
        let mut analyzer = Analyzer::new();
        p.press(Some(&mut analyzer)).unwrap();
        assert_eq!(analyzer.counts(), (2, 0));
    }

    #[test]
    fn test_module_state_persists_across_presses() {
        let mut p = propagator(TWO_CHAIN);
        let mut analyzer = Analyzer::new();
        // Presses alternate between two event shapes; identical counts
        // every press would mean state was being reset.
        p.press(Some(&mut analyzer)).unwrap();
        assert_eq!(analyzer.counts(), (4, 4));
        p.press(Some(&mut analyzer)).unwrap();
        assert_eq!(analyzer.counts(), (8, 6));
    }

    #[test]
    fn test_press_without_analyzer_runs() {
        let mut p = propagator(INVERTER_LOOP);
        p.press(None).unwrap();
    }

    #[test]
    fn test_wiring_into_broadcaster_is_a_contract_violation() {
        let mut p = propagator("broadcaster -> a\n%a -> broadcaster");
        let err = p.press(None).unwrap_err();
        assert!(matches!(err, PulserError::ContractViolation { .. }));
    }

    #[test]
    fn test_event_cap_aborts_the_press() {
        let circuit = Circuit::build(INVERTER_LOOP.lines()).unwrap();
        let config = PropagatorConfig::new().with_max_events(3);
        let mut p = Propagator::with_config(circuit, config);
        let err = p.press(None).unwrap_err();
        assert!(matches!(err, PulserError::PropagationOverflow { .. }));
        // The aborted press must not leak events into the next one
        assert!(p.queue.is_empty());
    }

    proptest! {
        #[test]
        fn press_sequences_are_deterministic(presses in 1usize..50) {
            let mut first = propagator(TWO_CHAIN);
            let mut second = propagator(TWO_CHAIN);
            prop_assert_eq!(
                first.count_pulses(presses).unwrap(),
                second.count_pulses(presses).unwrap()
            );
        }
    }
}
