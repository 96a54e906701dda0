//! Period resolution for the recurrence measurement.
//!
//! Given the press index at which each predecessor of a designated sink
//! first emitted high, the combined trigger period is the least common
//! multiple of those indices.
//!
//! This rests on an assumption the simulator cannot verify from a single
//! observation: that every predecessor emits high with a constant period
//! equal to its first-trigger index, with no phase offset. That holds for
//! networks shaped like independent binary-counter cascades feeding a
//! final conjunction, and for nothing more general. Callers who cannot
//! vouch for their wiring should enable
//! [`PeriodMeasurement::with_confirmation`], which observes a second
//! recurrence per predecessor and rejects any that does not repeat at
//! its first-trigger interval.

use std::collections::HashMap;

use crate::error::{PulserError, Result};

use super::analyzer::Analyzer;
use super::propagator::Propagator;
use super::DEFAULT_MAX_PRESSES;

/// Greatest common divisor.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        0
    } else {
        a / gcd(a, b) * b
    }
}

/// Combine per-module first-trigger indices into one period via LCM.
///
/// An empty map yields 1, the LCM identity.
pub fn resolve_period(first_triggers: &HashMap<String, u64>) -> u64 {
    first_triggers.values().fold(1, |acc, &t| lcm(acc, t))
}

/// Driver for the periodicity scenario: arm one high-watcher per
/// predecessor of the sink, press until every watcher has fired, and
/// resolve the combined period.
#[derive(Debug, Clone)]
pub struct PeriodMeasurement {
    /// Press budget before giving up
    pub max_presses: u64,
    /// Require a second recurrence per predecessor and check its interval
    pub confirm_recurrence: bool,
}

impl Default for PeriodMeasurement {
    fn default() -> Self {
        Self {
            max_presses: DEFAULT_MAX_PRESSES,
            confirm_recurrence: false,
        }
    }
}

impl PeriodMeasurement {
    /// Create a measurement with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the press budget.
    pub fn with_max_presses(mut self, max_presses: u64) -> Self {
        self.max_presses = max_presses;
        self
    }

    /// Enable or disable the recurrence confirmation pass.
    pub fn with_confirmation(mut self, confirm: bool) -> Self {
        self.confirm_recurrence = confirm;
        self
    }

    /// Run the measurement against `predecessors`, the modules that wire
    /// directly into the designated sink.
    ///
    /// The predecessor set is a structural property the caller supplies
    /// (see `Circuit::sources_of`); the propagator does not infer it.
    pub fn measure(&self, propagator: &mut Propagator, predecessors: &[String]) -> Result<u64> {
        let mut analyzer = Analyzer::new();
        analyzer.watch_high(predecessors.iter().cloned());

        let needed = if self.confirm_recurrence { 2 } else { 1 };
        while !analyzer.all_triggered(needed) {
            if analyzer.presses() >= self.max_presses {
                return Err(PulserError::PressLimitExceeded {
                    presses: analyzer.presses(),
                });
            }
            propagator.press(Some(&mut analyzer))?;
        }

        if self.confirm_recurrence {
            for name in predecessors {
                let triggers = analyzer.triggers_of(name);
                let (first, interval) = (triggers[0], triggers[1] - triggers[0]);
                if interval != first {
                    return Err(PulserError::AperiodicPredecessor {
                        name: name.clone(),
                        first,
                        interval,
                    });
                }
            }
        }

        Ok(resolve_period(&analyzer.first_triggers()))
    }
}
