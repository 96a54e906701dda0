//! Event observation: pulse counting and watch triggers.

use std::collections::{HashMap, HashSet};

use crate::circuit::Pulse;

/// Observer attached to a press: counts low/high events and records,
/// for a watch set of modules, the press indices at which each watched
/// module first emits a given pulse.
///
/// Counts accumulate across presses. Watchers fire at most once per
/// press (they are re-armed when the next press begins), and every
/// firing press index is recorded; the first one per module is the
/// value the period resolver consumes.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    low: u64,
    high: u64,
    presses: u64,
    /// Pulse to watch for, per sending module
    watch: HashMap<String, Pulse>,
    /// Watchers that already fired during the current press
    fired: HashSet<String>,
    /// Press indices at which each watched module emitted its pulse
    triggers: HashMap<String, Vec<u64>>,
}

impl Analyzer {
    /// Create an analyzer with no watchers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Watch for `name` emitting `pulse`.
    pub fn arm(&mut self, name: impl Into<String>, pulse: Pulse) {
        self.watch.insert(name.into(), pulse);
    }

    /// Watch every name in `names` for a high emission.
    pub fn watch_high<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.arm(name, Pulse::High);
        }
    }

    /// Accumulated `(low, high)` event counts.
    pub fn counts(&self) -> (u64, u64) {
        (self.low, self.high)
    }

    /// Number of presses observed so far.
    pub fn presses(&self) -> u64 {
        self.presses
    }

    /// First trigger press index per watched module that has fired.
    pub fn first_triggers(&self) -> HashMap<String, u64> {
        self.triggers
            .iter()
            .map(|(name, presses)| (name.clone(), presses[0]))
            .collect()
    }

    /// All press indices at which `name` fired, in order.
    pub fn triggers_of(&self, name: &str) -> &[u64] {
        self.triggers.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check whether every armed watcher has fired at least `min_count` times.
    pub fn all_triggered(&self, min_count: usize) -> bool {
        self.watch
            .keys()
            .all(|name| self.triggers_of(name).len() >= min_count)
    }

    /// Start observing a new press: bump the press index and re-arm watchers.
    pub(crate) fn begin_press(&mut self) {
        self.presses += 1;
        self.fired.clear();
    }

    /// Record one dispatched event.
    pub(crate) fn record(&mut self, source: &str, pulse: Pulse) {
        match pulse {
            Pulse::Low => self.low += 1,
            Pulse::High => self.high += 1,
        }

        if self.watch.get(source) == Some(&pulse) && self.fired.insert(source.to_string()) {
            self.triggers
                .entry(source.to_string())
                .or_default()
                .push(self.presses);
            log::debug!("watched module '{source}' emitted {pulse} at press {}", self.presses);
        }
    }
}
