//! Tick statistics
//!
//! Per-machine counters updated by the engine as it runs. Counters use
//! saturating arithmetic and can be reset between measurement windows.

/// Runtime counters for a single machine instance.
///
/// Child machines keep their own counters; nothing is aggregated across the
/// tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MachineStats {
    /// Total `run` calls
    pub ticks: u64,
    /// Events dequeued and delivered to a handler
    pub events_consumed: u32,
    /// Completed transitions (including self-transitions)
    pub transitions: u32,
    /// Redirect resolutions: exit overrides plus entry-chain hops
    pub redirects: u32,
    /// Events rejected because the queue was full
    pub dropped_events: u32,
}

impl MachineStats {
    pub(crate) fn record_tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    pub(crate) fn record_event(&mut self) {
        self.events_consumed = self.events_consumed.saturating_add(1);
    }

    pub(crate) fn record_transition(&mut self) {
        self.transitions = self.transitions.saturating_add(1);
    }

    pub(crate) fn record_redirect(&mut self) {
        self.redirects = self.redirects.saturating_add(1);
    }

    pub(crate) fn record_drop(&mut self) {
        self.dropped_events = self.dropped_events.saturating_add(1);
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
