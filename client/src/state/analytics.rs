//! Demo analytics panel state.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use std::collections::HashMap;

use payloads::EventKind;

#[derive(Clone, Debug, Default)]
pub struct AnalyticsState {
    /// Event currently awaiting an ack.
    pub pending: Option<EventKind>,
    pub acked: HashMap<EventKind, u32>,
    pub last_ack: Option<(EventKind, serde_json::Value)>,
}

impl AnalyticsState {
    /// Start sending `kind`. Returns `false` while another event is in flight.
    pub fn begin(&mut self, kind: EventKind) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(kind);
        true
    }

    pub fn record_ack(&mut self, kind: EventKind, ack: serde_json::Value) {
        self.pending = None;
        *self.acked.entry(kind).or_default() += 1;
        self.last_ack = Some((kind, ack));
    }

    pub fn fail(&mut self) {
        self.pending = None;
    }

    pub fn count(&self, kind: EventKind) -> u32 {
        self.acked.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.acked.values().sum()
    }
}
