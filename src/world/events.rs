//! Events and the bounded history log

use serde::{Deserialize, Serialize};

use crate::core::types::Year;

/// Maximum number of events retained in the log
pub const MAX_EVENTS: usize = 10;

/// What kind of diplomatic turn an event records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    WarDeclared,
    PeaceMade,
    AllianceFormed,
    AllianceEnded,
}

/// A logged event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub year: Year,
    pub kind: EventKind,
    pub description: String,
}

/// The event history, capped at the [`MAX_EVENTS`] most recent entries
///
/// The cap is enforced only after appends: a log sitting at exactly the
/// cap keeps its oldest entry until a new append pushes the length past
/// the limit, and trimming always removes from the front.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    entries: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event without trimming; call [`EventLog::enforce_cap`]
    /// once all of a step's appends are done.
    pub fn record(&mut self, kind: EventKind, year: Year, description: String) {
        self.entries.push(Event {
            year,
            kind,
            description,
        });
    }

    /// Drop oldest entries until the log fits the cap
    pub fn enforce_cap(&mut self) {
        if self.entries.len() > MAX_EVENTS {
            let excess = self.entries.len() - MAX_EVENTS;
            self.entries.drain(..excess);
        }
    }

    pub fn entries(&self) -> &[Event] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn events_for_year(&self, year: Year) -> impl Iterator<Item = &Event> {
        self.entries.iter().filter(move |e| e.year == year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_log(n: usize) -> EventLog {
        let mut log = EventLog::new();
        for i in 0..n {
            log.record(EventKind::WarDeclared, i as Year, format!("event {}", i));
        }
        log
    }

    #[test]
    fn test_cap_not_enforced_without_overflow() {
        let mut log = filled_log(MAX_EVENTS);
        log.enforce_cap();
        assert_eq!(log.len(), MAX_EVENTS);
        // Oldest survives when nothing pushed past the cap
        assert_eq!(log.entries()[0].description, "event 0");
    }

    #[test]
    fn test_cap_trims_from_the_front() {
        let mut log = filled_log(MAX_EVENTS + 3);
        log.enforce_cap();
        assert_eq!(log.len(), MAX_EVENTS);
        assert_eq!(log.entries()[0].description, "event 3");
        assert_eq!(
            log.entries().last().unwrap().description,
            format!("event {}", MAX_EVENTS + 2)
        );
    }

    #[test]
    fn test_events_for_year() {
        let mut log = EventLog::new();
        log.record(EventKind::WarDeclared, 5, "war".into());
        log.record(EventKind::PeaceMade, 6, "peace".into());
        assert_eq!(log.events_for_year(6).count(), 1);
        assert_eq!(log.events_for_year(7).count(), 0);
    }
}
