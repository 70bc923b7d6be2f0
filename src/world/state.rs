//! WorldState - the single root container for the simulated world

use serde::{Deserialize, Serialize};

use crate::core::types::{CivId, Year};
use crate::world::civilization::Civilization;
use crate::world::events::EventLog;
use crate::world::map::{ResourceNode, TradeRoute};

/// The complete world at a given year
///
/// Every other entity is owned by exactly one parent reached through
/// this root; there is no shared mutable ownership and no cycles. The
/// year step produces a fresh `WorldState` value (structural copy via
/// `Clone`) rather than mutating in place, so callers must not expect
/// references into an old snapshot to observe new state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldState {
    pub current_year: Year,
    /// Insertion-ordered; the step processes civilizations in sequence
    pub civilizations: Vec<Civilization>,
    /// Static map deposits, never mutated by the step
    pub resource_nodes: Vec<ResourceNode>,
    pub trade_routes: Vec<TradeRoute>,
    pub events: EventLog,
}

impl WorldState {
    pub fn civilization(&self, id: &CivId) -> Option<&Civilization> {
        self.civilizations.iter().find(|c| &c.id == id)
    }

    pub fn civilization_name(&self, id: &CivId) -> Option<&str> {
        self.civilization(id).map(|c| c.name.as_str())
    }

    /// Total population across every civilization
    pub fn world_population(&self) -> u64 {
        self.civilizations.iter().map(|c| c.total_population()).sum()
    }
}
