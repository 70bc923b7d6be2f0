//! Simulation output and serialization

use serde::{Deserialize, Serialize};

use crate::world::state::WorldState;

/// Complete output of a finished run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationOutput {
    pub final_world: WorldState,
    pub statistics: SimulationStats,
}

/// Counters accumulated across a run
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub years_simulated: u32,
    pub simulation_time_ms: u64,
    pub events_recorded: u32,
    pub wars_declared: u32,
    pub peaces_made: u32,
    pub alliances_formed: u32,
    pub alliances_ended: u32,
}

impl SimulationOutput {
    pub fn new(final_world: WorldState, statistics: SimulationStats) -> Self {
        Self {
            final_world,
            statistics,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        let populations: Vec<String> = self
            .final_world
            .civilizations
            .iter()
            .map(|c| format!("{}: {}", c.name, c.total_population()))
            .collect();

        format!(
            "Simulated {} years in {}ms\n{} events, {} wars declared, {} peaces, {} alliances formed, {} ended\nYear {} populations - {}",
            self.statistics.years_simulated,
            self.statistics.simulation_time_ms,
            self.statistics.events_recorded,
            self.statistics.wars_declared,
            self.statistics.peaces_made,
            self.statistics.alliances_formed,
            self.statistics.alliances_ended,
            self.final_world.current_year,
            populations.join(", "),
        )
    }
}
