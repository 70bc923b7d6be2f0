//! Timer-driven simulation driver
//!
//! One writer, strictly sequential steps: the driver owns the current
//! snapshot and its random source, and each call to [`SimulationDriver::step_once`]
//! replaces the snapshot with the next year's. Pausing only stops the
//! scheduling of further ticks; a step in flight always completes.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

use crate::core::config::{MAX_SPEED, MIN_SPEED, SPEED_STEP};
use crate::output::{SimulationOutput, SimulationStats};
use crate::sim::advance;
use crate::world::events::EventKind;
use crate::world::seed::initial_world;
use crate::world::state::WorldState;

/// Interactive controller over the world snapshot
pub struct SimulationDriver {
    state: WorldState,
    rng: ChaCha8Rng,
    seed: u64,
    speed: f64,
    paused: bool,
    stats: SimulationStats,
}

impl SimulationDriver {
    /// Create a paused driver over the starting world
    pub fn new(seed: u64) -> Self {
        Self {
            state: initial_world(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            speed: 1.0,
            paused: true,
            stats: SimulationStats::default(),
        }
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        tracing::info!(paused = self.paused, "pause toggled");
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the tick rate multiplier, snapped to the 0.5 grid and
    /// clamped to [0.5, 3.0]
    pub fn set_speed(&mut self, speed: f64) {
        let snapped = (speed / SPEED_STEP).round() * SPEED_STEP;
        self.speed = snapped.clamp(MIN_SPEED, MAX_SPEED);
        tracing::info!(speed = self.speed, "speed changed");
    }

    /// Pacing interval between ticks: 1000/speed milliseconds
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed)
    }

    /// Advance one year and fold the year's events into the run stats
    pub fn step_once(&mut self) {
        self.state = advance(&self.state, &mut self.rng);
        self.stats.years_simulated += 1;

        for event in self.state.events.events_for_year(self.state.current_year) {
            self.stats.events_recorded += 1;
            match event.kind {
                EventKind::WarDeclared => self.stats.wars_declared += 1,
                EventKind::PeaceMade => self.stats.peaces_made += 1,
                EventKind::AllianceFormed => self.stats.alliances_formed += 1,
                EventKind::AllianceEnded => self.stats.alliances_ended += 1,
            }
            tracing::info!(year = event.year, "{}", event.description);
        }

        tracing::debug!(
            year = self.state.current_year,
            population = self.state.world_population(),
            "year complete"
        );
    }

    /// Run a batch of years back-to-back, without pacing
    pub fn run_years(&mut self, years: u32) {
        let start = Instant::now();
        for _ in 0..years {
            self.step_once();
        }
        self.stats.simulation_time_ms += start.elapsed().as_millis() as u64;
    }

    /// Restore the starting world, reseed the random source, and pause
    pub fn reset(&mut self) {
        self.state = initial_world();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.paused = true;
        self.stats = SimulationStats::default();
        tracing::info!(seed = self.seed, "simulation reset");
    }

    /// Snapshot the run into a serializable output record
    pub fn into_output(self) -> SimulationOutput {
        SimulationOutput::new(self.state, self.stats)
    }
}
