//! World model - the simulated state and its seed data

pub mod civilization;
pub mod events;
pub mod map;
pub mod seed;
pub mod state;

pub use civilization::{City, Civilization, Relation, Resource, Technology};
pub use events::{Event, EventKind, EventLog, MAX_EVENTS};
pub use map::{ResourceNode, TradeRoute};
pub use seed::initial_world;
pub use state::WorldState;
