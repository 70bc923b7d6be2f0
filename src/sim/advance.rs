//! The one-year world step

use rand::Rng;
use std::collections::BTreeMap;

use crate::core::types::CivId;
use crate::sim::{diplomacy, economy, population, technology};
use crate::world::state::WorldState;

/// Advance the world by one simulated year
///
/// Pure with respect to its inputs: the given state is never mutated
/// and the result is an independent structural copy. All randomness
/// comes from the injected source, so a seeded generator replays a run
/// bit-for-bit. Total over well-formed states - no errors, no I/O, no
/// logging.
///
/// Phases, in order:
/// 1. year counter +1
/// 2. per civilization (sequence order): city growth, resource
///    production/consumption, technology drift, relation updates
/// 3. trade-route drift
/// 4. event-log cap enforcement
///
/// Draw order is part of the contract: one draw per city, four per
/// civilization for technology, then per relation (key order) one trust
/// draw followed by the transition draws - each taken only when the
/// transition's non-random guards hold - and finally one draw per trade
/// route.
pub fn advance<R: Rng>(state: &WorldState, rng: &mut R) -> WorldState {
    let mut next = state.clone();
    next.current_year += 1;

    // Names resolve against the step's input; they never change mid-step
    let names: BTreeMap<CivId, String> = state
        .civilizations
        .iter()
        .map(|c| (c.id.clone(), c.name.clone()))
        .collect();

    let WorldState {
        current_year,
        civilizations,
        trade_routes,
        events,
        ..
    } = &mut next;

    for civ in civilizations.iter_mut() {
        population::grow_cities(civ, rng);
        economy::update_resources(civ);
        technology::advance_technology(&mut civ.technology, rng);
        diplomacy::update_relations(civ, &names, *current_year, events, rng);
    }

    economy::perturb_trade_routes(trade_routes, rng);
    events.enforce_cap();

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::seed::initial_world;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_year_increments_by_exactly_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let world = initial_world();
        let next = advance(&world, &mut rng);
        assert_eq!(next.current_year, world.current_year + 1);
    }

    #[test]
    fn test_input_state_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let world = initial_world();
        let before = world.clone();
        let _ = advance(&world, &mut rng);
        assert_eq!(world, before);
    }

    #[test]
    fn test_resource_nodes_are_static() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut world = initial_world();
        let nodes = world.resource_nodes.clone();
        for _ in 0..50 {
            world = advance(&world, &mut rng);
        }
        assert_eq!(world.resource_nodes, nodes);
    }

    #[test]
    fn test_long_run_respects_all_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let mut world = initial_world();

        for _ in 0..300 {
            world = advance(&world, &mut rng);

            for civ in &world.civilizations {
                for resource in &civ.resources {
                    assert!(resource.amount >= 0.0);
                }
                for rel in civ.relations.values() {
                    assert!((0..=100).contains(&rel.trust));
                    assert!(rel.trade >= 0.0);
                }
            }
            for route in &world.trade_routes {
                assert!((5..=100).contains(&route.value));
            }
            assert!(world.events.len() <= crate::world::events::MAX_EVENTS);
        }
    }
}
