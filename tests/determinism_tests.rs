//! Deterministic replay and scripted-draw scenarios
//!
//! The year step's randomness is an injected source, so a fixed seed
//! replays bit-for-bit and a scripted source can force individual
//! transition draws. The scripted source encodes each intended
//! unit-interval draw as the u64 the standard f64 sampler decodes (top
//! 53 bits of one `next_u64` call), and panics if the step consumes
//! more draws than the scenario scripted.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

use thraxa::core::types::CivId;
use thraxa::sim::advance;
use thraxa::world::{initial_world, EventKind};

/// Random source replaying a fixed sequence of unit-interval draws
struct ScriptedDraws {
    draws: VecDeque<f64>,
}

impl ScriptedDraws {
    fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }

    fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RngCore for ScriptedDraws {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let draw = self.draws.pop_front().expect("draw script exhausted");
        ((draw * (1u64 << 53) as f64) as u64) << 11
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// ============================================================================
// Seeded Replay
// ============================================================================

#[test]
fn test_same_seed_replays_bit_identical() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(42);
    let mut rng_b = ChaCha8Rng::seed_from_u64(42);
    let mut world_a = initial_world();
    let mut world_b = initial_world();

    for _ in 0..100 {
        world_a = advance(&world_a, &mut rng_a);
        world_b = advance(&world_b, &mut rng_b);
        assert_eq!(world_a, world_b);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng_a = ChaCha8Rng::seed_from_u64(1);
    let mut rng_b = ChaCha8Rng::seed_from_u64(2);
    let mut world_a = initial_world();
    let mut world_b = initial_world();

    for _ in 0..20 {
        world_a = advance(&world_a, &mut rng_a);
        world_b = advance(&world_b, &mut rng_b);
    }

    assert_ne!(world_a, world_b);
}

// ============================================================================
// Scripted Scenarios
// ============================================================================

/// Neutral draw: zero trust/route delta, +5% growth, mid tech gain
const MID: f64 = 0.5;

#[test]
fn test_forced_war_scenario() {
    let mut world = initial_world();
    world
        .civilizations[0]
        .relations
        .get_mut(&CivId::new("civ2"))
        .unwrap()
        .trust = 10;

    // Azurians: 2 city draws, 4 tech draws, trust delta, war check (fires).
    // Crimsonites: 2 city, 4 tech, trust delta (40 - no transition guard holds).
    // Then one draw per trade route.
    let mut rng = ScriptedDraws::new(&[
        MID, MID, // Azuria, Bluehaven growth
        MID, MID, MID, MID, // Azurian technology
        MID,  // trust delta 0, stays 10
        0.0,  // war check, below 0.10
        MID, MID, // Crimson Peak, Redfort growth
        MID, MID, MID, MID, // Crimsonite technology
        MID, // trust delta 0, stays 40
        MID, MID, // trade routes
    ]);

    let next = advance(&world, &mut rng);
    assert_eq!(rng.remaining(), 0);

    let rel = &next.civilizations[0].relations[&CivId::new("civ2")];
    assert!(rel.war_status);
    assert!(!rel.alliance);

    assert_eq!(next.events.len(), 1);
    let event = &next.events.entries()[0];
    assert_eq!(event.kind, EventKind::WarDeclared);
    assert_eq!(event.year, 2);
    assert!(event.description.contains("Azurians"));
    assert!(event.description.contains("Crimsonites"));
    assert_eq!(event.description, "Azurians declared war on Crimsonites!");
}

#[test]
fn test_forced_war_scenario_arithmetic() {
    // Same script as the forced-war scenario; pins down the deterministic
    // arithmetic of the non-random phases under all-0.5 draws.
    let mut world = initial_world();
    world
        .civilizations[0]
        .relations
        .get_mut(&CivId::new("civ2"))
        .unwrap()
        .trust = 10;

    let mut rng = ScriptedDraws::new(&[
        MID, MID, MID, MID, MID, MID, MID, 0.0, // Azurians
        MID, MID, MID, MID, MID, MID, MID, // Crimsonites
        MID, MID, // routes
    ]);

    let next = advance(&world, &mut rng);
    assert_eq!(rng.remaining(), 0);

    // Growth floors +5%: 100 -> 105, 80 -> 84, 120 -> 126, 90 -> 94
    let pops: Vec<u64> = next
        .civilizations
        .iter()
        .flat_map(|c| c.cities.iter().map(|city| city.population))
        .collect();
    assert_eq!(pops, vec![105, 84, 126, 94]);

    // Azurian food: 500 + 2*10*1.1 - 189/5
    let food = next.civilizations[0].resource("food").unwrap().amount;
    assert!((food - (500.0 + 22.0 - 37.8)).abs() < 1e-9);
    let iron = next.civilizations[0].resource("iron").unwrap().amount;
    assert!((iron - 210.0).abs() < 1e-9);

    // Trade decays by floor(value * (0.9 + trust/500))
    let toward_crimsonites = &next.civilizations[0].relations[&CivId::new("civ2")];
    assert_eq!(toward_crimsonites.trade, 27.0); // floor(30 * 0.92)
    let toward_azurians = &next.civilizations[1].relations[&CivId::new("civ1")];
    assert_eq!(toward_azurians.trade, 29.0); // floor(30 * 0.98)

    // Zero-delta draws leave the routes where they were
    assert_eq!(next.trade_routes[0].value, 30);
    assert_eq!(next.trade_routes[1].value, 20);
}

#[test]
fn test_alliance_can_form_while_at_war() {
    // Formation reads trust and the alliance flag only; a relation still
    // at war can become allied, leaving both flags set at once.
    let mut world = initial_world();
    {
        let rel = world
            .civilizations[0]
            .relations
            .get_mut(&CivId::new("civ2"))
            .unwrap();
        rel.trust = 85;
        rel.war_status = true;
        rel.alliance = false;
    }

    let mut rng = ScriptedDraws::new(&[
        MID, MID, // Azurian growth
        MID, MID, MID, MID, // Azurian technology
        MID, // trust delta 0, stays 85
        0.9, // peace check fails, war continues
        0.1, // alliance check succeeds
        MID, MID, // Crimsonite growth
        MID, MID, MID, MID, // Crimsonite technology
        MID, // trust delta 0, stays 40
        MID, MID, // trade routes
    ]);

    let next = advance(&world, &mut rng);
    assert_eq!(rng.remaining(), 0);

    let rel = &next.civilizations[0].relations[&CivId::new("civ2")];
    assert!(rel.alliance, "alliance should have formed");
    assert!(rel.war_status, "war should still be in effect");

    assert_eq!(next.events.len(), 1);
    let event = &next.events.entries()[0];
    assert_eq!(event.kind, EventKind::AllianceFormed);
    assert_eq!(
        event.description,
        "Azurians formed an alliance with Crimsonites!"
    );
}

#[test]
fn test_transition_draws_skipped_when_guards_fail() {
    // Every relation sits in the dead band, so the only per-relation
    // draw is the trust fluctuation itself; scripting exactly that many
    // draws proves no transition check consumed randomness.
    let mut world = initial_world();
    for civ in &mut world.civilizations {
        for rel in civ.relations.values_mut() {
            rel.trust = 30;
        }
    }

    let mut rng = ScriptedDraws::new(&[
        MID, MID, MID, MID, MID, MID, MID, // Azurians: 2 cities + 4 tech + trust
        MID, MID, MID, MID, MID, MID, MID, // Crimsonites
        MID, MID, // routes
    ]);

    let next = advance(&world, &mut rng);
    assert_eq!(rng.remaining(), 0);
    assert!(next.events.is_empty());
}
