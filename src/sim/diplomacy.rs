//! Diplomatic relations - trust drift, trade decay, and state transitions

use rand::Rng;
use std::collections::BTreeMap;

use crate::core::types::{CivId, Year};
use crate::sim::uniform_step;
use crate::world::civilization::Civilization;
use crate::world::events::{EventKind, EventLog};

const TRUST_MIN: i32 = 0;
const TRUST_MAX: i32 = 100;

/// Below this trust a war can break out
const WAR_TRUST_THRESHOLD: i32 = 20;
const WAR_CHANCE: f64 = 0.10;

/// Above this trust a war can end
const PEACE_TRUST_THRESHOLD: i32 = 40;
const PEACE_CHANCE: f64 = 0.20;

/// Above this trust an alliance can form
const ALLIANCE_TRUST_THRESHOLD: i32 = 75;
const ALLIANCE_CHANCE: f64 = 0.20;

/// Below this trust an alliance can dissolve
const DISSOLUTION_TRUST_THRESHOLD: i32 = 50;
const DISSOLUTION_CHANCE: f64 = 0.10;

/// Trade retains this fraction of its value each year before the trust bonus
const TRADE_DECAY: f64 = 0.9;

/// Trust contribution to trade retention (trust/500, up to +0.2)
const TRADE_TRUST_DIVISOR: f64 = 500.0;

/// Update one civilization's view of every other civilization
///
/// Each relation record is updated independently: trust takes a uniform
/// integer step and is clamped, trade decays modulated by the clamped
/// trust, then the four transition checks run in order - war, peace,
/// alliance formation, alliance dissolution - each drawing fresh
/// randomness only when its non-random guards hold. A declaration of
/// war clears the alliance flag; making peace leaves it untouched.
/// Formation reads trust and the current alliance flag only, so a
/// relation already at war can still become allied.
///
/// Fired transitions append one event each, naming both parties. A
/// relation keyed by an id with no matching civilization falls back to
/// the raw id in the event text.
pub fn update_relations<R: Rng>(
    civ: &mut Civilization,
    names: &BTreeMap<CivId, String>,
    year: Year,
    events: &mut EventLog,
    rng: &mut R,
) {
    let Civilization {
        name, relations, ..
    } = civ;

    for (other_id, rel) in relations.iter_mut() {
        let other_name = names
            .get(other_id)
            .map(String::as_str)
            .unwrap_or(other_id.as_str());

        rel.trust = (rel.trust + uniform_step(rng)).clamp(TRUST_MIN, TRUST_MAX);
        rel.trade = (rel.trade * (TRADE_DECAY + rel.trust as f64 / TRADE_TRUST_DIVISOR)).floor();

        if rel.trust < WAR_TRUST_THRESHOLD && !rel.war_status && rng.gen::<f64>() < WAR_CHANCE {
            rel.war_status = true;
            rel.alliance = false;
            events.record(
                EventKind::WarDeclared,
                year,
                format!("{} declared war on {}!", name, other_name),
            );
        }

        if rel.war_status && rel.trust > PEACE_TRUST_THRESHOLD && rng.gen::<f64>() < PEACE_CHANCE {
            rel.war_status = false;
            events.record(
                EventKind::PeaceMade,
                year,
                format!("{} made peace with {}.", name, other_name),
            );
        }

        if rel.trust > ALLIANCE_TRUST_THRESHOLD
            && !rel.alliance
            && rng.gen::<f64>() < ALLIANCE_CHANCE
        {
            rel.alliance = true;
            events.record(
                EventKind::AllianceFormed,
                year,
                format!("{} formed an alliance with {}!", name, other_name),
            );
        }

        if rel.alliance && rel.trust < DISSOLUTION_TRUST_THRESHOLD
            && rng.gen::<f64>() < DISSOLUTION_CHANCE
        {
            rel.alliance = false;
            events.record(
                EventKind::AllianceEnded,
                year,
                format!("The alliance between {} and {} has ended.", name, other_name),
            );
        }
    }
}
