//! Civilization - cities, stockpiles, technology, and standing with others

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::types::{CityId, CivId};

/// A civilization and everything it owns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Civilization {
    pub id: CivId,
    pub name: String,
    /// Display color (hex string, passed through untouched)
    pub color: String,
    pub cities: Vec<City>,
    /// One entry per resource kind this civilization stockpiles
    pub resources: Vec<Resource>,
    pub technology: Technology,
    /// This civilization's directional view of each other civilization.
    ///
    /// Asymmetric by design: A's record of B is independent storage from
    /// B's record of A, and the two can diverge after a step. BTreeMap
    /// keeps iteration order stable across platforms so a seeded random
    /// source always consumes draws in the same sequence.
    pub relations: BTreeMap<CivId, Relation>,
}

impl Civilization {
    /// Look up a stockpile entry by resource kind
    pub fn resource(&self, kind: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.kind == kind)
    }

    /// Total population across all cities
    pub fn total_population(&self) -> u64 {
        self.cities.iter().map(|c| c.population).sum()
    }
}

/// A settlement on the map grid
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub x: i32,
    pub y: i32,
    /// Non-negative; grows geometrically with noise, uncapped
    pub population: u64,
}

/// A stockpiled resource
///
/// `kind` is an open string, not a closed enum: the seed data uses
/// `food`, `gold`, and `iron`, but unknown kinds flow through the step
/// unchanged (they simply have no production rule).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub kind: String,
    /// Clamped at a zero floor, no ceiling
    pub amount: f64,
}

/// Technology levels, all non-negative and non-decreasing under the step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub agriculture: f64,
    pub military: f64,
    pub culture: f64,
    pub science: f64,
}

/// One civilization's standing toward another
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    /// Clamped to [0, 100]
    pub trust: i32,
    /// Non-negative; decays toward 90% each year, modulated up by trust
    pub trade: f64,
    pub alliance: bool,
    pub war_status: bool,
}

impl Relation {
    pub fn new(trust: i32, trade: f64) -> Self {
        Self {
            trust,
            trade,
            alliance: false,
            war_status: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_civ() -> Civilization {
        Civilization {
            id: CivId::new("civ1"),
            name: "Azurians".into(),
            color: "#3b82f6".into(),
            cities: vec![
                City {
                    id: CityId::new("city1"),
                    name: "Azuria".into(),
                    x: 2,
                    y: 2,
                    population: 100,
                },
                City {
                    id: CityId::new("city2"),
                    name: "Bluehaven".into(),
                    x: 3,
                    y: 1,
                    population: 80,
                },
            ],
            resources: vec![Resource {
                id: "res1".into(),
                kind: "food".into(),
                amount: 500.0,
            }],
            technology: Technology {
                agriculture: 10.0,
                military: 5.0,
                culture: 8.0,
                science: 12.0,
            },
            relations: BTreeMap::new(),
        }
    }

    #[test]
    fn test_resource_lookup_by_kind() {
        let civ = sample_civ();
        assert_eq!(civ.resource("food").map(|r| r.amount), Some(500.0));
        assert!(civ.resource("obsidian").is_none());
    }

    #[test]
    fn test_total_population() {
        assert_eq!(sample_civ().total_population(), 180);
    }

    #[test]
    fn test_relation_starts_at_peace() {
        let rel = Relation::new(50, 30.0);
        assert!(!rel.alliance);
        assert!(!rel.war_status);
    }
}
