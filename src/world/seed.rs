//! The fixed starting world
//!
//! Two rival civilizations on a small grid. Resetting the simulation
//! always returns to exactly this literal.

use std::collections::BTreeMap;

use crate::core::types::{CityId, CivId, NodeId, RouteId};
use crate::world::civilization::{City, Civilization, Relation, Resource, Technology};
use crate::world::events::EventLog;
use crate::world::map::{ResourceNode, TradeRoute};
use crate::world::state::WorldState;

/// Build the starting world at year 1
pub fn initial_world() -> WorldState {
    WorldState {
        current_year: 1,
        civilizations: vec![azurians(), crimsonites()],
        resource_nodes: resource_nodes(),
        trade_routes: trade_routes(),
        events: EventLog::new(),
    }
}

fn azurians() -> Civilization {
    let mut relations = BTreeMap::new();
    relations.insert(CivId::new("civ2"), Relation::new(50, 30.0));

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
        resources: vec![
            Resource {
                id: "res1".into(),
                kind: "food".into(),
                amount: 500.0,
            },
            Resource {
                id: "res2".into(),
                kind: "gold".into(),
                amount: 300.0,
            },
            Resource {
                id: "res3".into(),
                kind: "iron".into(),
                amount: 200.0,
            },
        ],
        technology: Technology {
            agriculture: 10.0,
            military: 5.0,
            culture: 8.0,
            science: 12.0,
        },
        relations,
    }
}

fn crimsonites() -> Civilization {
    let mut relations = BTreeMap::new();
    relations.insert(CivId::new("civ1"), Relation::new(40, 30.0));

    Civilization {
        id: CivId::new("civ2"),
        name: "Crimsonites".into(),
        color: "#ef4444".into(),
        cities: vec![
            City {
                id: CityId::new("city3"),
                name: "Crimson Peak".into(),
                x: 7,
                y: 7,
                population: 120,
            },
            City {
                id: CityId::new("city4"),
                name: "Redfort".into(),
                x: 6,
                y: 8,
                population: 90,
            },
        ],
        resources: vec![
            Resource {
                id: "res4".into(),
                kind: "food".into(),
                amount: 400.0,
            },
            Resource {
                id: "res5".into(),
                kind: "gold".into(),
                amount: 350.0,
            },
            Resource {
                id: "res6".into(),
                kind: "iron".into(),
                amount: 250.0,
            },
        ],
        technology: Technology {
            agriculture: 8.0,
            military: 15.0,
            culture: 6.0,
            science: 10.0,
        },
        relations,
    }
}

fn resource_nodes() -> Vec<ResourceNode> {
    [
        ("node1", "food", 1, 3),
        ("node2", "gold", 4, 4),
        ("node3", "iron", 8, 2),
        ("node4", "food", 6, 6),
        ("node5", "gold", 2, 7),
    ]
    .into_iter()
    .map(|(id, kind, x, y)| ResourceNode {
        id: NodeId::new(id),
        kind: kind.into(),
        x,
        y,
        amount: 100.0,
    })
    .collect()
}

fn trade_routes() -> Vec<TradeRoute> {
    vec![
        TradeRoute {
            id: RouteId::new("trade1"),
            from: CityId::new("city1"),
            to: CityId::new("city3"),
            value: 30,
            resource_kind: "food".into(),
        },
        TradeRoute {
            id: RouteId::new("trade2"),
            from: CityId::new("city2"),
            to: CityId::new("city4"),
            value: 20,
            resource_kind: "gold".into(),
        },
    ]
}
