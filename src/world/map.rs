//! Static map features - resource deposits and trade routes

use serde::{Deserialize, Serialize};

use crate::core::types::{CityId, NodeId, RouteId};

/// A resource deposit on the map
///
/// Deposits are scenery: the year step reads nothing from them and
/// never mutates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceNode {
    pub id: NodeId,
    pub kind: String,
    pub x: i32,
    pub y: i32,
    pub amount: f64,
}

/// A trade route between two cities
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeRoute {
    pub id: RouteId,
    pub from: CityId,
    pub to: CityId,
    /// Clamped to [5, 100]; perturbed by a uniform integer step each year
    pub value: i32,
    pub resource_kind: String,
}
