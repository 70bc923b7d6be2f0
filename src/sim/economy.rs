//! Resource production, consumption, and trade-route drift

use rand::Rng;

use crate::sim::uniform_step;
use crate::world::civilization::Civilization;
use crate::world::map::TradeRoute;

/// Base food output per city, scaled up by agriculture technology
const FOOD_PER_CITY: f64 = 10.0;

/// Iron output per city
const IRON_PER_CITY: f64 = 5.0;

/// Gold output per unit of population
const GOLD_POP_DIVISOR: f64 = 10.0;

/// Food eaten per unit of population
const FOOD_POP_DIVISOR: f64 = 5.0;

/// Trade-route value bounds
const ROUTE_VALUE_MIN: i32 = 5;
const ROUTE_VALUE_MAX: i32 = 100;

/// Update every stockpile of a civilization for one year
///
/// Production rules exist for `food`, `gold`, and `iron`; any other
/// kind produces nothing. Only `food` is consumed. Amounts are clamped
/// at a zero floor and have no ceiling. Reads the pre-drift agriculture
/// level, so the resource pass must run before the technology pass.
pub fn update_resources(civ: &mut Civilization) {
    let num_cities = civ.cities.len() as f64;
    let gold_income: f64 = civ
        .cities
        .iter()
        .map(|c| c.population as f64 / GOLD_POP_DIVISOR)
        .sum();
    let food_demand: f64 = civ
        .cities
        .iter()
        .map(|c| c.population as f64 / FOOD_POP_DIVISOR)
        .sum();
    let farm_yield = num_cities * FOOD_PER_CITY * (1.0 + civ.technology.agriculture / 100.0);

    for resource in &mut civ.resources {
        let production = match resource.kind.as_str() {
            "food" => farm_yield,
            "gold" => gold_income,
            "iron" => num_cities * IRON_PER_CITY,
            _ => 0.0,
        };

        let consumption = match resource.kind.as_str() {
            "food" => food_demand,
            _ => 0.0,
        };

        resource.amount = (resource.amount + production - consumption).max(0.0);
    }
}

/// Perturb every trade route's value by a uniform integer step
pub fn perturb_trade_routes<R: Rng>(routes: &mut [TradeRoute], rng: &mut R) {
    for route in routes {
        route.value = (route.value + uniform_step(rng)).clamp(ROUTE_VALUE_MIN, ROUTE_VALUE_MAX);
    }
}
