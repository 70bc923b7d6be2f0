//! Technology drift driven by science

use rand::Rng;

use crate::world::civilization::Technology;

/// Science level per research point
const SCIENCE_DIVISOR: f64 = 10.0;

/// Advance technology for one year
///
/// Research points are derived from the science level once, up front;
/// agriculture, military, and culture each take an independent draw of
/// up to one full point, science itself half that. Every increment is
/// non-negative, so no field ever decreases here.
pub fn advance_technology<R: Rng>(tech: &mut Technology, rng: &mut R) {
    let science_points = tech.science / SCIENCE_DIVISOR;
    tech.agriculture += rng.gen::<f64>() * science_points;
    tech.military += rng.gen::<f64>() * science_points;
    tech.culture += rng.gen::<f64>() * science_points;
    tech.science += rng.gen::<f64>() * science_points / 2.0;
}
