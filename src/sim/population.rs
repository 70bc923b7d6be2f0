//! City population growth

use rand::Rng;

use crate::world::civilization::Civilization;

/// Maximum yearly growth noise (+10%)
const GROWTH_NOISE_MAX: f64 = 0.1;

/// Grow every city of a civilization
///
/// Geometric growth with uniform noise: each city draws its own factor
/// in [1.0, 1.1) and the result is floored back to a whole population.
/// There is no cap and no decline path; unbounded long-run growth is an
/// accepted property of the model.
pub fn grow_cities<R: Rng>(civ: &mut Civilization, rng: &mut R) {
    for city in &mut civ.cities {
        let factor = 1.0 + rng.gen::<f64>() * GROWTH_NOISE_MAX;
        city.population = (city.population as f64 * factor).floor() as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::seed::initial_world;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_population_never_shrinks() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut civ = initial_world().civilizations[0].clone();
        let before: Vec<u64> = civ.cities.iter().map(|c| c.population).collect();

        grow_cities(&mut civ, &mut rng);

        for (city, old) in civ.cities.iter().zip(before) {
            assert!(city.population >= old);
            assert!(city.population as f64 <= old as f64 * (1.0 + GROWTH_NOISE_MAX));
        }
    }

    #[test]
    fn test_empty_city_stays_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut civ = initial_world().civilizations[0].clone();
        civ.cities[0].population = 0;

        grow_cities(&mut civ, &mut rng);

        assert_eq!(civ.cities[0].population, 0);
    }

    #[test]
    fn test_growth_compounds_over_years() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut civ = initial_world().civilizations[0].clone();
        let start = civ.total_population();

        for _ in 0..50 {
            grow_cities(&mut civ, &mut rng);
        }

        assert!(civ.total_population() > start);
    }
}
