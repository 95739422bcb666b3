pub mod climate;
pub mod config;
pub mod continents;
pub mod features;
pub mod goodies;
pub mod heightmap;
pub mod resources;
pub mod rivers;
pub mod start_positions;
pub mod terrain;
pub mod wonders;

use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::MapError;
use crate::map::MapModel;

pub use config::{MapAge, MapOptions, MapSize, MapType};
pub use heightmap::HeightMap;

/// Fisher-Yates shuffle. All stage randomness goes through the one seeded
/// generator, so shuffles are part of the deterministic stream.
pub(crate) fn shuffle<T>(items: &mut [T], rng: &mut dyn RngCore) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Runs the full generation pipeline for one configuration.
///
/// The progress callback is invoked once per finished stage with a strictly
/// increasing fraction; the final call is exactly `(1.0, "ready")`.
pub struct MapGenerator {
    options: MapOptions,
}

impl MapGenerator {
    pub fn new(options: MapOptions) -> Self {
        MapGenerator { options }
    }

    pub fn generate(
        &self,
        mut progress: impl FnMut(f64, &str),
    ) -> Result<MapModel, MapError> {
        self.options.validate()?;
        progress(0.0, "start");

        let (width, height) = self.options.size.dimensions();
        let mut map = MapModel::new(width, height)?;
        let mut rng = SmallRng::seed_from_u64(self.options.seed);
        progress(0.1, "inited");

        let fields = terrain::generate_elevation(&mut map, &self.options, &mut rng)?;
        progress(0.3, "elevation");

        climate::generate_climate_zones(&mut map)?;
        progress(0.35, "climate");

        let distances = climate::coastal_distances(&map)?;
        climate::moderate_coastal_climate(&mut map, &distances)?;
        progress(0.4, "coastal");

        terrain::refine_terrain(&mut map, &fields, &self.options, &mut rng)?;
        terrain::blend_terrains(&mut map, &mut rng)?;
        progress(0.5, "terrain");

        resources::place_resources(&mut map, &mut rng)?;
        progress(0.6, "resources");

        rivers::place_rivers(&mut map, &self.options, &fields.elevation, &mut rng)?;
        progress(0.7, "rivers");

        // recompute on the refined terrain
        let distances = climate::coastal_distances(&map)?;
        features::place_features(&mut map, &distances, &mut rng)?;
        progress(0.8, "features");

        wonders::place_natural_wonders(&mut map, &mut rng)?;
        progress(0.83, "wonders");

        continents::identify_continents(&mut map)?;
        progress(0.86, "continents");

        continents::identify_oceans(&mut map)?;
        progress(0.9, "oceans");

        start_positions::choose_start_positions(&mut map, &self.options)?;
        progress(0.95, "start positions");

        goodies::place_goody_huts(&mut map, &mut rng)?;
        progress(0.99, "goody huts");

        progress(1.0, "ready");
        Ok(map)
    }
}

/// Generates a map with the given options and no progress reporting.
pub fn generate_world(options: &MapOptions) -> Result<MapModel, MapError> {
    MapGenerator::new(options.clone()).generate(|fraction, stage| {
        tracing::debug!("generation {:.0}%: {stage}", fraction * 100.0);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut items: Vec<i32> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<i32>>());
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_one() {
        let options = MapOptions {
            size: MapSize::Duel,
            ..MapOptions::default()
        };

        let mut fractions = Vec::new();
        MapGenerator::new(options)
            .generate(|fraction, _| fractions.push(fraction))
            .unwrap();

        assert_eq!(fractions.first(), Some(&0.0));
        assert_eq!(fractions.last(), Some(&1.0));
        for window in fractions.windows(2) {
            assert!(window[0] < window[1]);
        }
    }
}
