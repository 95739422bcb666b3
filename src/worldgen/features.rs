use rand::Rng;
use rand::RngCore;

use crate::error::MapError;
use crate::map::{FeatureType, MapModel, TerrainType};

use super::climate::distance_at;
use super::shuffle;

const REEF_CHANCE: f64 = 0.05;
const OASIS_CHANCE: f64 = 0.01;
const MARSH_CHANCE: f64 = 0.03;
const RAINFOREST_CHANCE: f64 = 0.15;
const FOREST_CHANCE: f64 = 0.36;

/// Scatters features over the map: ice on polar water, reefs on shores, then
/// the land features with their per-tile chances.
pub fn place_features(
    map: &mut MapModel,
    distances: &[i32],
    rng: &mut dyn RngCore,
) -> Result<(), MapError> {
    let width = map.width();
    let height = map.height();

    let mut points = map.points();
    shuffle(&mut points, rng);

    let mut ice = 0;
    let mut reef = 0;
    let mut floodplains = 0;
    let mut oasis = 0;
    let mut marsh = 0;
    let mut rainforest = 0;
    let mut forest = 0;

    for point in points {
        let tile = map.tile(point)?;

        if tile.is_water() {
            // Coastal moderation pulls every water tile out of the polar zone,
            // so ice goes by row, not by the stored zone.
            let polar_row = point.y == 0 || point.y == height - 1;
            if polar_row && map.can_have_feature(point, FeatureType::Ice) {
                map.tile_mut(point)?.feature = FeatureType::Ice;
                ice += 1;
            } else if map.can_have_feature(point, FeatureType::Reef)
                && rng.random::<f64>() < REEF_CHANCE
            {
                map.tile_mut(point)?.feature = FeatureType::Reef;
                reef += 1;
            }
            continue;
        }

        if map.can_have_feature(point, FeatureType::Floodplains) {
            let mut chance = if distance_at(distances, width, point) < 3 {
                0.5
            } else {
                0.1
            };
            if tile.terrain == TerrainType::Desert {
                chance += 0.2;
            }
            chance += rng.random_range(0.0..0.1);

            if rng.random::<f64>() < chance {
                map.tile_mut(point)?.feature = FeatureType::Floodplains;
                floodplains += 1;
                continue;
            }
        }

        if map.can_have_feature(point, FeatureType::Oasis) && rng.random::<f64>() < OASIS_CHANCE {
            map.tile_mut(point)?.feature = FeatureType::Oasis;
            oasis += 1;
            continue;
        }
        if map.can_have_feature(point, FeatureType::Marsh) && rng.random::<f64>() < MARSH_CHANCE {
            map.tile_mut(point)?.feature = FeatureType::Marsh;
            marsh += 1;
            continue;
        }
        if map.can_have_feature(point, FeatureType::Rainforest)
            && rng.random::<f64>() < RAINFOREST_CHANCE
        {
            map.tile_mut(point)?.feature = FeatureType::Rainforest;
            rainforest += 1;
            continue;
        }
        if map.can_have_feature(point, FeatureType::Forest) && rng.random::<f64>() < FOREST_CHANCE {
            map.tile_mut(point)?.feature = FeatureType::Forest;
            forest += 1;
        }
    }

    tracing::info!(
        "features: {ice} ice, {reef} reef, {floodplains} floodplains, {oasis} oasis, \
         {marsh} marsh, {rainforest} rainforest, {forest} forest"
    );

    Ok(())
}
