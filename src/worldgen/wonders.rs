use rand::RngCore;

use crate::error::MapError;
use crate::map::{FeatureType, MapModel};

use super::shuffle;

/// Places each natural wonder at most once, on the first suitable tile of a
/// shuffled scan. A map without a suitable tile simply goes without that
/// wonder.
pub fn place_natural_wonders(map: &mut MapModel, rng: &mut dyn RngCore) -> Result<(), MapError> {
    let mut placed = 0;

    for wonder in FeatureType::NATURAL_WONDERS {
        let mut points = map.points();
        shuffle(&mut points, rng);

        for point in points {
            if map.can_have_feature(point, wonder) {
                let tile = map.tile_mut(point)?;
                tile.feature = wonder;
                tile.is_hills = false;
                tracing::info!("placed natural wonder {wonder} at {point}");
                placed += 1;
                break;
            }
        }
    }

    tracing::debug!("placed {placed} natural wonders");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexPoint;
    use crate::map::TerrainType;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn each_wonder_appears_at_most_once() {
        let mut map = MapModel::new(20, 20).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = match point.y % 3 {
                0 => TerrainType::Shore,
                1 => TerrainType::Snow,
                _ => TerrainType::Grass,
            };
        }
        let mut rng = SmallRng::seed_from_u64(12);
        place_natural_wonders(&mut map, &mut rng).unwrap();

        for wonder in FeatureType::NATURAL_WONDERS {
            let count = map
                .points()
                .into_iter()
                .filter(|&p| map.feature(p).unwrap() == wonder)
                .count();
            assert_eq!(count, 1, "{wonder} appears {count} times");
        }
    }

    #[test]
    fn wonders_need_suitable_ground() {
        // pure deep ocean offers nothing for the land wonders
        let mut map = MapModel::new(10, 10).unwrap();
        let mut rng = SmallRng::seed_from_u64(5);
        place_natural_wonders(&mut map, &mut rng).unwrap();

        for point in map.points() {
            let feature = map.feature(point).unwrap();
            assert!(
                !matches!(
                    feature,
                    FeatureType::MountEverest | FeatureType::MountKilimanjaro
                ),
                "mountain wonder on water at {point}"
            );
        }
    }
}
