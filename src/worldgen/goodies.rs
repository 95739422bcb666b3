use rand::RngCore;

use crate::error::MapError;
use crate::hex::HexPoint;
use crate::map::{ImprovementType, MapModel, UnitMovementType};

use super::shuffle;

/// One hut per this many land tiles.
const TILES_PER_HUT: usize = 40;

/// Minimum hex distance between two huts.
const MIN_HUT_DISTANCE: i32 = 3;

/// Sprinkles goody huts over the land, spaced out and away from impassable
/// tiles.
pub fn place_goody_huts(map: &mut MapModel, rng: &mut dyn RngCore) -> Result<(), MapError> {
    let land_tiles = map.number_of_land_tiles();
    let target = (land_tiles + TILES_PER_HUT / 2) / TILES_PER_HUT;

    let mut candidates: Vec<HexPoint> = Vec::new();
    for point in map.points() {
        let tile = map.tile(point)?;
        if tile.is_land()
            && !tile.is_impassable(UnitMovementType::Walk)
            && tile.improvement == ImprovementType::None
        {
            candidates.push(point);
        }
    }
    shuffle(&mut candidates, rng);

    let mut placed: Vec<HexPoint> = Vec::new();
    for point in candidates {
        if placed.len() >= target {
            break;
        }
        if placed
            .iter()
            .all(|&hut| point.distance(hut) >= MIN_HUT_DISTANCE)
        {
            map.tile_mut(point)?.improvement = ImprovementType::GoodyHut;
            placed.push(point);
        }
    }

    tracing::info!("placed {} goody huts (target {target})", placed.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TerrainType;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn huts_are_spaced_and_on_passable_land() {
        let mut map = MapModel::new(20, 20).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = TerrainType::Plains;
        }
        let mut rng = SmallRng::seed_from_u64(6);
        place_goody_huts(&mut map, &mut rng).unwrap();

        let huts: Vec<HexPoint> = map
            .points()
            .into_iter()
            .filter(|&p| map.tile(p).unwrap().improvement == ImprovementType::GoodyHut)
            .collect();

        assert_eq!(huts.len(), 10);
        for (i, &a) in huts.iter().enumerate() {
            for &b in huts.iter().skip(i + 1) {
                assert!(a.distance(b) >= MIN_HUT_DISTANCE);
            }
        }
        for &hut in &huts {
            assert!(map.tile(hut).unwrap().is_land());
        }
    }

    #[test]
    fn water_world_gets_no_huts() {
        let mut map = MapModel::new(12, 12).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        place_goody_huts(&mut map, &mut rng).unwrap();

        for point in map.points() {
            assert_eq!(
                map.tile(point).unwrap().improvement,
                ImprovementType::None
            );
        }
    }
}
