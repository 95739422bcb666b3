use crate::error::MapError;
use crate::hex::HexPoint;
use crate::map::{FeatureType, MapModel, TerrainType, UnitMovementType};

use super::config::MapOptions;

/// Minimum hex distance between any two start positions.
const MIN_SEPARATION: i32 = 8;

/// Weight of the center tile relative to its surroundings when scoring a
/// candidate start.
const CENTER_WEIGHT: i32 = 3;

/// How desirable a single tile is for settling nearby.
pub fn placement_fertility(map: &MapModel, point: HexPoint) -> Result<i32, MapError> {
    let tile = map.tile(point)?;

    let mut fertility = match tile.feature {
        FeatureType::Mountains | FeatureType::MountEverest | FeatureType::MountKilimanjaro => 1,
        FeatureType::Forest => 4,
        FeatureType::Rainforest => 3,
        FeatureType::Marsh => 3,
        FeatureType::Ice => -1,
        FeatureType::Oasis => 6,
        FeatureType::Floodplains => 6,
        _ => match tile.terrain {
            TerrainType::Grass => 4,
            TerrainType::Plains => 4,
            TerrainType::Desert => 1,
            TerrainType::Tundra => 2,
            TerrainType::Snow => 1,
            TerrainType::Shore => 4,
            TerrainType::Ocean => 2,
        },
    };

    if tile.is_hills && fertility == 1 {
        fertility = 2;
    }

    if tile.feature == FeatureType::Reef || tile.feature == FeatureType::GreatBarrierReef {
        fertility += 2;
    } else if tile.feature == FeatureType::Atoll {
        fertility += 4;
    }

    if map.river_at(point) {
        fertility += 1;
    }
    if map.is_fresh_water_at(point) {
        fertility += 1;
    }
    if !tile.feature.is_mountainous() && map.is_coastal_at(point) {
        fertility += 2;
    }

    Ok(fertility)
}

/// Picks player and city-state start positions greedily by neighborhood
/// fertility, keeping everyone at least [`MIN_SEPARATION`] apart.
pub fn choose_start_positions(map: &mut MapModel, options: &MapOptions) -> Result<(), MapError> {
    let mut scored: Vec<(HexPoint, i32)> = Vec::new();

    for point in map.points() {
        let tile = map.tile(point)?;
        if tile.is_water() || tile.is_impassable(UnitMovementType::Walk) {
            continue;
        }

        let mut score = (CENTER_WEIGHT - 1) * placement_fertility(map, point)?;
        for area_point in point.area_with_radius(2) {
            if map.valid(area_point) {
                score += placement_fertility(map, area_point)?;
            }
        }
        scored.push((point, score));
    }

    // stable sort keeps the scan order as the tie-breaker, so results are
    // deterministic for a given map
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    let mut taken: Vec<HexPoint> = Vec::new();
    let mut players = Vec::new();
    let mut city_states = Vec::new();

    for &(point, _) in &scored {
        if players.len() >= options.size.num_players() {
            break;
        }
        if taken.iter().all(|&other| point.distance(other) >= MIN_SEPARATION) {
            players.push(point);
            taken.push(point);
        }
    }

    for &(point, _) in &scored {
        if city_states.len() >= options.size.num_city_states() {
            break;
        }
        if taken.iter().all(|&other| point.distance(other) >= MIN_SEPARATION) {
            city_states.push(point);
            taken.push(point);
        }
    }

    if players.len() < options.size.num_players() {
        tracing::warn!(
            "only {} of {} player starts found",
            players.len(),
            options.size.num_players()
        );
    }
    tracing::info!(
        "start positions: {} players, {} city states",
        players.len(),
        city_states.len()
    );

    map.player_starts = players;
    map.city_state_starts = city_states;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::FlowDirection;
    use crate::worldgen::config::MapSize;

    fn grass_map(width: i32, height: i32) -> MapModel {
        let mut map = MapModel::new(width, height).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = TerrainType::Grass;
        }
        map
    }

    #[test]
    fn fertility_prefers_rivers_and_coasts() {
        let mut map = grass_map(10, 10);
        let inland = HexPoint::new(5, 5);
        let base = placement_fertility(&map, inland).unwrap();

        map.tile_mut(inland)
            .unwrap()
            .set_river_flow(FlowDirection::East);
        let riverside = placement_fertility(&map, inland).unwrap();
        assert!(riverside > base);
    }

    #[test]
    fn ice_is_actively_undesirable() {
        let mut map = grass_map(6, 6);
        let point = HexPoint::new(2, 2);
        map.tile_mut(point).unwrap().terrain = TerrainType::Shore;
        map.tile_mut(point).unwrap().feature = FeatureType::Ice;
        assert!(placement_fertility(&map, point).unwrap() <= 1);
    }

    #[test]
    fn starts_keep_their_distance() {
        let mut map = grass_map(32, 22);
        let options = MapOptions {
            size: MapSize::Duel,
            ..MapOptions::default()
        };
        choose_start_positions(&mut map, &options).unwrap();

        assert_eq!(map.player_starts.len(), 2);
        assert_eq!(map.city_state_starts.len(), 3);

        let mut all = map.player_starts.clone();
        all.extend(map.city_state_starts.clone());
        for (i, &a) in all.iter().enumerate() {
            for &b in all.iter().skip(i + 1) {
                assert!(a.distance(b) >= MIN_SEPARATION, "{a} and {b} too close");
            }
        }
    }

    #[test]
    fn starts_are_on_passable_land() {
        let mut map = grass_map(32, 22);
        let options = MapOptions {
            size: MapSize::Duel,
            ..MapOptions::default()
        };
        choose_start_positions(&mut map, &options).unwrap();

        for &start in map.player_starts.iter().chain(&map.city_state_starts) {
            let tile = map.tile(start).unwrap();
            assert!(tile.is_land());
            assert!(!tile.is_impassable(UnitMovementType::Walk));
        }
    }
}
