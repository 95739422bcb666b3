use rand::Rng;
use rand::RngCore;

use crate::error::MapError;
use crate::map::{MapModel, ResourceType};

use super::config::MapSize;
use super::shuffle;

/// Scatters all resources over the map, in placement order.
///
/// Each resource gets a target count scaled from its standard-map base amount
/// by the actual map area, jittered by its variance percentage, and capped by
/// the number of tiles that can legally hold it.
pub fn place_resources(map: &mut MapModel, rng: &mut dyn RngCore) -> Result<(), MapError> {
    let mut resources = ResourceType::ALL.to_vec();
    resources.sort_by_key(|resource| resource.placement_order());

    let map_tiles = map.width() * map.height();
    let (standard_width, standard_height) = MapSize::Standard.dimensions();
    let standard_tiles = standard_width * standard_height;

    for resource in resources {
        place_resource(map, resource, map_tiles, standard_tiles, rng)?;
    }

    Ok(())
}

fn place_resource(
    map: &mut MapModel,
    resource: ResourceType,
    map_tiles: i32,
    standard_tiles: i32,
    rng: &mut dyn RngCore,
) -> Result<(), MapError> {
    let mut candidates = Vec::new();
    let mut already_placed = 0;
    for point in map.points() {
        let has_river = map.river_at(point);
        let tile = map.tile(point)?;
        if tile.resource == resource {
            already_placed += 1;
        }
        if tile.resource == ResourceType::None && tile.can_have_resource(resource, has_river) {
            candidates.push(point);
        }
    }

    let scaled = resource.base_amount() * (map_tiles * 100 / standard_tiles) / 100;
    let variance_percent = resource.variance_percent();
    let variance = scaled * rng.random_range(-variance_percent..=variance_percent) / 100;
    let target = (scaled + variance - already_placed).clamp(0, candidates.len() as i32) as usize;

    shuffle(&mut candidates, rng);
    for &point in candidates.iter().take(target) {
        let tile = map.tile_mut(point)?;
        tile.resource = resource;
        tile.resource_quantity = resource.placed_quantity();
    }

    tracing::info!(
        "placed {target} of {resource} ({} candidate tiles)",
        candidates.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexPoint;
    use crate::map::TerrainType;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn mixed_map() -> MapModel {
        let mut map = MapModel::new(20, 20).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = match point.x % 4 {
                0 => TerrainType::Grass,
                1 => TerrainType::Plains,
                2 => TerrainType::Shore,
                _ => TerrainType::Tundra,
            };
        }
        map
    }

    #[test]
    fn resources_land_only_on_legal_tiles() {
        let mut map = mixed_map();
        let mut rng = SmallRng::seed_from_u64(5);
        place_resources(&mut map, &mut rng).unwrap();

        for point in map.points() {
            let has_river = map.river_at(point);
            let tile = map.tile(point).unwrap().clone();
            if tile.resource != ResourceType::None {
                let mut probe = tile.clone();
                probe.resource = ResourceType::None;
                assert!(
                    probe.can_have_resource(tile.resource, has_river),
                    "illegal {} at {point}",
                    tile.resource
                );
                assert!(tile.resource_quantity > 0);
            }
        }
    }

    #[test]
    fn something_gets_placed_on_a_viable_map() {
        let mut map = mixed_map();
        let mut rng = SmallRng::seed_from_u64(9);
        place_resources(&mut map, &mut rng).unwrap();

        let placed = map
            .points()
            .iter()
            .filter(|&&p| map.tile(p).unwrap().resource != ResourceType::None)
            .count();
        assert!(placed > 0);
    }

    #[test]
    fn same_seed_places_identically() {
        let mut map_a = mixed_map();
        let mut map_b = mixed_map();
        let mut rng_a = SmallRng::seed_from_u64(77);
        let mut rng_b = SmallRng::seed_from_u64(77);

        place_resources(&mut map_a, &mut rng_a).unwrap();
        place_resources(&mut map_b, &mut rng_b).unwrap();

        for point in map_a.points() {
            assert_eq!(
                map_a.tile(point).unwrap().resource,
                map_b.tile(point).unwrap().resource
            );
        }
    }
}
