use crate::error::MapError;
use crate::hex::{HexDirection, HexPoint};
use crate::map::{Continent, ContinentType, MapModel, Ocean, OceanType};

/// Groups smaller than this stay unnamed.
const NAMED_GROUP_MIN_TILES: usize = 10;

/// Identifier pool size; matches the width of the per-tile identifier field.
const MAX_GROUPS: usize = 256;

/// Neighbor directions whose tiles have already been scanned when the grid is
/// walked column by column. Joins the scan misses are fixed up by merging.
const EVALUATED: [HexDirection; 3] = [
    HexDirection::North,
    HexDirection::NorthWest,
    HexDirection::SouthWest,
];

/// Labels every land tile with a continent identifier and names the large
/// landmasses from the continent pool.
pub fn identify_continents(map: &mut MapModel) -> Result<(), MapError> {
    let groups = identify_groups(map, true)?;

    let mut continents = Vec::new();
    let mut pool = ContinentType::POOL.iter();
    for (identifier, points) in groups.into_iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let mut continent = Continent::new(identifier as u8);
        if points.len() >= NAMED_GROUP_MIN_TILES {
            if let Some(&continent_type) = pool.next() {
                continent.continent_type = continent_type;
            }
        }
        continent.points = points;
        continents.push(continent);
    }

    tracing::info!("identified {} continents", continents.len());
    map.continents = continents;

    Ok(())
}

/// Same as [`identify_continents`] for water tiles and oceans.
pub fn identify_oceans(map: &mut MapModel) -> Result<(), MapError> {
    let groups = identify_groups(map, false)?;

    let mut oceans = Vec::new();
    let mut pool = OceanType::POOL.iter();
    for (identifier, points) in groups.into_iter().enumerate() {
        if points.is_empty() {
            continue;
        }
        let mut ocean = Ocean::new(identifier as u8);
        if points.len() >= NAMED_GROUP_MIN_TILES {
            if let Some(&ocean_type) = pool.next() {
                ocean.ocean_type = ocean_type;
            }
        }
        ocean.points = points;
        oceans.push(ocean);
    }

    tracing::info!("identified {} oceans", oceans.len());
    map.oceans = oceans;

    Ok(())
}

/// Scan-line connected-component labeling. Walks the grid in the fixed point
/// order, takes over the identifier of any already-labeled neighbor, merges
/// identifiers when a tile joins two previously separate groups, and
/// allocates the first free identifier otherwise.
fn identify_groups(map: &mut MapModel, land: bool) -> Result<Vec<Vec<HexPoint>>, MapError> {
    let mut groups: Vec<Vec<HexPoint>> = vec![Vec::new(); MAX_GROUPS];

    for point in map.points() {
        if map.tile(point)?.is_land() != land {
            continue;
        }

        let mut identifier: Option<u8> = None;
        for direction in EVALUATED {
            let neighbor = point.neighbor(direction);
            let Ok(neighbor_tile) = map.tile(neighbor) else {
                continue;
            };
            if neighbor_tile.is_land() != land {
                continue;
            }
            let neighbor_id = if land {
                neighbor_tile.continent_identifier
            } else {
                neighbor_tile.ocean_identifier
            };
            let Some(neighbor_id) = neighbor_id else {
                continue;
            };

            match identifier {
                None => identifier = Some(neighbor_id),
                Some(current) if current != neighbor_id => {
                    // two groups meet here; fold the later one into the first
                    let moved = std::mem::take(&mut groups[neighbor_id as usize]);
                    for &moved_point in &moved {
                        set_identifier(map, moved_point, land, current)?;
                    }
                    groups[current as usize].extend(moved);
                }
                Some(_) => {}
            }
        }

        let identifier = match identifier {
            Some(identifier) => identifier,
            None => {
                let Some(free) = groups.iter().position(|group| group.is_empty()) else {
                    // identifier space exhausted; leave the tile unlabeled
                    tracing::warn!("no free group identifier for {point}");
                    continue;
                };
                free as u8
            }
        };

        set_identifier(map, point, land, identifier)?;
        groups[identifier as usize].push(point);
    }

    Ok(groups)
}

fn set_identifier(
    map: &mut MapModel,
    point: HexPoint,
    land: bool,
    identifier: u8,
) -> Result<(), MapError> {
    let tile = map.tile_mut(point)?;
    if land {
        tile.continent_identifier = Some(identifier);
    } else {
        tile.ocean_identifier = Some(identifier);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TerrainType;

    /// Two land blobs separated by a water column.
    fn two_island_map() -> MapModel {
        let mut map = MapModel::new(16, 8).unwrap();
        for point in map.points() {
            if (1..6).contains(&point.x) || (10..15).contains(&point.x) {
                map.tile_mut(point).unwrap().terrain = TerrainType::Grass;
            }
        }
        map
    }

    #[test]
    fn separate_islands_get_separate_identifiers() {
        let mut map = two_island_map();
        identify_continents(&mut map).unwrap();

        let left = map.tile(HexPoint::new(2, 4)).unwrap().continent_identifier;
        let right = map.tile(HexPoint::new(12, 4)).unwrap().continent_identifier;
        assert!(left.is_some());
        assert!(right.is_some());
        assert_ne!(left, right);
        assert_eq!(map.continents.len(), 2);
    }

    #[test]
    fn connected_land_shares_one_identifier() {
        let mut map = MapModel::new(12, 12).unwrap();
        for point in map.points() {
            if point.x > 0 && point.x < 11 && point.y > 0 && point.y < 11 {
                map.tile_mut(point).unwrap().terrain = TerrainType::Grass;
            }
        }
        identify_continents(&mut map).unwrap();

        let expected = map.tile(HexPoint::new(5, 5)).unwrap().continent_identifier;
        assert!(expected.is_some());
        for point in map.points() {
            let tile = map.tile(point).unwrap();
            if tile.is_land() {
                assert_eq!(tile.continent_identifier, expected, "at {point}");
            } else {
                assert_eq!(tile.continent_identifier, None);
            }
        }
    }

    #[test]
    fn large_groups_get_named() {
        let mut map = two_island_map();
        identify_continents(&mut map).unwrap();
        identify_oceans(&mut map).unwrap();

        for continent in &map.continents {
            if continent.len() >= NAMED_GROUP_MIN_TILES {
                assert_ne!(continent.continent_type, ContinentType::None);
            }
        }
        assert!(!map.oceans.is_empty());
        assert!(
            map.oceans
                .iter()
                .any(|ocean| ocean.ocean_type != OceanType::None)
        );
    }

    #[test]
    fn every_tile_is_labeled_on_a_mixed_map() {
        let mut map = two_island_map();
        identify_continents(&mut map).unwrap();
        identify_oceans(&mut map).unwrap();

        for point in map.points() {
            let tile = map.tile(point).unwrap();
            if tile.is_land() {
                assert!(tile.continent_identifier.is_some());
            } else {
                assert!(tile.ocean_identifier.is_some());
            }
        }
    }
}
