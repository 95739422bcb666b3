use rand::RngCore;

use crate::error::MapError;
use crate::hex::{HexDirection, HexPoint};
use crate::map::{FlowDirection, MapModel};

use super::config::MapOptions;
use super::heightmap::HeightMap;
use super::shuffle;

/// Rivers longer than this stall and stop where they are.
const MAX_RIVER_LENGTH: usize = 32;

/// Fraction of tiles counted as highland when picking springs.
const SPRING_FRACTION: f64 = 0.1;

const RIVER_NAMES: [&str; 10] = [
    "Amazon", "Nile", "Danube", "Volga", "Rhine", "Mississippi", "Ganges", "Mekong", "Yangtze",
    "Euphrates",
];

/// Carves rivers from highland springs down to the coast.
///
/// Each river starts on a high-elevation land tile and repeatedly steps onto
/// its lowest unvisited neighbor, marking a flow bit on every crossed edge,
/// until it reaches water or stalls.
pub fn place_rivers(
    map: &mut MapModel,
    options: &MapOptions,
    elevation: &HeightMap,
    rng: &mut dyn RngCore,
) -> Result<(), MapError> {
    let spring_threshold = elevation.threshold_above(SPRING_FRACTION);

    let mut springs: Vec<HexPoint> = Vec::new();
    for point in map.points() {
        if map.tile(point)?.is_land() && elevation.at(point) >= spring_threshold {
            springs.push(point);
        }
    }
    shuffle(&mut springs, rng);

    let mut placed = 0;
    for &spring in springs.iter() {
        if placed >= options.rivers as usize {
            break;
        }

        // springs too close to an existing river would braid into it
        if map.river_at(spring) {
            continue;
        }

        let name = RIVER_NAMES[placed % RIVER_NAMES.len()];
        if run_river(map, elevation, spring, name)? {
            placed += 1;
        }
    }

    tracing::info!("placed {placed} rivers (target {})", options.rivers);

    Ok(())
}

/// Walks one river downhill. Returns whether it flowed at least one step.
fn run_river(
    map: &mut MapModel,
    elevation: &HeightMap,
    spring: HexPoint,
    name: &str,
) -> Result<bool, MapError> {
    let mut current = spring;
    let mut visited = vec![spring];
    let mut flowed = false;

    for _ in 0..MAX_RIVER_LENGTH {
        if map.tile(current)?.is_water() {
            break;
        }

        let mut next: Option<(HexPoint, HexDirection, f64)> = None;
        for direction in HexDirection::ALL {
            let neighbor = current.neighbor(direction);
            if !map.valid(neighbor) || visited.contains(&neighbor) {
                continue;
            }
            let neighbor_elevation = elevation.at(neighbor);
            let is_lower = match next {
                Some((_, _, best)) => neighbor_elevation < best,
                None => true,
            };
            if is_lower {
                next = Some((neighbor, direction, neighbor_elevation));
            }
        }

        let Some((neighbor, direction, neighbor_elevation)) = next else {
            break;
        };
        // never flow uphill
        if neighbor_elevation > elevation.at(current) {
            break;
        }

        mark_edge(map, current, direction)?;
        map.tile_mut(current)?.river_name = Some(name.to_string());
        flowed = true;

        visited.push(neighbor);
        current = neighbor;
    }

    Ok(flowed)
}

/// Sets the flow bit for the edge crossed when leaving `point` towards
/// `direction`, on whichever tile owns that edge.
fn mark_edge(map: &mut MapModel, point: HexPoint, direction: HexDirection) -> Result<(), MapError> {
    match direction {
        HexDirection::North => map.tile_mut(point)?.set_river_flow(FlowDirection::East),
        HexDirection::NorthEast => map.tile_mut(point)?.set_river_flow(FlowDirection::SouthEast),
        HexDirection::SouthEast => map.tile_mut(point)?.set_river_flow(FlowDirection::SouthWest),
        HexDirection::South => {
            let target = point.neighbor(direction);
            if map.valid(target) {
                map.tile_mut(target)?.set_river_flow(FlowDirection::West);
            }
        }
        HexDirection::SouthWest => {
            let target = point.neighbor(direction);
            if map.valid(target) {
                map.tile_mut(target)?.set_river_flow(FlowDirection::NorthWest);
            }
        }
        HexDirection::NorthWest => {
            let target = point.neighbor(direction);
            if map.valid(target) {
                map.tile_mut(target)?.set_river_flow(FlowDirection::NorthEast);
            }
        }
    }

    Ok(())
}
