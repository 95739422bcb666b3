use crate::error::MapError;
use crate::hex::HexPoint;
use crate::map::{ClimateZone, MapModel};

/// Distance value for tiles the relaxation has not reached yet.
const FAR_AWAY: i32 = i32::MAX / 2;

/// Assigns a climate zone to every tile from its latitude.
///
/// Latitude is the normalized distance of the row from the equator row at
/// `height / 2`; the outermost rows are always polar.
pub fn generate_climate_zones(map: &mut MapModel) -> Result<(), MapError> {
    let height = map.height();
    let half = height as f64 / 2.0;

    for point in map.points() {
        let latitude = (half - point.y as f64).abs() / half;

        let zone = if latitude > 0.9 || point.y == 0 || point.y == height - 1 {
            ClimateZone::Polar
        } else if latitude > 0.65 {
            ClimateZone::SubPolar
        } else if latitude > 0.4 {
            ClimateZone::Temperate
        } else if latitude > 0.2 {
            ClimateZone::SubTropic
        } else {
            ClimateZone::Tropic
        };

        map.tile_mut(point)?.climate_zone = zone;
    }

    Ok(())
}

/// Distance of every tile to the nearest water tile, by fixed-point
/// relaxation. Water tiles are 0; each pass lowers land tiles to one more
/// than their cheapest neighbor until nothing changes. The result equals a
/// breadth-first distance from the water set.
pub fn coastal_distances(map: &MapModel) -> Result<Vec<i32>, MapError> {
    let width = map.width();
    let mut distances = vec![FAR_AWAY; (width * map.height()) as usize];

    for point in map.points() {
        if map.tile(point)?.is_water() {
            distances[(point.y * width + point.x) as usize] = 0;
        }
    }

    let mut changed = true;
    while changed {
        changed = false;
        for point in map.points() {
            let index = (point.y * width + point.x) as usize;
            let mut best = distances[index];

            for neighbor in point.neighbors() {
                if !map.valid(neighbor) {
                    continue;
                }
                let neighbor_index = (neighbor.y * width + neighbor.x) as usize;
                best = best.min(distances[neighbor_index] + 1);
            }

            if best < distances[index] {
                distances[index] = best;
                changed = true;
            }
        }
    }

    Ok(distances)
}

/// Softens the climate near the coast: any tile closer than two steps to
/// water is pulled one band towards the tropics.
pub fn moderate_coastal_climate(map: &mut MapModel, distances: &[i32]) -> Result<(), MapError> {
    let width = map.width();

    for point in map.points() {
        let index = (point.y * width + point.x) as usize;
        if distances[index] < 2 {
            let tile = map.tile_mut(point)?;
            tile.climate_zone = tile.climate_zone.moderate();
        }
    }

    Ok(())
}

/// Convenience lookup into a distance field produced by [`coastal_distances`].
pub fn distance_at(distances: &[i32], width: i32, point: HexPoint) -> i32 {
    distances[(point.y * width + point.x) as usize]
}
