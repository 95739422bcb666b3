use rand::Rng;
use rand::RngCore;

use crate::error::MapError;
use crate::hex::HexPoint;
use crate::map::{ClimateZone, FeatureType, MapModel, TerrainType};

use super::config::MapOptions;
use super::heightmap::HeightMap;
use super::shuffle;

/// Elevation threshold below which water stays deep ocean even offshore.
const SHORE_ELEVATION: f64 = 0.1;

/// Probability that a shore-adjacent ocean tile is promoted during one
/// expansion pass.
const SHORE_EXPANSION_CHANCE: f64 = 0.2;

/// The scalar fields the elevation stage produces for later stages.
pub struct ElevationFields {
    pub elevation: HeightMap,
    pub moisture: HeightMap,
    /// Coarse land flag per cell, row-major. The land/sea split is decided
    /// here once; refinement only picks concrete terrains within it.
    pub land: Vec<bool>,
}

impl ElevationFields {
    pub fn is_land(&self, point: HexPoint) -> bool {
        if point.x < 0
            || point.x >= self.elevation.width()
            || point.y < 0
            || point.y >= self.elevation.height()
        {
            return false;
        }
        self.land[(point.y * self.elevation.width() + point.x) as usize]
    }
}

/// Builds the elevation and moisture fields and splits the map into coarse
/// land and sea at the configured water fraction.
pub fn generate_elevation(
    map: &mut MapModel,
    options: &MapOptions,
    rng: &mut dyn RngCore,
) -> Result<ElevationFields, MapError> {
    let width = map.width();
    let height = map.height();

    let elevation = HeightMap::new(width, height, options.map_type.octaves(), rng);
    let moisture = HeightMap::new(width, height, 4, rng);

    let land_fraction = 1.0 - options.map_type.water_fraction();
    let threshold = elevation.threshold_above(land_fraction);

    let mut land = vec![false; (width * height) as usize];
    for point in map.points() {
        let is_land = elevation.at(point) >= threshold;
        land[(point.y * width + point.x) as usize] = is_land;

        // coarse placeholder terrain; the refinement pass decides for real
        map.tile_mut(point)?.terrain = if is_land {
            TerrainType::Grass
        } else {
            TerrainType::Ocean
        };
    }

    let land_tiles = land.iter().filter(|&&l| l).count();
    tracing::debug!(
        "elevation split: {land_tiles} land of {} tiles (target fraction {land_fraction:.2})",
        land.len()
    );

    Ok(ElevationFields {
        elevation,
        moisture,
        land,
    })
}

/// Turns the coarse land/sea split into concrete terrains: shore vs. ocean on
/// the water side, climate-band biomes on the land side, then mountains.
pub fn refine_terrain(
    map: &mut MapModel,
    fields: &ElevationFields,
    options: &MapOptions,
    rng: &mut dyn RngCore,
) -> Result<(), MapError> {
    // 1. water depth and land biomes
    for point in map.points() {
        if !fields.is_land(point) {
            let shallow = fields.elevation.at(point) > SHORE_ELEVATION
                || point.neighbors().iter().any(|&n| fields.is_land(n));
            map.tile_mut(point)?.terrain = if shallow {
                TerrainType::Shore
            } else {
                TerrainType::Ocean
            };
        } else {
            let zone = map.tile(point)?.climate_zone;
            let elevation = fields.elevation.at(point);
            let moisture = fields.moisture.at(point);
            let (terrain, hills) = biome(zone, elevation, moisture, rng);

            let tile = map.tile_mut(point)?;
            tile.terrain = terrain;
            tile.is_hills = hills;
        }
    }

    // 2. any ocean touching land becomes shore
    let mut promotions = Vec::new();
    for point in map.points() {
        if map.terrain(point)? == TerrainType::Ocean && map.is_adjacent_to_land(point) {
            promotions.push(point);
        }
    }
    for point in promotions {
        map.tile_mut(point)?.terrain = TerrainType::Shore;
    }

    // 3. widen the shelf, twice, with some randomness
    for _ in 0..2 {
        let mut expansions = Vec::new();
        for point in map.points() {
            if map.terrain(point)? == TerrainType::Ocean
                && map.is_adjacent_to_shore(point)
                && rng.random::<f64>() < SHORE_EXPANSION_CHANCE
            {
                expansions.push(point);
            }
        }
        for point in expansions {
            map.tile_mut(point)?.terrain = TerrainType::Shore;
        }
    }

    place_mountains(map, fields, options, rng)?;

    Ok(())
}

fn place_mountains(
    map: &mut MapModel,
    fields: &ElevationFields,
    options: &MapOptions,
    rng: &mut dyn RngCore,
) -> Result<(), MapError> {
    let land_fraction = 1.0 - options.map_type.water_fraction();
    let mountain_fraction = options.age.mountain_fraction();
    let threshold = fields
        .elevation
        .threshold_above(mountain_fraction * land_fraction);

    let mut placed = 0;
    for point in map.points() {
        if fields.is_land(point) && fields.elevation.at(point) >= threshold {
            let tile = map.tile_mut(point)?;
            tile.feature = FeatureType::Mountains;
            tile.is_hills = false;
            placed += 1;
        }
    }
    tracing::info!("placed {placed} mountain tiles");

    // thin out solid mountain blocks so ranges keep passable gaps
    let mut points = map.points();
    shuffle(&mut points, rng);

    let mut removed = 0;
    for point in points {
        if map.feature(point)? != FeatureType::Mountains {
            continue;
        }

        let mut valid_neighbors = 0;
        let mut mountain_neighbors = 0;
        for neighbor in point.neighbors() {
            let Ok(tile) = map.tile(neighbor) else {
                continue;
            };
            valid_neighbors += 1;
            if tile.feature == FeatureType::Mountains {
                mountain_neighbors += 1;
            }
        }

        if (valid_neighbors == 6 && mountain_neighbors >= 5)
            || (valid_neighbors == 5 && mountain_neighbors >= 4)
        {
            let tile = map.tile_mut(point)?;
            tile.feature = FeatureType::None;
            tile.is_hills = true;
            removed += 1;
        }
    }
    if removed > 0 {
        tracing::debug!("thinned {removed} crowded mountain tiles into hills");
    }

    Ok(())
}

/// Picks a terrain and hill flag for one land tile from its climate band.
fn biome(
    zone: ClimateZone,
    elevation: f64,
    moisture: f64,
    rng: &mut dyn RngCore,
) -> (TerrainType, bool) {
    match zone {
        ClimateZone::Polar => (TerrainType::Snow, rng.random::<f64>() < 0.5),
        ClimateZone::SubPolar => {
            if elevation > 0.7 && rng.random::<f64>() > 0.7 {
                return (TerrainType::Snow, true);
            }
            if elevation > 0.5 && rng.random::<f64>() > 0.6 {
                return (TerrainType::Snow, false);
            }
            (TerrainType::Tundra, rng.random::<f64>() > 0.85)
        }
        ClimateZone::Temperate => {
            if elevation > 0.7 && rng.random::<f64>() > 0.7 {
                return (TerrainType::Grass, true);
            }
            let hills = rng.random::<f64>() > 0.85;
            if moisture < 0.5 {
                (TerrainType::Plains, hills)
            } else {
                (TerrainType::Grass, hills)
            }
        }
        ClimateZone::SubTropic => {
            if elevation > 0.7 && rng.random::<f64>() > 0.7 {
                return (TerrainType::Plains, true);
            }
            let hills = rng.random::<f64>() > 0.85;
            if moisture < 0.2 {
                if rng.random::<f64>() < 0.3 {
                    (TerrainType::Desert, hills)
                } else {
                    (TerrainType::Plains, hills)
                }
            } else if moisture < 0.6 {
                (TerrainType::Plains, hills)
            } else {
                (TerrainType::Grass, hills)
            }
        }
        ClimateZone::Tropic => {
            if elevation > 0.7 && rng.random::<f64>() > 0.7 {
                return (TerrainType::Plains, true);
            }
            let hills = rng.random::<f64>() > 0.85;
            if moisture < 0.3 {
                if rng.random::<f64>() < 0.4 {
                    (TerrainType::Desert, hills)
                } else {
                    (TerrainType::Plains, hills)
                }
            } else {
                (TerrainType::Plains, hills)
            }
        }
    }
}

/// Smooths harsh terrain borders by nudging tiles towards their neighborhood
/// mix. Mountains with a moderate number of mountain neighbors are logged as
/// potential pass locations.
pub fn blend_terrains(map: &mut MapModel, rng: &mut dyn RngCore) -> Result<(), MapError> {
    let mut points = map.points();
    shuffle(&mut points, rng);

    for point in points {
        let tile = map.tile(point)?;
        if tile.is_water() {
            continue;
        }

        if tile.feature == FeatureType::Mountains {
            let mountain_neighbors = point
                .neighbors()
                .iter()
                .filter(|&&n| {
                    map.tile(n)
                        .is_ok_and(|t| t.feature == FeatureType::Mountains)
                })
                .count();
            if (2..=4).contains(&mountain_neighbors) {
                tracing::debug!("mountain pass candidate at {point}");
            }
            continue;
        }

        // jitter the thresholds so the borders do not come out razor straight
        let rand_percent = 1.0 + rng.random::<f64>() * 2.0 * 0.6 - 0.6;
        let stats = map.tile_statistics(point, 3);

        match tile.terrain {
            TerrainType::Grass => {
                if stats.desert + stats.snow >= 0.33 * rand_percent {
                    let tile = map.tile_mut(point)?;
                    tile.terrain = TerrainType::Plains;
                    if tile.feature == FeatureType::Marsh {
                        tile.feature = FeatureType::Forest;
                    }
                }
            }
            TerrainType::Desert => {
                if stats.grass + stats.snow >= 0.25 * rand_percent {
                    map.tile_mut(point)?.terrain = TerrainType::Plains;
                }
            }
            TerrainType::Tundra => {
                if 2.0 * stats.grass + stats.plains + stats.desert >= 0.5 * rand_percent {
                    map.tile_mut(point)?.terrain = TerrainType::Plains;
                }
            }
            _ => {}
        }
    }

    Ok(())
}
