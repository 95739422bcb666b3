use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// Grid dimensions plus the intended player counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MapSize {
    Duel,
    Tiny,
    Small,
    Standard,
}

string_enum!(MapSize {
    Duel => "duel",
    Tiny => "tiny",
    Small => "small",
    Standard => "standard",
});

impl MapSize {
    pub const ALL: [MapSize; 4] = [MapSize::Duel, MapSize::Tiny, MapSize::Small, MapSize::Standard];

    /// Width and height of the grid.
    pub fn dimensions(self) -> (i32, i32) {
        match self {
            MapSize::Duel => (32, 22),
            MapSize::Tiny => (42, 32),
            MapSize::Small => (52, 42),
            MapSize::Standard => (62, 52),
        }
    }

    pub fn num_players(self) -> usize {
        match self {
            MapSize::Duel => 2,
            MapSize::Tiny => 3,
            MapSize::Small => 4,
            MapSize::Standard => 6,
        }
    }

    pub fn num_city_states(self) -> usize {
        match self {
            MapSize::Duel => 3,
            MapSize::Tiny => 6,
            MapSize::Small => 9,
            MapSize::Standard => 12,
        }
    }

    /// The size whose tile count is closest to `width * height`.
    pub fn best_matching(width: i32, height: i32) -> MapSize {
        let area = width * height;
        let mut best = MapSize::Duel;
        let mut best_delta = i32::MAX;
        for size in MapSize::ALL {
            let (w, h) = size.dimensions();
            let delta = (w * h - area).abs();
            if delta < best_delta {
                best = size;
                best_delta = delta;
            }
        }
        best
    }
}

/// Overall landmass shape. Drives the noise octaves and the water share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MapType {
    Continents,
    Pangaea,
    Archipelago,
    Earth,
}

string_enum!(MapType {
    Continents => "continents",
    Pangaea => "pangaea",
    Archipelago => "archipelago",
    Earth => "earth",
});

impl MapType {
    /// Noise octaves for the elevation field. Fewer octaves clump land into
    /// one mass, more break it apart.
    pub fn octaves(self) -> u32 {
        match self {
            MapType::Pangaea => 2,
            MapType::Archipelago => 8,
            MapType::Continents | MapType::Earth => 4,
        }
    }

    /// Fraction of the map that ends up water.
    pub fn water_fraction(self) -> f64 {
        match self {
            MapType::Continents => 0.52,
            _ => 0.65,
        }
    }
}

/// Geological age of the world. Older worlds are flatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MapAge {
    Young,
    Normal,
    Old,
}

string_enum!(MapAge {
    Young => "young",
    Normal => "normal",
    Old => "old",
});

impl MapAge {
    /// Fraction of land tiles that become mountains.
    pub fn mountain_fraction(self) -> f64 {
        match self {
            MapAge::Young => 0.08,
            MapAge::Normal => 0.06,
            MapAge::Old => 0.04,
        }
    }
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub size: MapSize,
    pub map_type: MapType,
    pub age: MapAge,
    /// Target number of rivers.
    pub rivers: u32,
    /// RNG seed for deterministic generation.
    pub seed: u64,
}

impl Default for MapOptions {
    fn default() -> Self {
        MapOptions {
            size: MapSize::Standard,
            map_type: MapType::Continents,
            age: MapAge::Normal,
            rivers: 8,
            seed: 42,
        }
    }
}

impl MapOptions {
    /// Rejects configurations before any grid mutation happens.
    pub fn validate(&self) -> Result<(), MapError> {
        let (width, height) = self.size.dimensions();
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidConfiguration(format!(
                "map size {} has degenerate dimensions {width}x{height}",
                self.size
            )));
        }
        Ok(())
    }
}
