#[macro_use]
mod macros;

pub mod error;
pub mod hex;
pub mod map;
pub mod pathfind;
pub mod worldgen;

pub use error::MapError;
pub use hex::{HexArea, HexCube, HexDirection, HexPoint};
pub use map::{
    FeatureType, MapModel, MovementCost, ResourceType, TerrainType, Tile, UnitMovementType,
};
pub use pathfind::{AStarPathfinder, HexPath, PathfinderDataSource};
pub use worldgen::{MapAge, MapGenerator, MapOptions, MapSize, MapType, generate_world};
