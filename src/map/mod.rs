pub mod continents;
pub mod grid;
pub mod resources;
pub mod tile;
pub mod types;

pub use continents::{Continent, ContinentType, Ocean, OceanType};
pub use grid::{MapModel, TileStatistics};
pub use resources::{ResourceType, ResourceUsage};
pub use tile::Tile;
pub use types::{
    ClimateZone, FeatureType, FlowDirection, ImprovementType, MovementCost, RouteType, TerrainType,
    UnitMovementType,
};
