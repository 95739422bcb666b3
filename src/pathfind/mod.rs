pub mod astar;
pub mod data_source;
pub mod path;

pub use astar::AStarPathfinder;
pub use data_source::{
    InfluenceDataSource, MoveTypeIgnoreUnitsDataSource, MoveTypeIgnoreUnitsOptions,
    PathfinderDataSource, UNREACHABLE_COST,
};
pub use path::HexPath;
