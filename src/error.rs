use thiserror::Error;

/// Errors surfaced by the map core.
///
/// Unreachable paths and impassable edges are values, not errors: `None` from
/// the pathfinder and [`crate::map::MovementCost::Impassable`] from the cost
/// model are normal outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// Coordinate access outside `[0, width) x [0, height)`. Never silently
    /// clamped; a clamped write would corrupt generation invariants.
    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} map")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// Generation config rejected before any grid mutation.
    #[error("invalid map configuration: {0}")]
    InvalidConfiguration(String),
}
