use serde::{Deserialize, Serialize};

use super::point::HexCube;

/// One of the six edge directions of a hex cell, arranged in a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum HexDirection {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
}

string_enum!(HexDirection {
    North => "north",
    NorthEast => "northEast",
    SouthEast => "southEast",
    South => "south",
    SouthWest => "southWest",
    NorthWest => "northWest",
});

impl HexDirection {
    /// All six directions in the canonical N, NE, SE, S, SW, NW order.
    ///
    /// Consumers index neighbor lists by this order, so it must never change.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::North,
        HexDirection::NorthEast,
        HexDirection::SouthEast,
        HexDirection::South,
        HexDirection::SouthWest,
        HexDirection::NorthWest,
    ];

    /// Unit translation vector in cube space.
    pub fn cube_direction(self) -> HexCube {
        match self {
            HexDirection::North => HexCube::new(0, 1, -1),
            HexDirection::NorthEast => HexCube::new(1, 0, -1),
            HexDirection::SouthEast => HexCube::new(1, -1, 0),
            HexDirection::South => HexCube::new(0, -1, 1),
            HexDirection::SouthWest => HexCube::new(-1, 0, 1),
            HexDirection::NorthWest => HexCube::new(-1, 1, 0),
        }
    }

    pub fn opposite(self) -> HexDirection {
        match self {
            HexDirection::North => HexDirection::South,
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::SouthEast => HexDirection::NorthWest,
            HexDirection::South => HexDirection::North,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::NorthWest => HexDirection::SouthEast,
        }
    }

    pub fn clockwise_neighbor(self) -> HexDirection {
        match self {
            HexDirection::North => HexDirection::NorthEast,
            HexDirection::NorthEast => HexDirection::SouthEast,
            HexDirection::SouthEast => HexDirection::South,
            HexDirection::South => HexDirection::SouthWest,
            HexDirection::SouthWest => HexDirection::NorthWest,
            HexDirection::NorthWest => HexDirection::North,
        }
    }

    pub fn counter_clockwise_neighbor(self) -> HexDirection {
        match self {
            HexDirection::North => HexDirection::NorthWest,
            HexDirection::NorthEast => HexDirection::North,
            HexDirection::SouthEast => HexDirection::NorthEast,
            HexDirection::South => HexDirection::SouthEast,
            HexDirection::SouthWest => HexDirection::South,
            HexDirection::NorthWest => HexDirection::SouthWest,
        }
    }
}
