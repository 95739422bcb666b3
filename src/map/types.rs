use serde::{Deserialize, Serialize};

/// Cost of entering a tile for a given movement type, or the sentinel for
/// "this edge does not exist". Never an error; impassable edges are simply
/// filtered out of the search graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MovementCost {
    Moves(f64),
    Impassable,
}

impl MovementCost {
    pub fn is_impassable(self) -> bool {
        matches!(self, MovementCost::Impassable)
    }

    pub fn moves(self) -> Option<f64> {
        match self {
            MovementCost::Moves(value) => Some(value),
            MovementCost::Impassable => None,
        }
    }
}

/// Locomotion mode of a unit; selects which per-terrain/per-feature cost
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum UnitMovementType {
    Immobile,
    Walk,
    Swim,
    SwimShallow,
}

string_enum!(UnitMovementType {
    Immobile => "immobile",
    Walk => "walk",
    Swim => "swim",
    SwimShallow => "swimShallow",
});

/// Discrete terrain category of a tile. Mutually exclusive; every generated
/// tile ends up with exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TerrainType {
    Ocean,
    Shore,
    Grass,
    Plains,
    Desert,
    Tundra,
    Snow,
}

string_enum!(TerrainType {
    Ocean => "ocean",
    Shore => "shore",
    Grass => "grass",
    Plains => "plains",
    Desert => "desert",
    Tundra => "tundra",
    Snow => "snow",
});

impl TerrainType {
    pub const ALL: [TerrainType; 7] = [
        TerrainType::Ocean,
        TerrainType::Shore,
        TerrainType::Grass,
        TerrainType::Plains,
        TerrainType::Desert,
        TerrainType::Tundra,
        TerrainType::Snow,
    ];

    pub fn is_water(self) -> bool {
        matches!(self, TerrainType::Ocean | TerrainType::Shore)
    }

    pub fn is_land(self) -> bool {
        !self.is_water()
    }

    pub fn is_shallow_water(self) -> bool {
        self == TerrainType::Shore
    }

    /// Base cost to enter this terrain for a movement type.
    pub fn movement_cost(self, movement_type: UnitMovementType) -> MovementCost {
        match movement_type {
            UnitMovementType::Immobile => MovementCost::Impassable,
            UnitMovementType::Swim => match self {
                TerrainType::Ocean => MovementCost::Moves(1.5),
                TerrainType::Shore => MovementCost::Moves(1.0),
                _ => MovementCost::Impassable,
            },
            UnitMovementType::SwimShallow => match self {
                TerrainType::Shore => MovementCost::Moves(1.0),
                _ => MovementCost::Impassable,
            },
            UnitMovementType::Walk => {
                if self.is_land() {
                    MovementCost::Moves(1.0)
                } else {
                    MovementCost::Impassable
                }
            }
        }
    }
}

/// Optional overlay on top of the terrain. `None` is the explicit empty state,
/// not an absent value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum FeatureType {
    None,
    Forest,
    Rainforest,
    Floodplains,
    Marsh,
    Oasis,
    Reef,
    Ice,
    Atoll,
    Mountains,
    Lake,
    // natural wonders
    MountEverest,
    MountKilimanjaro,
    GreatBarrierReef,
}

string_enum!(FeatureType {
    None => "none",
    Forest => "forest",
    Rainforest => "rainforest",
    Floodplains => "floodplains",
    Marsh => "marsh",
    Oasis => "oasis",
    Reef => "reef",
    Ice => "ice",
    Atoll => "atoll",
    Mountains => "mountains",
    Lake => "lake",
    MountEverest => "mountEverest",
    MountKilimanjaro => "mountKilimanjaro",
    GreatBarrierReef => "greatBarrierReef",
});

impl FeatureType {
    pub const NATURAL_WONDERS: [FeatureType; 3] = [
        FeatureType::MountEverest,
        FeatureType::MountKilimanjaro,
        FeatureType::GreatBarrierReef,
    ];

    pub fn is_natural_wonder(self) -> bool {
        Self::NATURAL_WONDERS.contains(&self)
    }

    pub fn is_mountainous(self) -> bool {
        matches!(
            self,
            FeatureType::Mountains | FeatureType::MountEverest | FeatureType::MountKilimanjaro
        )
    }

    /// Cost added on top of the terrain cost, or impassable.
    pub fn movement_cost(self, movement_type: UnitMovementType) -> MovementCost {
        match movement_type {
            UnitMovementType::Immobile => MovementCost::Impassable,
            // Deep-water movement needs open water. Any feature blocks it.
            UnitMovementType::Swim => match self {
                FeatureType::None => MovementCost::Moves(0.0),
                _ => MovementCost::Impassable,
            },
            UnitMovementType::Walk | UnitMovementType::SwimShallow => {
                match self {
                    FeatureType::Forest
                    | FeatureType::Rainforest
                    | FeatureType::Marsh
                    | FeatureType::Reef
                    | FeatureType::Atoll => MovementCost::Moves(2.0),
                    FeatureType::Floodplains | FeatureType::Oasis => MovementCost::Moves(0.0),
                    FeatureType::Ice | FeatureType::Lake => MovementCost::Impassable,
                    FeatureType::Mountains
                    | FeatureType::MountEverest
                    | FeatureType::MountKilimanjaro => MovementCost::Impassable,
                    FeatureType::GreatBarrierReef => MovementCost::Moves(2.0),
                    FeatureType::None => MovementCost::Moves(0.0),
                }
            }
        }
    }
}

/// Latitude-derived classification that parameterizes the biome rules.
/// Always defined on a tile; defaults to temperate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ClimateZone {
    Polar,
    SubPolar,
    Temperate,
    SubTropic,
    Tropic,
}

string_enum!(ClimateZone {
    Polar => "polar",
    SubPolar => "subPolar",
    Temperate => "temperate",
    SubTropic => "subTropic",
    Tropic => "tropic",
});

impl ClimateZone {
    /// One step towards the tropics, saturating there.
    pub fn moderate(self) -> ClimateZone {
        match self {
            ClimateZone::Polar => ClimateZone::SubPolar,
            ClimateZone::SubPolar => ClimateZone::Temperate,
            ClimateZone::Temperate => ClimateZone::SubTropic,
            ClimateZone::SubTropic | ClimateZone::Tropic => ClimateZone::Tropic,
        }
    }
}

/// Road level on a tile. Roads override terrain difficulty entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RouteType {
    None,
    AncientRoad,
    ClassicalRoad,
    IndustrialRoad,
    ModernRoad,
}

string_enum!(RouteType {
    None => "none",
    AncientRoad => "ancientRoad",
    ClassicalRoad => "classicalRoad",
    IndustrialRoad => "industrialRoad",
    ModernRoad => "modernRoad",
});

impl RouteType {
    /// Fixed per-tile cost while on this route. Only meaningful for actual
    /// roads; `None` never reaches the cost model.
    pub fn movement_cost(self) -> f64 {
        match self {
            RouteType::None => 200.0,
            RouteType::AncientRoad | RouteType::ClassicalRoad => 1.0,
            RouteType::IndustrialRoad => 0.75,
            RouteType::ModernRoad => 0.5,
        }
    }
}

/// Tile improvement. Only the subset the generator places; everything else
/// belongs to the gameplay layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ImprovementType {
    None,
    GoodyHut,
}

string_enum!(ImprovementType {
    None => "none",
    GoodyHut => "goodyHut",
});

/// River flow bits. A tile owns its north, north-east and south-east edges;
/// each edge carries flow in one of two directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    // flow of a river on the north edge
    East,
    West,
    // flow of a river on the north-east edge
    NorthWest,
    SouthEast,
    // flow of a river on the south-east edge
    NorthEast,
    SouthWest,
}

impl FlowDirection {
    pub fn bit(self) -> u8 {
        match self {
            FlowDirection::East => 1,
            FlowDirection::West => 2,
            FlowDirection::NorthWest => 4,
            FlowDirection::SouthEast => 8,
            FlowDirection::NorthEast => 16,
            FlowDirection::SouthWest => 32,
        }
    }
}
