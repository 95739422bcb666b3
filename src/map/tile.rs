use serde::{Deserialize, Serialize};

use super::resources::ResourceType;
use super::types::{
    ClimateZone, FeatureType, FlowDirection, ImprovementType, MovementCost, RouteType, TerrainType,
    UnitMovementType,
};

/// One cell of the map. A tile owns its north, north-east and south-east
/// river edges; the other three edges belong to the respective neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub terrain: TerrainType,
    pub is_hills: bool,
    pub feature: FeatureType,
    pub resource: ResourceType,
    pub resource_quantity: i32,
    pub climate_zone: ClimateZone,
    /// Bitmask of [`FlowDirection`] bits over the three owned edges.
    pub river_value: u8,
    pub river_name: Option<String>,
    pub route: RouteType,
    pub improvement: ImprovementType,
    pub continent_identifier: Option<u8>,
    pub ocean_identifier: Option<u8>,
}

impl Tile {
    pub fn new(terrain: TerrainType) -> Self {
        Tile {
            terrain,
            is_hills: false,
            feature: FeatureType::None,
            resource: ResourceType::None,
            resource_quantity: 0,
            climate_zone: ClimateZone::Temperate,
            river_value: 0,
            river_name: None,
            route: RouteType::None,
            improvement: ImprovementType::None,
            continent_identifier: None,
            ocean_identifier: None,
        }
    }

    pub fn is_water(&self) -> bool {
        self.terrain.is_water()
    }

    pub fn is_land(&self) -> bool {
        self.terrain.is_land()
    }

    pub fn has_feature(&self, feature: FeatureType) -> bool {
        self.feature == feature
    }

    pub fn set_river_flow(&mut self, flow: FlowDirection) {
        self.river_value |= flow.bit();
    }

    pub fn has_river_flow(&self, flow: FlowDirection) -> bool {
        self.river_value & flow.bit() != 0
    }

    /// River on the owned north edge.
    pub fn is_river_in_north(&self) -> bool {
        self.has_river_flow(FlowDirection::East) || self.has_river_flow(FlowDirection::West)
    }

    /// River on the owned north-east edge.
    pub fn is_river_in_north_east(&self) -> bool {
        self.has_river_flow(FlowDirection::NorthWest)
            || self.has_river_flow(FlowDirection::SouthEast)
    }

    /// River on the owned south-east edge.
    pub fn is_river_in_south_east(&self) -> bool {
        self.has_river_flow(FlowDirection::NorthEast)
            || self.has_river_flow(FlowDirection::SouthWest)
    }

    /// Any river on the three owned edges.
    pub fn has_any_river(&self) -> bool {
        self.river_value != 0
    }

    /// Base cost of entering this tile, before river crossings and routes.
    pub fn movement_cost(&self, movement_type: UnitMovementType) -> MovementCost {
        if movement_type == UnitMovementType::Immobile {
            return MovementCost::Impassable;
        }

        let terrain_cost = self.terrain.movement_cost(movement_type);
        let MovementCost::Moves(terrain_moves) = terrain_cost else {
            return MovementCost::Impassable;
        };

        let feature_cost = self.feature.movement_cost(movement_type);
        let MovementCost::Moves(feature_moves) = feature_cost else {
            return MovementCost::Impassable;
        };

        let hills_moves = if self.is_hills { 1.0 } else { 0.0 };

        MovementCost::Moves(terrain_moves + hills_moves + feature_moves)
    }

    pub fn is_impassable(&self, movement_type: UnitMovementType) -> bool {
        self.movement_cost(movement_type).is_impassable()
    }

    /// Whether `resource` could legally sit on this tile. River adjacency
    /// is checked by the caller since the tile does not know its neighbors.
    pub fn can_have_resource(&self, resource: ResourceType, has_river: bool) -> bool {
        if resource == ResourceType::None {
            return true;
        }

        if self.feature == FeatureType::None {
            if self.is_hills && !resource.can_be_placed_on_hills() {
                return false;
            }
            if !self.is_hills
                && self.terrain.is_land()
                && !resource.can_be_placed_on_flatlands()
                && !(resource.can_be_placed_on_river_side() && has_river)
            {
                return false;
            }
            resource.can_be_placed_on_terrain(self.terrain)
        } else {
            resource.can_be_placed_on_feature(self.feature)
                && resource.can_be_placed_on_feature_terrain(self.terrain)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hills_add_one_move() {
        let mut tile = Tile::new(TerrainType::Grass);
        assert_eq!(tile.movement_cost(UnitMovementType::Walk).moves(), Some(1.0));

        tile.is_hills = true;
        assert_eq!(tile.movement_cost(UnitMovementType::Walk).moves(), Some(2.0));
    }

    #[test]
    fn forest_adds_two_moves() {
        let mut tile = Tile::new(TerrainType::Plains);
        tile.feature = FeatureType::Forest;
        assert_eq!(tile.movement_cost(UnitMovementType::Walk).moves(), Some(3.0));
    }

    #[test]
    fn mountains_block_walkers() {
        let mut tile = Tile::new(TerrainType::Tundra);
        tile.feature = FeatureType::Mountains;
        assert!(tile.is_impassable(UnitMovementType::Walk));
    }

    #[test]
    fn water_blocks_walkers_but_not_swimmers() {
        let tile = Tile::new(TerrainType::Ocean);
        assert!(tile.is_impassable(UnitMovementType::Walk));
        assert_eq!(tile.movement_cost(UnitMovementType::Swim).moves(), Some(1.5));
    }

    #[test]
    fn river_edges_map_to_flow_bits() {
        let mut tile = Tile::new(TerrainType::Grass);
        assert!(!tile.has_any_river());

        tile.set_river_flow(FlowDirection::East);
        assert!(tile.is_river_in_north());
        assert!(!tile.is_river_in_north_east());

        tile.set_river_flow(FlowDirection::SouthEast);
        assert!(tile.is_river_in_north_east());
        assert!(!tile.is_river_in_south_east());

        tile.set_river_flow(FlowDirection::SouthWest);
        assert!(tile.is_river_in_south_east());
    }

    #[test]
    fn resource_needs_matching_terrain() {
        let grass = Tile::new(TerrainType::Grass);
        assert!(grass.can_have_resource(ResourceType::Cattle, false));
        assert!(!grass.can_have_resource(ResourceType::Fish, false));

        let mut banana = Tile::new(TerrainType::Plains);
        banana.feature = FeatureType::Rainforest;
        assert!(banana.can_have_resource(ResourceType::Banana, false));
        assert!(!banana.can_have_resource(ResourceType::Cattle, false));
    }

    #[test]
    fn sheep_need_hills() {
        let mut tile = Tile::new(TerrainType::Grass);
        assert!(!tile.can_have_resource(ResourceType::Sheep, false));
        tile.is_hills = true;
        assert!(tile.can_have_resource(ResourceType::Sheep, false));
    }
}
