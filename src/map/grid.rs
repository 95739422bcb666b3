use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::hex::{HexDirection, HexPoint};

use super::continents::{Continent, Ocean};
use super::tile::Tile;
use super::types::{FeatureType, MovementCost, RouteType, TerrainType, UnitMovementType};

/// Fractions of each terrain within a sampled neighborhood. Sums to 1.0 over
/// the valid tiles of the area.
#[derive(Debug, Clone, Copy, Default)]
pub struct TileStatistics {
    pub ocean: f64,
    pub shore: f64,
    pub grass: f64,
    pub plains: f64,
    pub desert: f64,
    pub tundra: f64,
    pub snow: f64,
}

/// Rectangular grid of tiles addressed by even-q offset coordinates, plus the
/// derived map-level data (continents, oceans, start positions).
///
/// All coordinate access is bounds-checked; out-of-range points are an error
/// on mutation and a clean `Err`/`false` on queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapModel {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    pub continents: Vec<Continent>,
    pub oceans: Vec<Ocean>,
    pub player_starts: Vec<HexPoint>,
    pub city_state_starts: Vec<HexPoint>,
}

impl MapModel {
    /// Creates a map filled with ocean tiles.
    pub fn new(width: i32, height: i32) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidConfiguration(format!(
                "map dimensions must be positive, got {width}x{height}"
            )));
        }

        let tiles = vec![Tile::new(TerrainType::Ocean); (width * height) as usize];

        Ok(MapModel {
            width,
            height,
            tiles,
            continents: Vec::new(),
            oceans: Vec::new(),
            player_starts: Vec::new(),
            city_state_starts: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn valid(&self, point: HexPoint) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    fn index(&self, point: HexPoint) -> usize {
        (point.y * self.width + point.x) as usize
    }

    pub fn tile(&self, point: HexPoint) -> Result<&Tile, MapError> {
        if !self.valid(point) {
            return Err(self.out_of_bounds(point));
        }
        Ok(&self.tiles[self.index(point)])
    }

    pub fn tile_mut(&mut self, point: HexPoint) -> Result<&mut Tile, MapError> {
        if !self.valid(point) {
            return Err(self.out_of_bounds(point));
        }
        let index = self.index(point);
        Ok(&mut self.tiles[index])
    }

    fn out_of_bounds(&self, point: HexPoint) -> MapError {
        MapError::OutOfBounds {
            x: point.x,
            y: point.y,
            width: self.width,
            height: self.height,
        }
    }

    /// All points of the grid, column by column.
    pub fn points(&self) -> Vec<HexPoint> {
        let mut points = Vec::with_capacity((self.width * self.height) as usize);
        for x in 0..self.width {
            for y in 0..self.height {
                points.push(HexPoint::new(x, y));
            }
        }
        points
    }

    pub fn terrain(&self, point: HexPoint) -> Result<TerrainType, MapError> {
        Ok(self.tile(point)?.terrain)
    }

    pub fn feature(&self, point: HexPoint) -> Result<FeatureType, MapError> {
        Ok(self.tile(point)?.feature)
    }

    /// Land tile with at least one water neighbor.
    pub fn is_coastal_at(&self, point: HexPoint) -> bool {
        let Ok(tile) = self.tile(point) else {
            return false;
        };
        tile.is_land() && self.is_adjacent_to_water(point)
    }

    pub fn is_adjacent_to_water(&self, point: HexPoint) -> bool {
        point
            .neighbors()
            .iter()
            .any(|&neighbor| self.tile(neighbor).is_ok_and(|tile| tile.is_water()))
    }

    pub fn is_adjacent_to_land(&self, point: HexPoint) -> bool {
        point
            .neighbors()
            .iter()
            .any(|&neighbor| self.tile(neighbor).is_ok_and(|tile| tile.is_land()))
    }

    pub fn is_adjacent_to_shore(&self, point: HexPoint) -> bool {
        point.neighbors().iter().any(|&neighbor| {
            self.tile(neighbor)
                .is_ok_and(|tile| tile.terrain == TerrainType::Shore)
        })
    }

    /// Whether any of the six edges of this cell carries a river. The tile
    /// itself owns only three edges; the other three are read from neighbors.
    pub fn river_at(&self, point: HexPoint) -> bool {
        let Ok(tile) = self.tile(point) else {
            return false;
        };

        if tile.is_river_in_north() || tile.is_river_in_north_east() || tile.is_river_in_south_east()
        {
            return true;
        }

        if let Ok(south) = self.tile(point.neighbor(HexDirection::South)) {
            if south.is_river_in_north() {
                return true;
            }
        }
        if let Ok(south_west) = self.tile(point.neighbor(HexDirection::SouthWest)) {
            if south_west.is_river_in_north_east() {
                return true;
            }
        }
        if let Ok(north_west) = self.tile(point.neighbor(HexDirection::NorthWest)) {
            if north_west.is_river_in_south_east() {
                return true;
            }
        }

        false
    }

    /// Whether moving from `point` in `direction` crosses a river edge.
    /// The three edges the tile does not own are read from the target tile.
    pub fn is_river_to_cross(&self, point: HexPoint, direction: HexDirection) -> bool {
        let Ok(tile) = self.tile(point) else {
            return false;
        };

        match direction {
            HexDirection::North => tile.is_river_in_north(),
            HexDirection::NorthEast => tile.is_river_in_north_east(),
            HexDirection::SouthEast => tile.is_river_in_south_east(),
            HexDirection::South => self
                .tile(point.neighbor(direction))
                .is_ok_and(|target| target.is_river_in_north()),
            HexDirection::SouthWest => self
                .tile(point.neighbor(direction))
                .is_ok_and(|target| target.is_river_in_north_east()),
            HexDirection::NorthWest => self
                .tile(point.neighbor(direction))
                .is_ok_and(|target| target.is_river_in_south_east()),
        }
    }

    /// Land with river access or a lake/oasis on or next to it.
    pub fn is_fresh_water_at(&self, point: HexPoint) -> bool {
        let Ok(tile) = self.tile(point) else {
            return false;
        };
        if tile.is_water() {
            return false;
        }

        if self.river_at(point) {
            return true;
        }

        std::iter::once(point)
            .chain(point.neighbors())
            .any(|nearby| {
                self.tile(nearby).is_ok_and(|tile| {
                    tile.feature == FeatureType::Lake || tile.feature == FeatureType::Oasis
                })
            })
    }

    /// Full cost of moving one step from `from` onto `to`.
    ///
    /// Applies the base tile cost, the river-crossing surcharge, and the road
    /// override. A road fixes the step cost regardless of terrain difficulty;
    /// only the oldest roads still pay for river crossings (no bridges).
    pub fn movement_cost(
        &self,
        movement_type: UnitMovementType,
        from: HexPoint,
        to: HexPoint,
    ) -> MovementCost {
        if !from.is_neighbor_of(to) {
            return MovementCost::Impassable;
        }
        let Ok(target) = self.tile(to) else {
            return MovementCost::Impassable;
        };

        let direction = from.direction_towards(to);
        let crossing = self.is_river_to_cross(from, direction);

        if movement_type == UnitMovementType::Walk && target.route != RouteType::None {
            let mut cost = target.route.movement_cost();
            if crossing && target.route == RouteType::AncientRoad {
                cost += 3.0;
            }
            return MovementCost::Moves(cost);
        }

        match target.movement_cost(movement_type) {
            MovementCost::Impassable => MovementCost::Impassable,
            MovementCost::Moves(base) => {
                let surcharge = if crossing { 3.0 } else { 0.0 };
                MovementCost::Moves(base + surcharge)
            }
        }
    }

    /// Terrain mix of the disk of `radius` around `point`, as fractions of
    /// the valid tiles inside it.
    pub fn tile_statistics(&self, point: HexPoint, radius: i32) -> TileStatistics {
        let mut stats = TileStatistics::default();
        let mut count = 0;

        for area_point in point.area_with_radius(radius) {
            let Ok(tile) = self.tile(area_point) else {
                continue;
            };
            count += 1;
            match tile.terrain {
                TerrainType::Ocean => stats.ocean += 1.0,
                TerrainType::Shore => stats.shore += 1.0,
                TerrainType::Grass => stats.grass += 1.0,
                TerrainType::Plains => stats.plains += 1.0,
                TerrainType::Desert => stats.desert += 1.0,
                TerrainType::Tundra => stats.tundra += 1.0,
                TerrainType::Snow => stats.snow += 1.0,
            }
        }

        if count > 0 {
            let total = count as f64;
            stats.ocean /= total;
            stats.shore /= total;
            stats.grass /= total;
            stats.plains /= total;
            stats.desert /= total;
            stats.tundra /= total;
            stats.snow /= total;
        }

        stats
    }

    /// Placement rules for features, checked against the current tile state.
    pub fn can_have_feature(&self, point: HexPoint, feature: FeatureType) -> bool {
        let Ok(tile) = self.tile(point) else {
            return false;
        };
        if tile.feature != FeatureType::None {
            return false;
        }

        match feature {
            FeatureType::None => true,
            FeatureType::Forest => matches!(
                tile.terrain,
                TerrainType::Tundra | TerrainType::Grass | TerrainType::Plains
            ),
            FeatureType::Rainforest => tile.terrain == TerrainType::Plains,
            FeatureType::Floodplains => {
                !tile.is_hills
                    && matches!(
                        tile.terrain,
                        TerrainType::Desert | TerrainType::Grass | TerrainType::Plains
                    )
                    && self.river_at(point)
            }
            FeatureType::Marsh => !tile.is_hills && tile.terrain == TerrainType::Grass,
            FeatureType::Oasis => !tile.is_hills && tile.terrain == TerrainType::Desert,
            FeatureType::Reef | FeatureType::GreatBarrierReef => {
                tile.terrain == TerrainType::Shore
            }
            FeatureType::Ice | FeatureType::Atoll => tile.is_water(),
            FeatureType::Mountains
            | FeatureType::MountEverest
            | FeatureType::MountKilimanjaro => {
                !tile.is_hills
                    && matches!(
                        tile.terrain,
                        TerrainType::Desert
                            | TerrainType::Grass
                            | TerrainType::Plains
                            | TerrainType::Tundra
                            | TerrainType::Snow
                    )
            }
            FeatureType::Lake => !tile.is_hills && tile.is_land(),
        }
    }

    pub fn number_of_land_tiles(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_land()).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<MapModel, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::types::FlowDirection;

    #[test]
    fn new_map_is_all_ocean() {
        let map = MapModel::new(4, 3).unwrap();
        for point in map.points() {
            assert_eq!(map.terrain(point).unwrap(), TerrainType::Ocean);
        }
        assert_eq!(map.points().len(), 12);
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert!(MapModel::new(0, 5).is_err());
        assert!(MapModel::new(5, -1).is_err());
    }

    #[test]
    fn out_of_bounds_access_is_an_error() {
        let mut map = MapModel::new(4, 4).unwrap();
        assert!(map.tile(HexPoint::new(4, 0)).is_err());
        assert!(map.tile(HexPoint::new(0, -1)).is_err());
        assert!(map.tile_mut(HexPoint::new(7, 7)).is_err());
        assert!(map.tile(HexPoint::new(3, 3)).is_ok());
    }

    #[test]
    fn coastal_requires_land_next_to_water() {
        let mut map = MapModel::new(5, 5).unwrap();
        let center = HexPoint::new(2, 2);
        map.tile_mut(center).unwrap().terrain = TerrainType::Grass;

        assert!(map.is_coastal_at(center));
        assert!(!map.is_coastal_at(HexPoint::new(0, 0)));

        for neighbor in center.neighbors() {
            map.tile_mut(neighbor).unwrap().terrain = TerrainType::Plains;
        }
        assert!(!map.is_coastal_at(center));
    }

    #[test]
    fn river_visible_from_both_sides_of_an_edge() {
        let mut map = MapModel::new(6, 6).unwrap();
        let point = HexPoint::new(3, 3);
        map.tile_mut(point)
            .unwrap()
            .set_river_flow(FlowDirection::East);

        // north edge of `point` is the south edge of its north neighbor
        assert!(map.river_at(point));
        assert!(map.river_at(point.neighbor(HexDirection::North)));

        assert!(map.is_river_to_cross(point, HexDirection::North));
        assert!(map.is_river_to_cross(
            point.neighbor(HexDirection::North),
            HexDirection::South
        ));
        assert!(!map.is_river_to_cross(point, HexDirection::SouthEast));
    }

    #[test]
    fn river_crossing_costs_three_extra() {
        let mut map = MapModel::new(6, 6).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = TerrainType::Grass;
        }

        let from = HexPoint::new(3, 3);
        let to = from.neighbor(HexDirection::North);
        assert_eq!(
            map.movement_cost(UnitMovementType::Walk, from, to).moves(),
            Some(1.0)
        );

        map.tile_mut(from)
            .unwrap()
            .set_river_flow(FlowDirection::West);
        assert_eq!(
            map.movement_cost(UnitMovementType::Walk, from, to).moves(),
            Some(4.0)
        );
        // crossing applies in both directions
        assert_eq!(
            map.movement_cost(UnitMovementType::Walk, to, from).moves(),
            Some(4.0)
        );
    }

    #[test]
    fn roads_override_terrain_difficulty() {
        let mut map = MapModel::new(6, 6).unwrap();
        for point in map.points() {
            let tile = map.tile_mut(point).unwrap();
            tile.terrain = TerrainType::Grass;
            tile.is_hills = true;
            tile.feature = FeatureType::Forest;
        }

        let from = HexPoint::new(2, 2);
        let to = from.neighbor(HexDirection::NorthEast);
        assert_eq!(
            map.movement_cost(UnitMovementType::Walk, from, to).moves(),
            Some(4.0)
        );

        map.tile_mut(to).unwrap().route = RouteType::ModernRoad;
        assert_eq!(
            map.movement_cost(UnitMovementType::Walk, from, to).moves(),
            Some(0.5)
        );
    }

    #[test]
    fn only_ancient_roads_pay_for_crossings() {
        let mut map = MapModel::new(6, 6).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = TerrainType::Plains;
        }

        let from = HexPoint::new(3, 3);
        let to = from.neighbor(HexDirection::North);
        map.tile_mut(from)
            .unwrap()
            .set_river_flow(FlowDirection::East);

        map.tile_mut(to).unwrap().route = RouteType::AncientRoad;
        assert_eq!(
            map.movement_cost(UnitMovementType::Walk, from, to).moves(),
            Some(4.0)
        );

        map.tile_mut(to).unwrap().route = RouteType::ClassicalRoad;
        assert_eq!(
            map.movement_cost(UnitMovementType::Walk, from, to).moves(),
            Some(1.0)
        );
    }

    #[test]
    fn non_adjacent_moves_are_rejected() {
        let map = MapModel::new(6, 6).unwrap();
        let cost = map.movement_cost(
            UnitMovementType::Swim,
            HexPoint::new(0, 0),
            HexPoint::new(4, 4),
        );
        assert!(cost.is_impassable());
    }

    #[test]
    fn tile_statistics_fractions_sum_to_one() {
        let mut map = MapModel::new(10, 10).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = if point.x < 5 {
                TerrainType::Grass
            } else {
                TerrainType::Desert
            };
        }

        let stats = map.tile_statistics(HexPoint::new(5, 5), 2);
        let sum = stats.ocean
            + stats.shore
            + stats.grass
            + stats.plains
            + stats.desert
            + stats.tundra
            + stats.snow;
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(stats.grass > 0.0);
        assert!(stats.desert > 0.0);
    }

    #[test]
    fn floodplains_need_a_river() {
        let mut map = MapModel::new(6, 6).unwrap();
        let point = HexPoint::new(3, 3);
        map.tile_mut(point).unwrap().terrain = TerrainType::Desert;

        assert!(!map.can_have_feature(point, FeatureType::Floodplains));
        map.tile_mut(point)
            .unwrap()
            .set_river_flow(FlowDirection::East);
        assert!(map.can_have_feature(point, FeatureType::Floodplains));
    }

    #[test]
    fn json_round_trip_preserves_tiles() {
        let mut map = MapModel::new(5, 4).unwrap();
        let point = HexPoint::new(2, 1);
        {
            let tile = map.tile_mut(point).unwrap();
            tile.terrain = TerrainType::Plains;
            tile.is_hills = true;
            tile.feature = FeatureType::Forest;
            tile.set_river_flow(FlowDirection::SouthEast);
        }
        map.player_starts.push(point);

        let json = map.to_json().unwrap();
        let restored = MapModel::from_json(&json).unwrap();

        assert_eq!(restored.width(), 5);
        assert_eq!(restored.height(), 4);
        let tile = restored.tile(point).unwrap();
        assert_eq!(tile.terrain, TerrainType::Plains);
        assert!(tile.is_hills);
        assert_eq!(tile.feature, FeatureType::Forest);
        assert!(tile.is_river_in_north_east());
        assert_eq!(restored.player_starts, vec![point]);
    }
}
