use crate::hex::HexPoint;
use crate::map::{FeatureType, MapModel, MovementCost, TerrainType, UnitMovementType};

/// Cost a data source reports for an edge it refused to offer. High enough
/// that no finished path ever prefers it.
pub const UNREACHABLE_COST: f64 = 200.0;

/// Graph view the pathfinder searches over. Implementations decide which
/// neighbors are reachable and what each step costs.
pub trait PathfinderDataSource {
    /// Neighbors of `from` that the searched unit may step onto.
    fn walkable_adjacent_tiles(&self, from: HexPoint) -> Vec<HexPoint>;

    /// Cost of the step from `from` onto the adjacent `to`.
    fn cost_to_move(&self, from: HexPoint, to: HexPoint) -> f64;
}

/// Knobs for [`MoveTypeIgnoreUnitsDataSource`].
#[derive(Debug, Clone, Copy)]
pub struct MoveTypeIgnoreUnitsOptions {
    /// Carried for visibility-aware callers; this source searches the whole
    /// map either way.
    pub ignore_sight: bool,
    /// Walkers may end up on ocean tiles (late-game embarkation tech).
    pub can_enter_ocean: bool,
    /// Walkers may step onto passable water tiles.
    pub can_embark: bool,
}

impl Default for MoveTypeIgnoreUnitsOptions {
    fn default() -> Self {
        MoveTypeIgnoreUnitsOptions {
            ignore_sight: true,
            can_enter_ocean: false,
            can_embark: false,
        }
    }
}

/// Movement-type based graph view that ignores units on the map.
pub struct MoveTypeIgnoreUnitsDataSource<'a> {
    map: &'a MapModel,
    movement_type: UnitMovementType,
    options: MoveTypeIgnoreUnitsOptions,
}

impl<'a> MoveTypeIgnoreUnitsDataSource<'a> {
    pub fn new(
        map: &'a MapModel,
        movement_type: UnitMovementType,
        options: MoveTypeIgnoreUnitsOptions,
    ) -> Self {
        MoveTypeIgnoreUnitsDataSource {
            map,
            movement_type,
            options,
        }
    }

    /// Embarked walkers pay swim costs while on water.
    fn effective_type(&self, target_is_water: bool) -> UnitMovementType {
        if self.movement_type == UnitMovementType::Walk
            && target_is_water
            && (self.options.can_embark || self.options.can_enter_ocean)
        {
            UnitMovementType::Swim
        } else {
            self.movement_type
        }
    }
}

impl PathfinderDataSource for MoveTypeIgnoreUnitsDataSource<'_> {
    fn walkable_adjacent_tiles(&self, from: HexPoint) -> Vec<HexPoint> {
        let mut walkable = Vec::new();

        for neighbor in from.neighbors() {
            let Ok(to_tile) = self.map.tile(neighbor) else {
                continue;
            };

            if self.movement_type == UnitMovementType::Walk {
                if to_tile.terrain == TerrainType::Ocean && !self.options.can_enter_ocean {
                    continue;
                }
                if to_tile.is_water()
                    && self.options.can_embark
                    && to_tile.is_impassable(UnitMovementType::Swim)
                {
                    continue;
                }
                if to_tile.is_land() && to_tile.is_impassable(UnitMovementType::Walk) {
                    continue;
                }
            } else {
                if to_tile.terrain == TerrainType::Ocean && !self.options.can_enter_ocean {
                    continue;
                }
                if to_tile.is_water() && to_tile.is_impassable(UnitMovementType::Swim) {
                    continue;
                }
            }

            let effective = self.effective_type(to_tile.is_water());
            if self.map.movement_cost(effective, from, neighbor).is_impassable() {
                continue;
            }

            walkable.push(neighbor);
        }

        walkable
    }

    fn cost_to_move(&self, from: HexPoint, to: HexPoint) -> f64 {
        let target_is_water = self.map.tile(to).is_ok_and(|tile| tile.is_water());
        let effective = self.effective_type(target_is_water);

        match self.map.movement_cost(effective, from, to) {
            MovementCost::Moves(moves) => moves,
            MovementCost::Impassable => UNREACHABLE_COST,
        }
    }
}

/// Graph view for city border growth. Every valid tile is reachable; the
/// cost expresses how hard a tile is to claim rather than to walk.
pub struct InfluenceDataSource<'a> {
    map: &'a MapModel,
}

impl<'a> InfluenceDataSource<'a> {
    pub fn new(map: &'a MapModel) -> Self {
        InfluenceDataSource { map }
    }
}

impl PathfinderDataSource for InfluenceDataSource<'_> {
    fn walkable_adjacent_tiles(&self, from: HexPoint) -> Vec<HexPoint> {
        from.neighbors()
            .into_iter()
            .filter(|&neighbor| self.map.valid(neighbor))
            .collect()
    }

    fn cost_to_move(&self, from: HexPoint, to: HexPoint) -> f64 {
        let Ok(to_tile) = self.map.tile(to) else {
            return UNREACHABLE_COST;
        };

        let mut cost = 0;

        let direction = from.direction_towards(to);
        if self.map.is_river_to_cross(from, direction) {
            cost += 1;
        }

        if to_tile.is_hills {
            cost += 2;
        } else if to_tile.has_feature(FeatureType::Mountains) {
            cost += 3;
        } else {
            cost += 1;
            if to_tile.feature != FeatureType::None {
                cost += 1;
            }
        }

        cost.max(1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hex::HexDirection;
    use crate::map::FlowDirection;

    fn grass_map() -> MapModel {
        let mut map = MapModel::new(8, 8).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = TerrainType::Grass;
        }
        map
    }

    #[test]
    fn walkers_do_not_get_water_neighbors() {
        let mut map = grass_map();
        let point = HexPoint::new(4, 4);
        let blocked = point.neighbor(HexDirection::North);
        map.tile_mut(blocked).unwrap().terrain = TerrainType::Shore;

        let source = MoveTypeIgnoreUnitsDataSource::new(
            &map,
            UnitMovementType::Walk,
            MoveTypeIgnoreUnitsOptions::default(),
        );
        let walkable = source.walkable_adjacent_tiles(point);
        assert!(!walkable.contains(&blocked));
        assert_eq!(walkable.len(), 5);
    }

    #[test]
    fn embarking_opens_shore_but_not_ocean() {
        let mut map = grass_map();
        let point = HexPoint::new(4, 4);
        let shore = point.neighbor(HexDirection::North);
        let ocean = point.neighbor(HexDirection::South);
        map.tile_mut(shore).unwrap().terrain = TerrainType::Shore;
        map.tile_mut(ocean).unwrap().terrain = TerrainType::Ocean;

        let options = MoveTypeIgnoreUnitsOptions {
            can_embark: true,
            ..MoveTypeIgnoreUnitsOptions::default()
        };
        let source = MoveTypeIgnoreUnitsDataSource::new(&map, UnitMovementType::Walk, options);
        let walkable = source.walkable_adjacent_tiles(point);
        assert!(walkable.contains(&shore));
        assert!(!walkable.contains(&ocean));
    }

    #[test]
    fn sight_flag_does_not_change_the_graph() {
        let map = grass_map();
        let point = HexPoint::new(4, 4);

        let all_seen = MoveTypeIgnoreUnitsDataSource::new(
            &map,
            UnitMovementType::Walk,
            MoveTypeIgnoreUnitsOptions::default(),
        );
        let sight_limited = MoveTypeIgnoreUnitsDataSource::new(
            &map,
            UnitMovementType::Walk,
            MoveTypeIgnoreUnitsOptions {
                ignore_sight: false,
                ..MoveTypeIgnoreUnitsOptions::default()
            },
        );

        assert_eq!(
            all_seen.walkable_adjacent_tiles(point),
            sight_limited.walkable_adjacent_tiles(point)
        );
    }

    #[test]
    fn swimmers_stay_off_land() {
        let mut map = MapModel::new(8, 8).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = TerrainType::Shore;
        }
        let point = HexPoint::new(4, 4);
        let land = point.neighbor(HexDirection::NorthEast);
        map.tile_mut(land).unwrap().terrain = TerrainType::Grass;

        let options = MoveTypeIgnoreUnitsOptions {
            can_enter_ocean: true,
            ..MoveTypeIgnoreUnitsOptions::default()
        };
        let source = MoveTypeIgnoreUnitsDataSource::new(&map, UnitMovementType::Swim, options);
        let walkable = source.walkable_adjacent_tiles(point);
        assert!(!walkable.contains(&land));
    }

    #[test]
    fn reefs_block_swimmers() {
        let mut map = MapModel::new(8, 8).unwrap();
        for point in map.points() {
            map.tile_mut(point).unwrap().terrain = TerrainType::Shore;
        }
        let point = HexPoint::new(4, 4);
        let reef = point.neighbor(HexDirection::SouthEast);
        map.tile_mut(reef).unwrap().feature = FeatureType::Reef;

        assert!(
            map.movement_cost(UnitMovementType::Swim, point, reef)
                .is_impassable()
        );

        let source = MoveTypeIgnoreUnitsDataSource::new(
            &map,
            UnitMovementType::Swim,
            MoveTypeIgnoreUnitsOptions::default(),
        );
        assert!(!source.walkable_adjacent_tiles(point).contains(&reef));
    }

    #[test]
    fn influence_cost_has_a_floor_of_one() {
        let map = grass_map();
        let source = InfluenceDataSource::new(&map);
        let from = HexPoint::new(4, 4);
        let to = from.neighbor(HexDirection::North);
        assert_eq!(source.cost_to_move(from, to), 1.0);
    }

    #[test]
    fn influence_prefers_flat_over_hills_and_rivers() {
        let mut map = grass_map();
        let from = HexPoint::new(4, 4);
        let hilly = from.neighbor(HexDirection::NorthEast);
        map.tile_mut(hilly).unwrap().is_hills = true;
        map.tile_mut(from)
            .unwrap()
            .set_river_flow(FlowDirection::East);

        let source = InfluenceDataSource::new(&map);
        assert_eq!(source.cost_to_move(from, hilly), 2.0);
        assert_eq!(
            source.cost_to_move(from, from.neighbor(HexDirection::North)),
            2.0
        );
    }
}
