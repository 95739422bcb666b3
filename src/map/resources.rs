use serde::{Deserialize, Serialize};

use super::types::{FeatureType, TerrainType};

/// Broad category a resource belongs to; drives placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceUsage {
    Bonus,
    Luxury,
    Strategic,
}

/// Static placement data for one resource.
pub(crate) struct ResourceTypeData {
    pub usage: ResourceUsage,
    /// Lower numbers are placed first.
    pub placement_order: i32,
    /// Target count on a standard-size map before scaling and variance.
    pub base_amount: i32,
    /// Random variance applied to the target count, in percent.
    pub variance_percent: i32,
    pub place_on_hills: bool,
    pub place_on_flatlands: bool,
    pub place_on_river_side: bool,
    pub place_on_terrains: &'static [TerrainType],
    pub place_on_features: &'static [FeatureType],
    /// Terrains allowed underneath the features above.
    pub place_on_feature_terrains: &'static [TerrainType],
}

/// A placeable map resource. `None` is the explicit empty state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ResourceType {
    None,
    // bonus
    Banana,
    Cattle,
    Copper,
    Crab,
    Deer,
    Fish,
    Rice,
    Sheep,
    Stone,
    Wheat,
    // luxury
    Furs,
    Marble,
    Pearls,
    Salt,
    Whales,
    Wine,
    // strategic
    Aluminum,
    Coal,
    Horses,
    Iron,
    Niter,
    Oil,
    Uranium,
}

string_enum!(ResourceType {
    None => "none",
    Banana => "banana",
    Cattle => "cattle",
    Copper => "copper",
    Crab => "crab",
    Deer => "deer",
    Fish => "fish",
    Rice => "rice",
    Sheep => "sheep",
    Stone => "stone",
    Wheat => "wheat",
    Furs => "furs",
    Marble => "marble",
    Pearls => "pearls",
    Salt => "salt",
    Whales => "whales",
    Wine => "wine",
    Aluminum => "aluminum",
    Coal => "coal",
    Horses => "horses",
    Iron => "iron",
    Niter => "niter",
    Oil => "oil",
    Uranium => "uranium",
});

impl ResourceType {
    pub const ALL: [ResourceType; 23] = [
        ResourceType::Banana,
        ResourceType::Cattle,
        ResourceType::Copper,
        ResourceType::Crab,
        ResourceType::Deer,
        ResourceType::Fish,
        ResourceType::Rice,
        ResourceType::Sheep,
        ResourceType::Stone,
        ResourceType::Wheat,
        ResourceType::Furs,
        ResourceType::Marble,
        ResourceType::Pearls,
        ResourceType::Salt,
        ResourceType::Whales,
        ResourceType::Wine,
        ResourceType::Aluminum,
        ResourceType::Coal,
        ResourceType::Horses,
        ResourceType::Iron,
        ResourceType::Niter,
        ResourceType::Oil,
        ResourceType::Uranium,
    ];

    pub fn usage(self) -> ResourceUsage {
        self.data().usage
    }

    pub fn placement_order(self) -> i32 {
        self.data().placement_order
    }

    pub fn base_amount(self) -> i32 {
        self.data().base_amount
    }

    pub fn variance_percent(self) -> i32 {
        self.data().variance_percent
    }

    /// Quantity stamped on a tile when this resource is placed there.
    pub fn placed_quantity(self) -> i32 {
        match self {
            ResourceType::Horses
            | ResourceType::Iron
            | ResourceType::Niter
            | ResourceType::Aluminum => 2,
            ResourceType::Oil | ResourceType::Coal | ResourceType::Uranium => 3,
            ResourceType::None => 0,
            _ => 1,
        }
    }

    pub fn can_be_placed_on_hills(self) -> bool {
        self.data().place_on_hills
    }

    pub fn can_be_placed_on_flatlands(self) -> bool {
        self.data().place_on_flatlands
    }

    pub fn can_be_placed_on_river_side(self) -> bool {
        self.data().place_on_river_side
    }

    pub fn can_be_placed_on_terrain(self, terrain: TerrainType) -> bool {
        self.data().place_on_terrains.contains(&terrain)
    }

    pub fn can_be_placed_on_feature(self, feature: FeatureType) -> bool {
        self.data().place_on_features.contains(&feature)
    }

    pub fn can_be_placed_on_feature_terrain(self, terrain: TerrainType) -> bool {
        self.data().place_on_feature_terrains.contains(&terrain)
    }

    fn data(self) -> ResourceTypeData {
        use FeatureType as F;
        use TerrainType as T;

        match self {
            ResourceType::None => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: -1,
                base_amount: 0,
                variance_percent: 0,
                place_on_hills: false,
                place_on_flatlands: false,
                place_on_river_side: false,
                place_on_terrains: &[],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            // bonus
            ResourceType::Wheat => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 18,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: true,
                place_on_terrains: &[T::Plains],
                place_on_features: &[F::Floodplains],
                place_on_feature_terrains: &[T::Desert, T::Plains],
            },
            ResourceType::Rice => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 14,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: true,
                place_on_terrains: &[T::Grass],
                place_on_features: &[F::Marsh],
                place_on_feature_terrains: &[T::Grass],
            },
            ResourceType::Cattle => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 22,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: true,
                place_on_terrains: &[T::Grass],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Sheep => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 20,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: false,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass, T::Plains, T::Desert, T::Tundra],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Deer => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 16,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Tundra],
                place_on_features: &[F::Forest],
                place_on_feature_terrains: &[T::Grass, T::Plains, T::Tundra, T::Snow],
            },
            ResourceType::Stone => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 12,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Copper => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 10,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: false,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass, T::Plains, T::Desert, T::Tundra],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Banana => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 8,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[],
                place_on_features: &[F::Rainforest],
                place_on_feature_terrains: &[T::Plains],
            },
            ResourceType::Fish => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 36,
                variance_percent: 10,
                place_on_hills: false,
                place_on_flatlands: false,
                place_on_river_side: false,
                place_on_terrains: &[T::Shore],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Crab => ResourceTypeData {
                usage: ResourceUsage::Bonus,
                placement_order: 4,
                base_amount: 8,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: false,
                place_on_river_side: false,
                place_on_terrains: &[T::Shore],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            // luxury
            ResourceType::Wine => ResourceTypeData {
                usage: ResourceUsage::Luxury,
                placement_order: 3,
                base_amount: 12,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass, T::Plains],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Furs => ResourceTypeData {
                usage: ResourceUsage::Luxury,
                placement_order: 3,
                base_amount: 12,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Tundra],
                place_on_features: &[F::Forest],
                place_on_feature_terrains: &[T::Grass, T::Plains, T::Tundra],
            },
            ResourceType::Salt => ResourceTypeData {
                usage: ResourceUsage::Luxury,
                placement_order: 3,
                base_amount: 10,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Plains, T::Desert, T::Tundra],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Marble => ResourceTypeData {
                usage: ResourceUsage::Luxury,
                placement_order: 3,
                base_amount: 10,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass, T::Plains],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Pearls => ResourceTypeData {
                usage: ResourceUsage::Luxury,
                placement_order: 3,
                base_amount: 10,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: false,
                place_on_river_side: false,
                place_on_terrains: &[T::Shore],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Whales => ResourceTypeData {
                usage: ResourceUsage::Luxury,
                placement_order: 3,
                base_amount: 10,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: false,
                place_on_river_side: false,
                place_on_terrains: &[T::Shore, T::Ocean],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            // strategic
            ResourceType::Iron => ResourceTypeData {
                usage: ResourceUsage::Strategic,
                placement_order: 0,
                base_amount: 12,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass, T::Plains, T::Desert, T::Tundra, T::Snow],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Horses => ResourceTypeData {
                usage: ResourceUsage::Strategic,
                placement_order: 1,
                base_amount: 14,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass, T::Plains],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Niter => ResourceTypeData {
                usage: ResourceUsage::Strategic,
                placement_order: 2,
                base_amount: 8,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass, T::Plains, T::Desert, T::Tundra],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Coal => ResourceTypeData {
                usage: ResourceUsage::Strategic,
                placement_order: 2,
                base_amount: 10,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: false,
                place_on_river_side: false,
                place_on_terrains: &[T::Grass, T::Plains],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Aluminum => ResourceTypeData {
                usage: ResourceUsage::Strategic,
                placement_order: 2,
                base_amount: 8,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: true,
                place_on_river_side: false,
                place_on_terrains: &[T::Plains, T::Desert],
                place_on_features: &[],
                place_on_feature_terrains: &[],
            },
            ResourceType::Oil => ResourceTypeData {
                usage: ResourceUsage::Strategic,
                placement_order: 3,
                base_amount: 8,
                variance_percent: 25,
                place_on_hills: false,
                place_on_flatlands: true,
                place_on_river_side: true,
                place_on_terrains: &[T::Desert, T::Tundra, T::Snow, T::Shore],
                place_on_features: &[F::Rainforest, F::Marsh],
                place_on_feature_terrains: &[T::Grass, T::Plains],
            },
            ResourceType::Uranium => ResourceTypeData {
                usage: ResourceUsage::Strategic,
                placement_order: 3,
                base_amount: 6,
                variance_percent: 25,
                place_on_hills: true,
                place_on_flatlands: true,
                place_on_river_side: true,
                place_on_terrains: &[T::Grass, T::Plains, T::Desert, T::Tundra, T::Snow],
                place_on_features: &[F::Rainforest, F::Marsh, F::Forest],
                place_on_feature_terrains: &[T::Grass, T::Plains],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_has_somewhere_to_go() {
        for resource in ResourceType::ALL {
            let data = resource.data();
            assert!(
                !data.place_on_terrains.is_empty() || !data.place_on_features.is_empty(),
                "{resource} has no valid placement"
            );
        }
    }

    #[test]
    fn strategic_quantities() {
        assert_eq!(ResourceType::Iron.placed_quantity(), 2);
        assert_eq!(ResourceType::Coal.placed_quantity(), 3);
        assert_eq!(ResourceType::Wheat.placed_quantity(), 1);
        assert_eq!(ResourceType::None.placed_quantity(), 0);
    }

    #[test]
    fn serde_round_trip() {
        for resource in ResourceType::ALL {
            let json = serde_json::to_string(&resource).unwrap();
            let back: ResourceType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, resource);
        }
    }
}
