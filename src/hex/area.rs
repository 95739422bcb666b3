use std::collections::HashSet;

use super::point::HexPoint;

/// A filled hex disk: a center cell plus every cell within a given radius.
///
/// Set semantics: no duplicates, iteration order unspecified.
#[derive(Debug, Clone)]
pub struct HexArea {
    points: HashSet<HexPoint>,
}

impl HexArea {
    /// Builds the disk by repeated neighbor expansion: radius 0 is the center
    /// alone, radius r is the radius r-1 disk unioned with all its neighbors.
    pub fn new(center: HexPoint, radius: i32) -> Self {
        let mut points: HashSet<HexPoint> = HashSet::new();
        points.insert(center);

        for _ in 0..radius {
            let mut expansion: HashSet<HexPoint> = HashSet::new();
            for point in &points {
                expansion.extend(point.neighbors());
            }
            points.extend(expansion);
        }

        HexArea { points }
    }

    pub fn from_points(points: impl IntoIterator<Item = HexPoint>) -> Self {
        HexArea {
            points: points.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: HexPoint) -> bool {
        self.points.contains(&point)
    }

    pub fn iter(&self) -> impl Iterator<Item = HexPoint> + '_ {
        self.points.iter().copied()
    }
}

impl IntoIterator for HexArea {
    type Item = HexPoint;
    type IntoIter = std::collections::hash_set::IntoIter<HexPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
