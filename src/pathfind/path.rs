use serde::{Deserialize, Serialize};

use crate::hex::HexPoint;

/// A found path: the visited points and the cost paid to enter each of them.
///
/// `costs[0]` is always 0.0 (the start is free); `costs[i]` is the cost of
/// the step onto `points[i]`. Both vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexPath {
    points: Vec<HexPoint>,
    costs: Vec<f64>,
}

impl HexPath {
    pub fn new(points: Vec<HexPoint>, costs: Vec<f64>) -> Self {
        debug_assert_eq!(points.len(), costs.len());
        HexPath { points, costs }
    }

    pub fn points(&self) -> &[HexPoint] {
        &self.points
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    /// Total cost of walking the whole path.
    pub fn cost(&self) -> f64 {
        self.costs.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<HexPoint> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<HexPoint> {
        self.points.last().copied()
    }

    pub fn prepend(&mut self, point: HexPoint, cost: f64) {
        self.points.insert(0, point);
        self.costs.insert(0, cost);
    }

    pub fn append(&mut self, point: HexPoint, cost: f64) {
        self.points.push(point);
        self.costs.push(cost);
    }

    /// The same path without its starting point.
    pub fn without_first(&self) -> HexPath {
        HexPath {
            points: self.points.iter().skip(1).copied().collect(),
            costs: self.costs.iter().skip(1).copied().collect(),
        }
    }

    /// The leading `count` points of the path (or all of it if shorter).
    pub fn first_segments(&self, count: usize) -> HexPath {
        HexPath {
            points: self.points.iter().take(count).copied().collect(),
            costs: self.costs.iter().take(count).copied().collect(),
        }
    }

    pub fn reversed(&self) -> HexPath {
        HexPath {
            points: self.points.iter().rev().copied().collect(),
            costs: self.costs.iter().rev().copied().collect(),
        }
    }
}

impl std::fmt::Display for HexPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HexPath(")?;
        for point in &self.points {
            write!(f, "({}, {}), ", point.x, point.y)?;
        }
        write!(f, ")")
    }
}
