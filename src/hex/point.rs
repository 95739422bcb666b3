use serde::{Deserialize, Serialize};

use super::area::HexArea;
use super::direction::HexDirection;

/// Pixel position of a hex cell under the fixed screen projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

/// Hex cell width/height of the screen projection, in pixels.
const HEX_SIZE: (f64, f64) = (36.0, 26.0);

/// Pixel origin the projection is anchored at.
const HEX_ORIGIN: (i32, i32) = (270, 470);

/// Cube coordinate, the intermediate form for distance and neighbor math.
///
/// Invariant: `q + r + s == 0`. Never stored on the map; tiles are addressed
/// by [`HexPoint`] only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexCube {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl HexCube {
    pub fn new(q: i32, r: i32, s: i32) -> Self {
        HexCube { q, r, s }
    }

    pub fn mul(self, factor: i32) -> HexCube {
        HexCube::new(self.q * factor, self.r * factor, self.s * factor)
    }

    pub fn add(self, right: HexCube) -> HexCube {
        HexCube::new(self.q + right.q, self.r + right.r, self.s + right.s)
    }

    /// Chebyshev distance in cube space.
    pub fn distance(self, other: HexCube) -> i32 {
        (self.q - other.q)
            .abs()
            .max((self.r - other.r).abs())
            .max((self.s - other.s).abs())
    }

    /// Projects this cell onto the screen plane (flat-top layout).
    pub fn to_screen(self) -> ScreenPoint {
        let f0 = 3.0 / 2.0;
        let f2 = f64::sqrt(3.0) / 2.0;
        let f3 = f64::sqrt(3.0);

        let x = (f0 * self.q as f64 * HEX_SIZE.0) as i32;
        let y = ((f2 * self.q as f64 + f3 * self.r as f64) * HEX_SIZE.1) as i32;

        ScreenPoint {
            x: x + HEX_ORIGIN.0,
            y: y + HEX_ORIGIN.1,
        }
    }
}

impl From<HexPoint> for HexCube {
    /// Even-q offset to cube.
    fn from(point: HexPoint) -> Self {
        let q = point.x - (point.y + (point.y & 1)) / 2;
        let s = point.y;
        HexCube::new(q, -q - s, s)
    }
}

/// Offset ("even-q") grid coordinate addressing a cell in the rectangular
/// storage array. Valid on a map when `0 <= x < width` and `0 <= y < height`;
/// geometry operations themselves are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexPoint {
    pub x: i32,
    pub y: i32,
}

impl From<HexCube> for HexPoint {
    /// Cube to even-q offset; exact inverse of `HexCube::from`.
    fn from(cube: HexCube) -> Self {
        let x = cube.q + (cube.s + (cube.s & 1)) / 2;
        HexPoint::new(x, cube.s)
    }
}

impl HexPoint {
    pub fn new(x: i32, y: i32) -> Self {
        HexPoint { x, y }
    }

    /// The cell `distance` steps away in `direction`, via cube translation.
    /// Not bounds-checked; callers validate against the map separately.
    pub fn neighbor_in_distance(self, direction: HexDirection, distance: i32) -> HexPoint {
        let translation = direction.cube_direction().mul(distance);
        HexPoint::from(HexCube::from(self).add(translation))
    }

    pub fn neighbor(self, direction: HexDirection) -> HexPoint {
        self.neighbor_in_distance(direction, 1)
    }

    /// The six unit neighbors in N, NE, SE, S, SW, NW order. Several consumers
    /// index into this by direction, so the order is part of the contract.
    pub fn neighbors(self) -> [HexPoint; 6] {
        [
            self.neighbor(HexDirection::North),
            self.neighbor(HexDirection::NorthEast),
            self.neighbor(HexDirection::SouthEast),
            self.neighbor(HexDirection::South),
            self.neighbor(HexDirection::SouthWest),
            self.neighbor(HexDirection::NorthWest),
        ]
    }

    pub fn is_neighbor_of(self, other: HexPoint) -> bool {
        self.neighbors().contains(&other)
    }

    /// Hex-grid distance to `target` (number of steps).
    pub fn distance(self, target: HexPoint) -> i32 {
        HexCube::from(self).distance(HexCube::from(target))
    }

    /// Direction from this cell towards `target`.
    ///
    /// Exact for unit neighbors. For anything further away this falls back to
    /// bucketing the screen-space angle into six sectors, which is a "mostly
    /// in this direction" approximation rather than a minimal-error bearing.
    pub fn direction_towards(self, target: HexPoint) -> HexDirection {
        for direction in HexDirection::ALL {
            if self.neighbor(direction) == target {
                return direction;
            }
        }

        Self::degrees_to_direction(Self::screen_angle(self, target))
    }

    pub fn to_screen(self) -> ScreenPoint {
        HexCube::from(self).to_screen()
    }

    /// Integer angle in degrees of the screen-space delta between two cells.
    fn screen_angle(from: HexPoint, towards: HexPoint) -> i32 {
        let from_screen = from.to_screen();
        let towards_screen = towards.to_screen();

        let delta_x = (towards_screen.x - from_screen.x) as f64;
        let delta_y = (towards_screen.y - from_screen.y) as f64;

        (delta_x.atan2(delta_y).to_degrees()) as i32
    }

    /// Buckets an angle into one of six 60-degree sectors with boundaries at
    /// 30/90/150/210/270/330 degrees. The boundaries are kept exactly as the
    /// callers expect them; they are not symmetric around the true neighbor
    /// bearings.
    fn degrees_to_direction(angle: i32) -> HexDirection {
        let angle = if angle < 0 { angle + 360 } else { angle };

        match angle {
            31..=90 => HexDirection::NorthEast,
            91..=150 => HexDirection::SouthEast,
            151..=210 => HexDirection::South,
            211..=270 => HexDirection::SouthWest,
            271..=330 => HexDirection::NorthWest,
            _ => HexDirection::North,
        }
    }

    /// The filled hex disk of the given radius around this cell.
    pub fn area_with_radius(self, radius: i32) -> HexArea {
        HexArea::new(self, radius)
    }
}

impl std::fmt::Display for HexPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HexPoint({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_round_trip() {
        for x in 0..20 {
            for y in 0..20 {
                let point = HexPoint::new(x, y);
                assert_eq!(HexPoint::from(HexCube::from(point)), point);
            }
        }
    }

    #[test]
    fn cube_invariant_holds() {
        for x in -5..15 {
            for y in -5..15 {
                let cube = HexCube::from(HexPoint::new(x, y));
                assert_eq!(cube.q + cube.r + cube.s, 0);
            }
        }
    }

    #[test]
    fn neighbor_and_opposite_cancel() {
        for x in 0..10 {
            for y in 0..10 {
                let point = HexPoint::new(x, y);
                for direction in HexDirection::ALL {
                    assert_eq!(
                        point.neighbor(direction).neighbor(direction.opposite()),
                        point,
                        "{point} via {direction:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn neighbors_are_all_distance_one() {
        let point = HexPoint::new(5, 5);
        for neighbor in point.neighbors() {
            assert_eq!(point.distance(neighbor), 1);
        }
    }

    #[test]
    fn distance_is_a_metric() {
        let points = [
            HexPoint::new(0, 0),
            HexPoint::new(3, 1),
            HexPoint::new(7, 8),
            HexPoint::new(2, 9),
        ];

        for p in points {
            assert_eq!(p.distance(p), 0);
            for q in points {
                assert_eq!(p.distance(q), q.distance(p));
                for r in points {
                    assert!(p.distance(r) <= p.distance(q) + q.distance(r));
                }
            }
        }
    }

    #[test]
    fn direction_towards_unit_neighbor_is_exact() {
        let point = HexPoint::new(4, 4);
        for direction in HexDirection::ALL {
            let neighbor = point.neighbor(direction);
            assert_eq!(point.direction_towards(neighbor), direction);
        }
    }

    #[test]
    fn direction_towards_far_point_returns_some_sector() {
        // Approximation only: assert it resolves, not that it is a minimal-
        // error bearing.
        let from = HexPoint::new(2, 2);
        let to = HexPoint::new(9, 5);
        let _ = from.direction_towards(to);
    }
}
