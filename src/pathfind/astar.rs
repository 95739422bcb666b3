use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::hex::HexPoint;

use super::data_source::PathfinderDataSource;
use super::path::HexPath;

/// A* search over a [`PathfinderDataSource`].
///
/// The heuristic is the plain hex distance. Roads can make a step cheaper
/// than 1.0, in which case the heuristic overestimates and the result may be
/// slightly longer than optimal; this matches the behavior units expect.
pub struct AStarPathfinder<D> {
    data_source: D,
}

/// Priority queue entry. `Ord` is reversed so the `BinaryHeap` pops the
/// lowest f-score first.
#[derive(Clone, Copy, PartialEq)]
struct State {
    point: HexPoint,
    cost: f64,
    priority: f64,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.cost.total_cmp(&self.cost))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: PathfinderDataSource> AStarPathfinder<D> {
    pub fn new(data_source: D) -> Self {
        AStarPathfinder { data_source }
    }

    fn heuristic(from: HexPoint, goal: HexPoint) -> f64 {
        from.distance(goal) as f64
    }

    /// The cheapest path from `from` to `to`, or `None` if `to` is
    /// unreachable for this data source.
    pub fn shortest_path(&self, from: HexPoint, to: HexPoint) -> Option<HexPath> {
        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<HexPoint, HexPoint> = HashMap::new();
        let mut g_score: HashMap<HexPoint, f64> = HashMap::new();
        let mut closed_set: HashSet<HexPoint> = HashSet::new();

        g_score.insert(from, 0.0);
        open_set.push(State {
            point: from,
            cost: 0.0,
            priority: Self::heuristic(from, to),
        });

        while let Some(State { point: current, .. }) = open_set.pop() {
            if !closed_set.insert(current) {
                continue;
            }

            if current == to {
                return Some(self.reconstruct(&came_from, current));
            }

            let current_g = g_score[&current];

            for neighbor in self.data_source.walkable_adjacent_tiles(current) {
                if closed_set.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current_g + self.data_source.cost_to_move(current, neighbor);

                if tentative_g < *g_score.get(&neighbor).unwrap_or(&f64::INFINITY) {
                    came_from.insert(neighbor, current);
                    g_score.insert(neighbor, tentative_g);
                    open_set.push(State {
                        point: neighbor,
                        cost: tentative_g,
                        priority: tentative_g + Self::heuristic(neighbor, to),
                    });
                }
            }
        }

        None
    }

    fn reconstruct(&self, came_from: &HashMap<HexPoint, HexPoint>, goal: HexPoint) -> HexPath {
        let mut points = vec![goal];
        let mut current = goal;
        while let Some(&previous) = came_from.get(&current) {
            points.push(previous);
            current = previous;
        }
        points.reverse();

        let mut costs = vec![0.0];
        for window in points.windows(2) {
            costs.push(self.data_source.cost_to_move(window[0], window[1]));
        }

        HexPath::new(points, costs)
    }

    pub fn does_path_exist(&self, from: HexPoint, to: HexPoint) -> bool {
        self.shortest_path(from, to).is_some()
    }

    /// Turns needed to walk from `from` to `to` with `moves_per_turn` moves
    /// each turn. A unit with any movement left may always take one more
    /// step, so a single expensive step never stalls forever.
    pub fn turns_to_reach(&self, from: HexPoint, to: HexPoint, moves_per_turn: f64) -> Option<i32> {
        if moves_per_turn <= 0.0 {
            return None;
        }
        if from == to {
            return Some(0);
        }

        let path = self.shortest_path(from, to)?;

        let mut turns = 1;
        let mut remaining = moves_per_turn;
        for &cost in path.costs().iter().skip(1) {
            if remaining <= 0.0 {
                turns += 1;
                remaining = moves_per_turn;
            }
            remaining -= cost;
        }

        Some(turns)
    }
}
