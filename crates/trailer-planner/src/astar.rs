//! `TimeAwareAStar` — single-vehicle pathfinding whose edge cost combines
//! free-flow travel time with conflict delay from prior reservations.
//!
//! Structurally this is this workspace's Dijkstra (`dijkstra()` /
//! `reconstruct()` in the sibling routing crate) generalized two ways: the
//! priority key gains an admissible heuristic (`f = g + h`), and edge cost
//! is no longer a static array lookup but a call into the conflict
//! estimator, so it depends on what has already been reserved.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use trailer_core::{Coordinate, NodeId, PlannerConfig};
use trailer_graph::Graph;
use trailer_reservation::{ConflictEstimator, ReservationTable};

use crate::error::{PlannerError, PlannerResult};
use crate::plan::TimedNode;
use crate::request::VehicleRequest;

/// One entry in the open set. `Ord` is reversed on `f` (via `f64::total_cmp`,
/// which never panics on the finite values this search produces) so
/// `BinaryHeap`, a max-heap, behaves as the min-heap A* needs.
struct OpenEntry {
    f: f64,
    g: f64,
    t_abs: f64,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for OpenEntry {}
impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for OpenEntry {
    // Reversed on `f` so `BinaryHeap` pops the smallest `f` first. Ties on
    // `f` break on `node` (also reversed, for the same min-first reason) so
    // the pop order is fully deterministic regardless of push order —
    // exact-cost ties are routine with symmetric intersections.
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.total_cmp(&self.f).then_with(|| other.node.cmp(&self.node))
    }
}

pub struct TimeAwareAStar {
    estimator: ConflictEstimator,
    max_expansions: Option<usize>,
    earth_radius_m: f64,
}

impl TimeAwareAStar {
    pub fn new(estimator: ConflictEstimator, max_expansions: Option<usize>, earth_radius_m: f64) -> Self {
        Self { estimator, max_expansions, earth_radius_m }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(ConflictEstimator::from_config(config), config.max_expansions, config.earth_radius_m)
    }

    /// Search `graph` from `start` to `goal` for `request`, against
    /// `reservations`. Returns the timed path (including both endpoints).
    pub fn search(
        &self,
        graph: &Graph,
        reservations: &ReservationTable,
        request: &VehicleRequest,
        start: NodeId,
        goal: NodeId,
    ) -> PlannerResult<Vec<TimedNode>> {
        if !request.is_valid() {
            return Err(PlannerError::InvalidSpeed(request.vehicle));
        }

        let goal_coord = graph.coordinate(goal).ok_or(PlannerError::Unreachable { from: start, to: goal })?;
        let heuristic = |n: NodeId, graph: &Graph| -> f64 {
            graph.coordinate(n).map(|c| c.distance_m(goal_coord, self.earth_radius_m) / request.speed_mps).unwrap_or(0.0)
        };

        if start == goal {
            let coord = graph.coordinate(start).unwrap_or(goal_coord);
            return Ok(vec![TimedNode { node: start, coordinate: coord, time: request.start_time }]);
        }

        let mut best_g: HashMap<NodeId, f64> = HashMap::new();
        let mut best_t_abs: HashMap<NodeId, f64> = HashMap::new();
        let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();

        best_g.insert(start, 0.0);
        best_t_abs.insert(start, request.start_time);
        open.push(OpenEntry { f: heuristic(start, graph), g: 0.0, t_abs: request.start_time, node: start });

        let mut expansions: usize = 0;

        while let Some(current) = open.pop() {
            if current.g > *best_g.get(&current.node).unwrap_or(&f64::INFINITY) {
                continue; // stale entry
            }

            if current.node == goal {
                return Ok(reconstruct(graph, &parent, &best_t_abs, start, goal));
            }

            expansions += 1;
            if let Some(cap) = self.max_expansions {
                if expansions > cap {
                    return Err(PlannerError::BudgetExceeded { to: goal });
                }
            }

            for (neighbor, weight) in graph.neighbors(current.node) {
                let travel = weight / request.speed_mps;
                let t_dep = current.t_abs;
                let t_arr_nowait = t_dep + travel;
                let penalty = self.estimator.estimate(
                    reservations,
                    request.vehicle,
                    current.node,
                    neighbor,
                    t_dep,
                    t_arr_nowait,
                    weight,
                    request.speed_mps,
                    request.length_m,
                );
                let step = travel + penalty;
                let g_neighbor = current.g + step;

                if g_neighbor < *best_g.get(&neighbor).unwrap_or(&f64::INFINITY) {
                    best_g.insert(neighbor, g_neighbor);
                    let t_abs = current.t_abs + step;
                    best_t_abs.insert(neighbor, t_abs);
                    parent.insert(neighbor, current.node);
                    open.push(OpenEntry { f: g_neighbor + heuristic(neighbor, graph), g: g_neighbor, t_abs, node: neighbor });
                }
            }
        }

        Err(PlannerError::Unreachable { from: start, to: goal })
    }
}

fn reconstruct(graph: &Graph, parent: &HashMap<NodeId, NodeId>, t_abs: &HashMap<NodeId, f64>, start: NodeId, goal: NodeId) -> Vec<TimedNode> {
    let mut path = Vec::new();
    let mut cur = goal;
    loop {
        let coordinate: Coordinate = graph.coordinate(cur).expect("visited node must have a coordinate");
        let time = t_abs[&cur];
        path.push(TimedNode { node: cur, coordinate, time });
        if cur == start {
            break;
        }
        cur = parent[&cur];
    }
    path.reverse();
    path
}
