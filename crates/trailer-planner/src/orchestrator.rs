//! `FleetOrchestrator` — builds the base graph, projects every request onto
//! a per-session working copy, then plans vehicles sequentially in
//! ascending start-time order, extending the reservation table after each
//! success.
//!
//! Structurally this mirrors this workspace's `Sim::process_tick` phased
//! loop (arrivals → wake → intent → apply) collapsed to a single pass: here
//! there is no clock to advance, so "projection" replaces "arrivals/wake"
//! and "plan + extend reservations" replaces "intent + apply", run once per
//! request instead of once per tick.

use trailer_core::PlannerConfig;
use trailer_graph::{Graph, GraphBuilder, Projector, RoadFeature};
use trailer_reservation::ReservationTable;

use crate::astar::TimeAwareAStar;
use crate::error::PlannerError;
use crate::plan::Plan;
use crate::request::VehicleRequest;

pub struct FleetOrchestrator {
    config: PlannerConfig,
}

impl FleetOrchestrator {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Plan every request in `requests` against the graph built from
    /// `features`. Returns one [`Plan`] per request: projection-failed
    /// requests are emitted first (in input order, as step 3 of the
    /// algorithm encounters them), followed by the remaining requests in
    /// ascending-start-time (priority) order.
    pub fn plan_all(&self, features: &[RoadFeature], requests: &[VehicleRequest]) -> Vec<Plan> {
        let builder = GraphBuilder::from_config(&self.config);
        let base_graph = builder.build(features);

        if base_graph.is_empty() {
            return requests.iter().map(|r| failed(r.vehicle, PlannerError::NoGraph)).collect();
        }

        let mut working_graph: Graph = base_graph.clone();
        let projector = Projector::from_config(&self.config);

        let mut failed_plans = Vec::new();
        let mut projected: Vec<(usize, &VehicleRequest, trailer_core::NodeId, trailer_core::NodeId)> = Vec::new();

        for (idx, request) in requests.iter().enumerate() {
            if !request.is_valid() {
                failed_plans.push(failed(request.vehicle, PlannerError::InvalidSpeed(request.vehicle)));
                continue;
            }
            let start = projector.project(&mut working_graph, request.origin);
            let end = projector.project(&mut working_graph, request.destination);
            match (start, end) {
                (Some(s), Some(e)) => projected.push((idx, request, s.node, e.node)),
                _ => failed_plans.push(failed(request.vehicle, PlannerError::ProjectionFailed(request.vehicle))),
            }
        }

        // Stable sort by ascending start time preserves input order on ties.
        projected.sort_by(|(_, a, _, _), (_, b, _, _)| a.start_time.total_cmp(&b.start_time));

        let astar = TimeAwareAStar::from_config(&self.config);
        let mut reservations = ReservationTable::new();
        let mut sorted_plans = Vec::with_capacity(projected.len());

        for (_, request, start_node, end_node) in projected {
            match astar.search(&working_graph, &reservations, request, start_node, end_node) {
                Ok(path) => {
                    extend_reservations(&mut reservations, &working_graph, &self.config, request, &path);
                    sorted_plans.push(Plan::success(request.vehicle, path));
                }
                Err(e) => sorted_plans.push(failed(request.vehicle, e)),
            }
        }

        failed_plans.into_iter().chain(sorted_plans).collect()
    }
}

/// Converts an internal failure into the corresponding vehicle's output
/// plan. `err` names which failure occurred but is not otherwise inspected:
/// no `PlannerError` variant escapes [`crate::plan`] as a `Result::Err`;
/// this is the single place that boundary is enforced.
fn failed(vehicle: trailer_core::VehicleId, err: PlannerError) -> Plan {
    let _ = err;
    Plan::failed(vehicle)
}

fn extend_reservations(
    table: &mut ReservationTable,
    graph: &Graph,
    config: &PlannerConfig,
    request: &VehicleRequest,
    path: &[crate::plan::TimedNode],
) {
    if path.len() < 2 {
        return;
    }
    let half_window = config.node_safety_window_seconds / 2.0;
    for hop in path.windows(2) {
        let a = hop[0];
        let b = hop[1];
        let weight = graph.edge_weight(a.node, b.node).unwrap_or_else(|| a.coordinate.distance_m(b.coordinate, config.earth_radius_m));
        let exit = a.time + (weight + request.length_m) / request.speed_mps;
        table.reserve_segment(request.vehicle, a.node, b.node, a.time, exit);
        table.reserve_node(request.vehicle, a.node, a.time - half_window, a.time + config.node_clearance_seconds + half_window);
    }
    let last = path[path.len() - 1];
    table.reserve_node(request.vehicle, last.node, last.time - half_window, last.time + config.node_clearance_seconds + half_window);
}
