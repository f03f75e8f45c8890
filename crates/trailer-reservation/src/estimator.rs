//! `ConflictEstimator` — estimates the delay a candidate edge traversal
//! would incur against an existing [`crate::ReservationTable`].

use trailer_core::{NodeId, PlannerConfig, VehicleId};

use crate::occupation::overlaps;
use crate::table::ReservationTable;

/// Holds the tunables a [`PlannerConfig`] supplies for conflict scoring, so
/// the hot path (A* relaxation) doesn't re-read the config record per edge.
pub struct ConflictEstimator {
    node_clearance_seconds: f64,
    node_safety_window_seconds: f64,
    inconvenience_penalty_seconds: f64,
    head_on_penalty_seconds: f64,
}

impl ConflictEstimator {
    pub fn new(
        node_clearance_seconds: f64,
        node_safety_window_seconds: f64,
        inconvenience_penalty_seconds: f64,
        head_on_penalty_seconds: f64,
    ) -> Self {
        Self {
            node_clearance_seconds,
            node_safety_window_seconds,
            inconvenience_penalty_seconds,
            head_on_penalty_seconds,
        }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(
            config.node_clearance_seconds,
            config.node_safety_window_seconds,
            config.inconvenience_penalty_seconds,
            config.head_on_penalty_seconds,
        )
    }

    pub fn node_clearance_seconds(&self) -> f64 {
        self.node_clearance_seconds
    }

    pub fn node_safety_window_seconds(&self) -> f64 {
        self.node_safety_window_seconds
    }

    /// Estimate the delay + penalty (seconds) for `vehicle` traversing edge
    /// `from -> to`, departing `from` at `t_dep` and arriving at `to` at
    /// `t_arr_nowait` absent any conflict, given the edge's physical
    /// distance and the vehicle's speed and length.
    ///
    /// Returns `0.0` when no existing reservation conflicts.
    pub fn estimate(
        &self,
        table: &ReservationTable,
        vehicle: VehicleId,
        from: NodeId,
        to: NodeId,
        t_dep: f64,
        t_arr_nowait: f64,
        edge_distance_m: f64,
        vehicle_speed: f64,
        vehicle_length: f64,
    ) -> f64 {
        let t_exit = t_dep + (edge_distance_m + vehicle_length) / vehicle_speed;
        let segment_wait = self.segment_wait(table, vehicle, from, to, t_dep, t_exit);
        let node_wait = self.node_wait(table, vehicle, to, t_arr_nowait);
        let max_wait = segment_wait.max(node_wait);
        if max_wait > 0.0 {
            max_wait + self.inconvenience_penalty_seconds
        } else {
            0.0
        }
    }

    fn segment_wait(&self, table: &ReservationTable, vehicle: VehicleId, from: NodeId, to: NodeId, enter: f64, exit: f64) -> f64 {
        let mut max_wait: f64 = 0.0;
        for r in table.segment_reservations(from, to) {
            if r.vehicle == vehicle {
                continue;
            }
            if !overlaps(enter, exit, r.enter, r.exit) {
                continue;
            }
            let mut wait = (r.exit - enter).max(0.0);
            if wait > 0.0 && r.is_head_on_against(from, to) {
                wait += self.head_on_penalty_seconds;
            }
            max_wait = max_wait.max(wait);
        }
        max_wait
    }

    fn node_wait(&self, table: &ReservationTable, vehicle: VehicleId, node: NodeId, arrive: f64) -> f64 {
        let clear_until = arrive + self.node_clearance_seconds;
        let mut max_wait: f64 = 0.0;
        for r in table.node_reservations(node) {
            if r.vehicle == vehicle {
                continue;
            }
            if !overlaps(arrive, clear_until, r.entry, r.exit) {
                continue;
            }
            let wait = (r.exit - arrive).max(0.0);
            max_wait = max_wait.max(wait);
        }
        max_wait
    }
}
