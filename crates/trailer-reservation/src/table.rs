//! `ReservationTable` — the space-time index written by the fleet
//! orchestrator and read by the conflict estimator.
//!
//! Each key maps to a plain append-only `Vec`, the same "most keys are
//! never touched, the ones that are stay small" shape as this workspace's
//! wake-queue: no removal, no compaction, linear scan on read. Reservation
//! counts per key stay small relative to the node count, so the scan is
//! cheap in practice even without a time index.

use std::collections::HashMap;

use trailer_core::{NodeId, SegmentKey, VehicleId};

use crate::occupation::{NodeOccupation, SegmentOccupation};

#[derive(Default)]
pub struct ReservationTable {
    segments: HashMap<SegmentKey, Vec<SegmentOccupation>>,
    nodes: HashMap<NodeId, Vec<NodeOccupation>>,
}

impl ReservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve traversal of edge `{from, to}` travelling `from -> to`.
    pub fn reserve_segment(&mut self, vehicle: VehicleId, from: NodeId, to: NodeId, enter: f64, exit: f64) {
        let key = SegmentKey::new(from, to);
        self.segments.entry(key).or_default().push(SegmentOccupation { vehicle, from, to, enter, exit });
    }

    /// Reserve presence at `node` during `[entry, exit]`.
    pub fn reserve_node(&mut self, vehicle: VehicleId, node: NodeId, entry: f64, exit: f64) {
        self.nodes.entry(node).or_default().push(NodeOccupation { vehicle, node, entry, exit });
    }

    /// All occupations recorded against the undirected edge `{a, b}`,
    /// regardless of which direction they travelled.
    pub fn segment_reservations(&self, a: NodeId, b: NodeId) -> &[SegmentOccupation] {
        let key = SegmentKey::new(a, b);
        self.segments.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All occupations recorded against `node`.
    pub fn node_reservations(&self, node: NodeId) -> &[NodeOccupation] {
        self.nodes.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn segment_reservation_count(&self) -> usize {
        self.segments.values().map(Vec::len).sum()
    }

    pub fn node_reservation_count(&self) -> usize {
        self.nodes.values().map(Vec::len).sum()
    }
}
