//! Occupation records written into a [`crate::ReservationTable`].

use trailer_core::{NodeId, VehicleId};

/// A reserved traversal of an undirected edge `{a, b}`, recorded with the
/// direction it was actually travelled so head-on conflicts can be told
/// apart from same-direction following traffic.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentOccupation {
    pub vehicle: VehicleId,
    /// Direction of travel: front enters `from` and the tail clears `to`.
    pub from: NodeId,
    pub to: NodeId,
    /// Absolute time the vehicle's front enters `from`.
    pub enter: f64,
    /// Absolute time the vehicle's tail clears `to`.
    pub exit: f64,
}

impl SegmentOccupation {
    /// `true` if this occupation's travel direction is the reverse of
    /// `from -> to`.
    pub fn is_head_on_against(&self, from: NodeId, to: NodeId) -> bool {
        self.from == to && self.to == from
    }
}

/// A reserved presence at a single node, with a symmetric safety buffer
/// already folded into `entry`/`exit`.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeOccupation {
    pub vehicle: VehicleId,
    pub node: NodeId,
    pub entry: f64,
    pub exit: f64,
}

pub(crate) fn overlaps(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start < b_end && b_start < a_end
}
