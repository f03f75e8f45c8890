//! Output types: `TimedNode`, `PlanStatus`, `Plan`.

use trailer_core::{Coordinate, NodeId, VehicleId};

/// One stop along a planned path: a graph node, its coordinate, and the
/// absolute time the vehicle's front occupies it.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedNode {
    pub node: NodeId,
    pub coordinate: Coordinate,
    pub time: f64,
}

/// The outcome of planning one vehicle's request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanStatus {
    Success,
    FailedNoPath,
}

/// One vehicle's planned (or failed) route.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    pub vehicle: VehicleId,
    pub status: PlanStatus,
    pub path: Vec<TimedNode>,
    pub total_time_seconds: f64,
}

impl Plan {
    pub fn success(vehicle: VehicleId, path: Vec<TimedNode>) -> Self {
        let total_time_seconds = match (path.first(), path.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        };
        Self { vehicle, status: PlanStatus::Success, path, total_time_seconds }
    }

    pub fn failed(vehicle: VehicleId) -> Self {
        Self { vehicle, status: PlanStatus::FailedNoPath, path: Vec::new(), total_time_seconds: 0.0 }
    }
}
