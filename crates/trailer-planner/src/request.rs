//! Vehicle request input type.

use trailer_core::{Coordinate, VehicleId};

/// A fleet vehicle's routing request.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleRequest {
    pub vehicle: VehicleId,
    pub origin: Coordinate,
    pub destination: Coordinate,
    /// Constant travel speed, in m/s. Must be positive; non-positive speeds
    /// are defensively routed to `FAILED_NO_PATH` rather than dividing by
    /// zero or producing an infinite heuristic.
    pub speed_mps: f64,
    /// Physical vehicle length, in meters; factors into segment clearance.
    pub length_m: f64,
    /// Desired absolute departure time, in seconds.
    pub start_time: f64,
}

impl VehicleRequest {
    pub fn new(vehicle: VehicleId, origin: Coordinate, destination: Coordinate, speed_mps: f64, length_m: f64, start_time: f64) -> Self {
        Self { vehicle, origin, destination, speed_mps, length_m, start_time }
    }

    pub fn is_valid(&self) -> bool {
        self.speed_mps > 0.0
    }
}
