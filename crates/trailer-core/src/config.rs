//! Planner-wide tunable configuration.
//!
//! Mirrors this workspace's `SimConfig` pattern: a plain struct with a
//! `Default` impl, constructed in code (or deserialized by an embedding
//! application at its own boundary — this crate has no file format of its
//! own) and threaded through by reference.

/// Recognized configuration options for a planning run, with their
/// defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerConfig {
    /// Mean Earth radius used by the Haversine distance, in meters.
    pub earth_radius_m: f64,

    /// Absolute per-axis tolerance for coordinate equality, in degrees.
    pub coordinate_equality_tolerance: f64,

    /// Tolerance admitted past `[0, 1]` when accepting a segment
    /// intersection parameter.
    pub intersection_epsilon: f64,

    /// Seconds a vehicle is considered to occupy an intersection beyond its
    /// front's arrival.
    pub node_clearance_seconds: f64,

    /// Symmetric buffer, in seconds, added around a node occupation window.
    pub node_safety_window_seconds: f64,

    /// Flat surcharge, in seconds, added to an edge's cost whenever any wait
    /// is induced by a reservation conflict.
    pub inconvenience_penalty_seconds: f64,

    /// Penalty, in seconds, added on a detected head-on conflict (opposing
    /// direction, overlapping time window).
    pub head_on_penalty_seconds: f64,

    /// Fallback vehicle speed (m/s) used when a request's own speed is not
    /// positive and no override is supplied by the caller.
    pub default_vehicle_speed: f64,

    /// Fallback vehicle length (m) used the same way.
    pub default_vehicle_length: f64,

    /// Fractional digits used when canonicalizing a coordinate into a
    /// [`crate::NodeId`].
    pub node_key_decimal_digits: u32,

    /// Optional cap on A* node expansions per request, proportional to
    /// `|V| * k`. `None` disables the cap.
    pub max_expansions: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            earth_radius_m: 6_371_000.0,
            coordinate_equality_tolerance: 1e-7,
            intersection_epsilon: 1e-5,
            node_clearance_seconds: 10.0,
            node_safety_window_seconds: 15.0,
            inconvenience_penalty_seconds: 30.0,
            head_on_penalty_seconds: 1.0e6,
            default_vehicle_speed: 10.0,
            default_vehicle_length: 5.0,
            node_key_decimal_digits: 8,
            max_expansions: None,
        }
    }
}
