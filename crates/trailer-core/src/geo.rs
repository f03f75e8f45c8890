//! Geographic coordinates and the planar/geodesic primitives the rest of the
//! planner is built on.
//!
//! # Precision
//!
//! `Coordinate` stores latitude/longitude as `f64`, not the `f32` this
//! codebase otherwise favors for geo types. The planner's own tolerances
//! (1e-7 degree coordinate equality, 1e-6 m split-weight conservation) sit
//! below `f32`'s ~7 significant digits at geographic magnitudes, so `f64` is
//! required here.

use std::fmt;

/// A WGS-84 geographic coordinate stored as double-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Haversine great-circle distance in meters.
    ///
    /// Symmetric in its arguments; `p.distance_m(p, r) == 0.0`.
    pub fn distance_m(self, other: Coordinate, earth_radius_m: f64) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        earth_radius_m * c
    }

    /// Coordinate-wise equality within `tolerance` degrees on each axis.
    #[inline]
    pub fn approx_eq(self, other: Coordinate, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() < tolerance && (self.lng - other.lng).abs() < tolerance
    }

    /// Canonical node-key: fixed-precision decimal string with `digits`
    /// fractional digits, in the form `"<lat>,<lng>"`.
    ///
    /// Two coordinates equal within the digit count produce the same key —
    /// this is how the graph builder merges polyline endpoints drawn a few
    /// nanodegrees apart.
    pub fn node_key(self, digits: usize) -> String {
        format!("{:.*},{:.*}", digits, self.lat, digits, self.lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat, self.lng)
    }
}

/// Project `c` onto the segment `[a, b]`, treating (lat, lng) as planar
/// Cartesian coordinates.
///
/// Acceptable because road polylines span at most a few hundred meters; the
/// distortion from treating lat/lng as Euclidean at that scale is below the
/// tolerances used for intersection acceptance (see [`intersect`]).
///
/// If `a == b`, returns `a`.
pub fn project_onto_segment(a: Coordinate, b: Coordinate, c: Coordinate) -> Coordinate {
    let abx = b.lng - a.lng;
    let aby = b.lat - a.lat;
    let len2 = abx * abx + aby * aby;
    if len2 == 0.0 {
        return a;
    }
    let acx = c.lng - a.lng;
    let acy = c.lat - a.lat;
    let t = ((acx * abx + acy * aby) / len2).clamp(0.0, 1.0);
    Coordinate::new(a.lat + t * aby, a.lng + t * abx)
}

/// Parametric two-segment intersection on (lng, lat), tolerant of endpoint
/// touches.
///
/// Returns `None` if the segments are parallel (`|denom| < 1e-9`) or if the
/// intersection parameters fall outside `[-epsilon, 1 + epsilon]` for either
/// segment.
pub fn intersect(a: Coordinate, b: Coordinate, c: Coordinate, d: Coordinate, epsilon: f64) -> Option<Coordinate> {
    // s1 = b - a, s2 = d - c, both in (x=lng, y=lat).
    let s1x = b.lng - a.lng;
    let s1y = b.lat - a.lat;
    let s2x = d.lng - c.lng;
    let s2y = d.lat - c.lat;

    let denom = -s2x * s1y + s1x * s2y;
    if denom.abs() < 1e-9 {
        return None;
    }

    let acx = a.lng - c.lng;
    let acy = a.lat - c.lat;

    let s = (-s1y * acx + s1x * acy) / denom;
    let t = (s2x * acy - s2y * acx) / denom;

    let lo = -epsilon;
    let hi = 1.0 + epsilon;
    if s >= lo && s <= hi && t >= lo && t <= hi {
        Some(Coordinate::new(a.lat + t * s1y, a.lng + t * s1x))
    } else {
        None
    }
}
