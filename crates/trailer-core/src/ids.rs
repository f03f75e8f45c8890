//! Node identity and other small identifier types.
//!
//! # Why not a string key
//!
//! Node identity is conceptually the canonical decimal-string form of a
//! coordinate. Hashing and comparing strings on every graph lookup is
//! wasteful, so — per this workspace's own convention of canonicalizing map
//! keys into cheap `Copy` types rather than carrying strings on hot paths —
//! [`NodeId`] quantizes
//! latitude/longitude into a fixed-point integer pair up front. Two
//! coordinates within the configured precision collapse to the same
//! `NodeId`, exactly as the string form would collapse them into the same
//! key. [`NodeId::canonical_string`] reconstructs the string form when one is
//! needed (debug output, an embedding application's own serialization).

use std::fmt;

use crate::Coordinate;

/// Canonical identity of a graph node: latitude/longitude quantized to
/// fixed-point integers at a configured number of fractional digits.
///
/// `Copy + Ord + Hash` so it can be used directly as a `HashMap`/`BTreeMap`
/// key without ceremony.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
    lat_fp: i64,
    lng_fp: i64,
}

impl NodeId {
    /// Quantize `coord` at `digits` fractional digits.
    pub fn from_coordinate(coord: Coordinate, digits: u32) -> Self {
        let scale = 10f64.powi(digits as i32);
        NodeId {
            lat_fp: (coord.lat * scale).round() as i64,
            lng_fp: (coord.lng * scale).round() as i64,
        }
    }

    /// Reconstruct the coordinate this id was quantized from (exact up to
    /// the configured precision).
    pub fn to_coordinate(self, digits: u32) -> Coordinate {
        let scale = 10f64.powi(digits as i32);
        Coordinate::new(self.lat_fp as f64 / scale, self.lng_fp as f64 / scale)
    }

    /// The canonical decimal-string form, `"<lat>,<lng>"`, at a fixed
    /// precision of `digits` fractional digits.
    pub fn canonical_string(self, digits: u32) -> String {
        let scale = 10f64.powi(digits as i32);
        format!(
            "{:.*},{:.*}",
            digits as usize,
            self.lat_fp as f64 / scale,
            digits as usize,
            self.lng_fp as f64 / scale
        )
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({},{})", self.lat_fp, self.lng_fp)
    }
}

/// Canonical undirected key for a segment {a, b}: the endpoints in a fixed
/// total order, independent of traversal direction.
///
/// Direction of travel is recorded separately inside occupation records (see
/// `trailer-reservation`), never in this key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct SegmentKey(NodeId, NodeId);

impl SegmentKey {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b { SegmentKey(a, b) } else { SegmentKey(b, a) }
    }
}

/// Identifier for a vehicle request, preserving input order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleId(pub u32);

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VehicleId({})", self.0)
    }
}
