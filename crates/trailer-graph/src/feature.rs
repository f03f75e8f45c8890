//! Road feature input types.
//!
//! These mirror what the out-of-scope map-editing UI would hand to the
//! planner: a flat list of drawn features, each optionally carrying a
//! polyline and a property bag. Only [`FeatureKind::Road`] features with
//! `is_blocked == false` participate in [`crate::GraphBuilder`].

use trailer_core::Coordinate;

/// The kind of a drawn feature. Only `Road` contributes to the graph; the
/// others are recognized so a host application's full feature set can be
/// passed straight through without filtering first.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeatureKind {
    Road,
    Blocked,
    Marker,
    Polygon,
}

/// One user-drawn feature.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadFeature {
    pub id: String,
    pub kind: FeatureKind,
    /// The drawn polyline, in order. `None` for point features (markers).
    pub polyline: Option<Vec<Coordinate>>,
    /// Mirrors the editor's `isBlocked` property. Roads with this set are
    /// excluded from the graph regardless of `kind`.
    pub is_blocked: bool,
}

impl RoadFeature {
    pub fn new_road(id: impl Into<String>, polyline: Vec<Coordinate>) -> Self {
        Self {
            id: id.into(),
            kind: FeatureKind::Road,
            polyline: Some(polyline),
            is_blocked: false,
        }
    }

    pub fn blocked_road(id: impl Into<String>, polyline: Vec<Coordinate>) -> Self {
        Self {
            id: id.into(),
            kind: FeatureKind::Road,
            polyline: Some(polyline),
            is_blocked: true,
        }
    }

    /// `true` if this feature participates in [`crate::GraphBuilder`].
    pub fn is_eligible_road(&self) -> bool {
        self.kind == FeatureKind::Road && !self.is_blocked && self.polyline.is_some()
    }
}
