//! Per-request coordinate projection onto a [`Graph`].
//!
//! A vehicle's start/end point rarely lands exactly on a node. The
//! projector finds the nearest point the graph actually offers — either an
//! existing node or the nearest point on the interior of some edge — and,
//! if it falls inside an edge, splits that edge to insert it.
//!
//! Nodes win ties over edge interiors: if a request's coordinate is within
//! tolerance of an existing node, that node is returned directly and the
//! graph is left untouched. Among candidate edges, the first one found at
//! minimal distance wins (iteration order is not sorted beyond that).

use trailer_core::{project_onto_segment, Coordinate, NodeId};

use crate::graph::Graph;

/// Where a projected coordinate landed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Coincided with an existing node (within tolerance); no graph mutation.
    ExistingNode,
    /// Fell on an edge interior; the edge was split to insert a new node.
    SplitEdge,
}

#[derive(Copy, Clone, Debug)]
pub struct Projection {
    pub node: NodeId,
    pub kind: ProjectionKind,
    pub distance_m: f64,
}

/// Projects coordinates onto a [`Graph`], mutating it as needed.
///
/// Holds no state of its own beyond the tunables; a session reuses one
/// `Projector` across every vehicle's start/end projection against the same
/// growing `Graph`.
pub struct Projector {
    earth_radius_m: f64,
    coordinate_equality_tolerance: f64,
}

impl Projector {
    pub fn new(earth_radius_m: f64, coordinate_equality_tolerance: f64) -> Self {
        Self { earth_radius_m, coordinate_equality_tolerance }
    }

    pub fn from_config(config: &trailer_core::PlannerConfig) -> Self {
        Self::new(config.earth_radius_m, config.coordinate_equality_tolerance)
    }

    /// Project `target` onto `graph`, splitting an edge if necessary.
    /// Returns `None` if the graph has no nodes at all.
    pub fn project(&self, graph: &mut Graph, target: Coordinate) -> Option<Projection> {
        let nearest = graph.nearest_node(target)?;
        let nearest_coord = graph.coordinate(nearest).expect("nearest_node returns a live node");
        let node_dist = target.distance_m(nearest_coord, self.earth_radius_m);

        if target.approx_eq(nearest_coord, self.coordinate_equality_tolerance) {
            return Some(Projection { node: nearest, kind: ProjectionKind::ExistingNode, distance_m: node_dist });
        }

        match self.nearest_edge(graph, target) {
            Some((a, b, on_segment, seg_dist)) if seg_dist < node_dist => {
                if target.approx_eq(on_segment, self.coordinate_equality_tolerance) {
                    // Landed on the edge but coincides with one of its own
                    // endpoints within tolerance; upsert rather than split.
                    let node = graph.upsert_node(on_segment);
                    Some(Projection { node, kind: ProjectionKind::ExistingNode, distance_m: seg_dist })
                } else {
                    let node = graph.split_edge(a, b, on_segment, self.earth_radius_m);
                    Some(Projection { node, kind: ProjectionKind::SplitEdge, distance_m: seg_dist })
                }
            }
            _ => Some(Projection { node: nearest, kind: ProjectionKind::ExistingNode, distance_m: node_dist }),
        }
    }

    /// Nearest point on any edge's interior to `target`, as
    /// `(a, b, point, distance)`. Linear scan: the graph has no segment
    /// index, only a node index.
    fn nearest_edge(&self, graph: &Graph, target: Coordinate) -> Option<(NodeId, NodeId, Coordinate, f64)> {
        let mut best: Option<(NodeId, NodeId, Coordinate, f64)> = None;
        for (a, b, _weight) in graph.edges() {
            let pa = graph.coordinate(a)?;
            let pb = graph.coordinate(b)?;
            let proj = project_onto_segment(pa, pb, target);
            let dist = target.distance_m(proj, self.earth_radius_m);
            if best.as_ref().is_none_or(|&(_, _, _, best_dist)| dist < best_dist) {
                best = Some((a, b, proj, dist));
            }
        }
        best
    }
}
