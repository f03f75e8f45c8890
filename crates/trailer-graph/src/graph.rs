//! The road connectivity graph and its builder.
//!
//! # Data layout
//!
//! Unlike this workspace's CSR `RoadNetwork` (built once, then immutable),
//! this graph is mutated throughout a planning session: the builder splits
//! edges at discovered intersections, and later the per-request
//! [`crate::Projector`] splits further edges to insert free-form start/end
//! nodes. An adjacency map is the natural shape for that — `BTreeMap<NodeId,
//! BTreeMap<NodeId, f64>>`, undirected (every edge appears in both
//! directions with identical weight). `BTreeMap` rather than `HashMap`
//! because `NodeId` is `Ord` and this workspace's own wake queue already
//! relies on an ordered map for reproducible iteration; `HashMap`'s default
//! hasher is reseeded per process, which would make edge/neighbor
//! iteration order — and every tie-break downstream of it — nondeterministic.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps node positions to `NodeId` for nearest-node
//! queries, maintained incrementally as nodes are added (bulk-loaded at
//! construction, `insert`-ed afterward), since the graph keeps growing
//! across a session's projections.

use std::collections::BTreeMap;

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use trailer_core::{Coordinate, NodeId};

// ── Spatial index entry ───────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lng]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlng = self.point[1] - point[1];
        dlat * dlat + dlng * dlng
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// An undirected, weighted road connectivity graph.
///
/// Construct via [`GraphBuilder`]; do not assemble one by hand outside this
/// module other than through the public mutation methods used during
/// projection.
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
    positions: BTreeMap<NodeId, Coordinate>,
    spatial_idx: RTree<NodeEntry>,
    digits: u32,
}

impl Graph {
    fn empty(digits: u32) -> Self {
        Graph {
            adjacency: BTreeMap::new(),
            positions: BTreeMap::new(),
            spatial_idx: RTree::new(),
            digits,
        }
    }

    /// Fractional digits this graph's node identities were quantized at.
    pub fn node_key_decimal_digits(&self) -> u32 {
        self.digits
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn has_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    pub fn coordinate(&self, node: NodeId) -> Option<Coordinate> {
        self.positions.get(&node).copied()
    }

    /// Outgoing neighbors of `node` with their edge weights (meters).
    /// Returns an empty iterator for a node that does not exist.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|m| m.iter().map(|(&n, &w)| (n, w)))
    }

    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.adjacency.get(&a).and_then(|m| m.get(&b)).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every undirected edge, visited once as `(a, b, weight)` with `a < b`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().flat_map(|(&a, neighbors)| {
            neighbors
                .iter()
                .filter(move |&(&b, _)| a < b)
                .map(move |(&b, &w)| (a, b, w))
        })
    }

    /// Return the nearest existing node to `target`, or `None` on an empty
    /// graph.
    pub fn nearest_node(&self, target: Coordinate) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[target.lat, target.lng])
            .map(|e| e.id)
    }

    // ── Mutation (used by GraphBuilder and Projector) ──────────────────────

    /// Insert (or look up) the node at `coord`. Returns its `NodeId`.
    pub(crate) fn upsert_node(&mut self, coord: Coordinate) -> NodeId {
        let id = NodeId::from_coordinate(coord, self.digits);
        if !self.positions.contains_key(&id) {
            self.positions.insert(id, coord);
            self.adjacency.entry(id).or_default();
            self.spatial_idx.insert(NodeEntry { point: [coord.lat, coord.lng], id });
        }
        id
    }

    /// Add an undirected edge `{a, b}` with the given weight, overwriting any
    /// existing weight between the same pair. Self-loops are forbidden and
    /// silently ignored.
    pub(crate) fn set_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        if a == b {
            return;
        }
        self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
    }

    /// Remove the undirected edge `{a, b}` if present.
    pub(crate) fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        if let Some(m) = self.adjacency.get_mut(&a) {
            m.remove(&b);
        }
        if let Some(m) = self.adjacency.get_mut(&b) {
            m.remove(&a);
        }
    }

    /// Split the edge `{a, b}` by inserting `p` between them: deletes
    /// `{a, b}` and adds `{a, p}`, `{p, b}` with Haversine weights. A no-op
    /// if `{a, b}` is not currently an edge.
    ///
    /// Returns the `NodeId` assigned to `p`.
    pub(crate) fn split_edge(&mut self, a: NodeId, b: NodeId, p: Coordinate, earth_radius_m: f64) -> NodeId {
        let p_id = self.upsert_node(p);
        if self.edge_weight(a, b).is_some() {
            self.remove_edge(a, b);
            let pa = p.distance_m(self.positions[&a], earth_radius_m);
            let pb = p.distance_m(self.positions[&b], earth_radius_m);
            self.set_edge(a, p_id, pa);
            self.set_edge(p_id, b, pb);
        }
        p_id
    }
}

impl Clone for Graph {
    /// Deep-clones adjacency and positions; rebuilds the spatial index
    /// (cheaper than cloning `rstar`'s internal tree and just as correct).
    fn clone(&self) -> Self {
        let mut g = Graph::empty(self.digits);
        for (&id, &coord) in &self.positions {
            g.positions.insert(id, coord);
            g.adjacency.insert(id, self.adjacency[&id].clone());
            g.spatial_idx.insert(NodeEntry { point: [coord.lat, coord.lng], id });
        }
        g
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Builds a [`Graph`] from a list of road polylines, splitting edges at every
/// pairwise intersection so the result is planar (no two edges cross except
/// at a shared node).
///
/// # Algorithm
///
/// 1. Normalize each eligible polyline (drop consecutive near-duplicates,
///    detect closed loops, discard degenerate results).
/// 2. Seed an undirected edge between each consecutive vertex pair.
/// 3. Discover every pairwise segment intersection (including
///    self-intersection within one polyline), snapping to existing vertices
///    within tolerance.
/// 4. Materialize each intersection as a split of the specific edge it
///    falls on.
pub struct GraphBuilder {
    earth_radius_m: f64,
    coordinate_equality_tolerance: f64,
    intersection_epsilon: f64,
    node_key_decimal_digits: u32,
}

impl GraphBuilder {
    pub fn new(earth_radius_m: f64, coordinate_equality_tolerance: f64, intersection_epsilon: f64, node_key_decimal_digits: u32) -> Self {
        Self {
            earth_radius_m,
            coordinate_equality_tolerance,
            intersection_epsilon,
            node_key_decimal_digits,
        }
    }

    pub fn from_config(config: &trailer_core::PlannerConfig) -> Self {
        Self::new(
            config.earth_radius_m,
            config.coordinate_equality_tolerance,
            config.intersection_epsilon,
            config.node_key_decimal_digits,
        )
    }

    /// Build the graph from `features`. Non-road and blocked features are
    /// filtered up front and never contribute an edge.
    pub fn build(&self, features: &[crate::RoadFeature]) -> Graph {
        let mut graph = Graph::empty(self.node_key_decimal_digits);

        // ── 1 & 2: normalize polylines and seed edges ───────────────────
        let polylines: Vec<Polyline> = features
            .iter()
            .filter(|f| f.is_eligible_road())
            .filter_map(|f| self.normalize(f.polyline.as_ref().unwrap()))
            .collect();

        for poly in &polylines {
            self.seed_edges(&mut graph, poly);
        }

        // ── 3: discover intersections ────────────────────────────────────
        let mut intersections: Vec<(Coordinate, (Coordinate, Coordinate), (Coordinate, Coordinate))> = Vec::new();
        for i in 0..polylines.len() {
            for j in i..polylines.len() {
                self.find_intersections(&polylines[i], &polylines[j], i == j, &mut intersections);
            }
        }

        // Snap each intersection point to an existing polyline vertex within
        // tolerance, so re-discovered near-duplicate points collapse.
        let all_vertices: Vec<Coordinate> = polylines.iter().flat_map(|p| p.points.iter().copied()).collect();
        let snapped: Vec<(Coordinate, (Coordinate, Coordinate), (Coordinate, Coordinate))> = intersections
            .into_iter()
            .map(|(x, s1, s2)| (self.snap_to_vertex(x, &all_vertices), s1, s2))
            .collect();

        // ── 4: materialize splits ─────────────────────────────────────────
        for (x, s1, s2) in &snapped {
            self.materialize_split(&mut graph, *x, *s1);
            self.materialize_split(&mut graph, *x, *s2);
        }

        graph
    }

    fn snap_to_vertex(&self, point: Coordinate, vertices: &[Coordinate]) -> Coordinate {
        vertices
            .iter()
            .find(|v| v.approx_eq(point, self.coordinate_equality_tolerance))
            .copied()
            .unwrap_or(point)
    }

    /// If `x` does not coincide with either endpoint of segment `(a, b)`,
    /// and `(a, b)` is still a live edge, split it at `x`. Otherwise ensure
    /// `x` is at least present as a node.
    fn materialize_split(&self, graph: &mut Graph, x: Coordinate, (a, b): (Coordinate, Coordinate)) {
        let tol = self.coordinate_equality_tolerance;
        if x.approx_eq(a, tol) || x.approx_eq(b, tol) {
            graph.upsert_node(x);
            return;
        }
        let a_id = NodeId::from_coordinate(a, self.node_key_decimal_digits);
        let b_id = NodeId::from_coordinate(b, self.node_key_decimal_digits);
        if graph.edge_weight(a_id, b_id).is_some() {
            graph.split_edge(a_id, b_id, x, self.earth_radius_m);
        } else {
            graph.upsert_node(x);
        }
    }

    fn seed_edges(&self, graph: &mut Graph, poly: &Polyline) {
        let n = poly.points.len();
        for w in poly.points.windows(2) {
            let a = graph.upsert_node(w[0]);
            let b = graph.upsert_node(w[1]);
            let weight = w[0].distance_m(w[1], self.earth_radius_m);
            graph.set_edge(a, b, weight);
        }
        if poly.is_loop {
            let a = graph.upsert_node(poly.points[n - 1]);
            let b = graph.upsert_node(poly.points[0]);
            let weight = poly.points[n - 1].distance_m(poly.points[0], self.earth_radius_m);
            graph.set_edge(a, b, weight);
        }
    }

    /// Find all intersections between `p` and `q`.
    ///
    /// `self_pair` is `true` when `p` and `q` are the same polyline: adjacent
    /// segments (sharing a vertex) are skipped, and for a loop the
    /// first-vs-last segment pair is skipped too.
    fn find_intersections(
        &self,
        p: &Polyline,
        q: &Polyline,
        self_pair: bool,
        out: &mut Vec<(Coordinate, (Coordinate, Coordinate), (Coordinate, Coordinate))>,
    ) {
        let p_segs = p.segments();
        let q_segs = q.segments();
        for (si, &(a, b)) in p_segs.iter().enumerate() {
            for (sj, &(c, d)) in q_segs.iter().enumerate() {
                if self_pair {
                    if si == sj {
                        continue;
                    }
                    if si.abs_diff(sj) == 1 {
                        continue; // adjacent segments share a vertex
                    }
                    let last = p_segs.len() - 1;
                    if p.is_loop && ((si == 0 && sj == last) || (si == last && sj == 0)) {
                        continue;
                    }
                }
                if let Some(x) = trailer_core::intersect(a, b, c, d, self.intersection_epsilon) {
                    out.push((x, (a, b), (c, d)));
                }
            }
        }
    }

    fn normalize(&self, raw: &[Coordinate]) -> Option<Polyline> {
        if raw.is_empty() {
            return None;
        }
        let tol = self.coordinate_equality_tolerance;
        let mut points: Vec<Coordinate> = Vec::with_capacity(raw.len());
        for &c in raw {
            if points.last().is_none_or(|&last| !last.approx_eq(c, tol)) {
                points.push(c);
            }
        }
        if points.len() < 2 {
            return None;
        }
        let mut is_loop = false;
        if points.len() >= 3 && points[0].approx_eq(points[points.len() - 1], tol) {
            points.pop();
            is_loop = true;
        }
        if points.len() < 2 {
            return None;
        }
        Some(Polyline { points, is_loop })
    }
}

/// A normalized polyline: distinct vertices, with `is_loop` recording
/// whether the original first/last points coincided (the duplicate terminal
/// vertex has already been dropped; the wrap-around edge is implied).
struct Polyline {
    points: Vec<Coordinate>,
    is_loop: bool,
}

impl Polyline {
    fn segments(&self) -> Vec<(Coordinate, Coordinate)> {
        let mut segs: Vec<(Coordinate, Coordinate)> = self.points.windows(2).map(|w| (w[0], w[1])).collect();
        if self.is_loop {
            segs.push((self.points[self.points.len() - 1], self.points[0]));
        }
        segs
    }
}
