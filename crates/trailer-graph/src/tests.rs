//! Unit tests for trailer-graph.
//!
//! All tests use hand-crafted feature lists so they run without any
//! external map data.

#[cfg(test)]
mod helpers {
    use trailer_core::Coordinate;
    use crate::{GraphBuilder, RoadFeature};

    const R: f64 = 6_371_000.0;
    const TOL: f64 = 1e-7;
    const EPS: f64 = 1e-5;
    const DIGITS: u32 = 8;

    pub fn builder() -> GraphBuilder {
        GraphBuilder::new(R, TOL, EPS, DIGITS)
    }

    /// A straight road: (0,0) → (0,0.001).
    pub fn straight_road() -> RoadFeature {
        RoadFeature::new_road("r1", vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)])
    }

    /// A road crossing the straight road at its midpoint: (-0.0005,0.0005) → (0.0005,0.0005).
    pub fn crossing_road() -> RoadFeature {
        RoadFeature::new_road("r2", vec![Coordinate::new(-0.0005, 0.0005), Coordinate::new(0.0005, 0.0005)])
    }
}

// ── GraphBuilder: basic construction ───────────────────────────────────────────

#[cfg(test)]
mod builder {
    use trailer_core::Coordinate;
    use crate::RoadFeature;

    #[test]
    fn empty_features_yield_empty_graph() {
        let graph = super::helpers::builder().build(&[]);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.is_empty());
    }

    #[test]
    fn single_road_two_nodes_one_edge() {
        let graph = super::helpers::builder().build(&[super::helpers::straight_road()]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn single_road_edge_weight_matches_haversine_distance() {
        let graph = super::helpers::builder().build(&[super::helpers::straight_road()]);
        let a = trailer_core::NodeId::from_coordinate(Coordinate::new(0.0, 0.0), 8);
        let b = trailer_core::NodeId::from_coordinate(Coordinate::new(0.0, 0.001), 8);
        let w = graph.edge_weight(a, b).expect("edge should exist");
        assert!((w - 111.32).abs() < 0.1, "got {w}");
    }

    #[test]
    fn blocked_road_excluded() {
        let blocked = RoadFeature::blocked_road("r1", vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001)]);
        let graph = super::helpers::builder().build(&[blocked]);
        assert!(graph.is_empty());
    }

    #[test]
    fn non_road_feature_excluded() {
        use crate::FeatureKind;
        let marker = RoadFeature {
            id: "m1".into(),
            kind: FeatureKind::Marker,
            polyline: Some(vec![Coordinate::new(0.0, 0.0)]),
            is_blocked: false,
        };
        let graph = super::helpers::builder().build(&[marker]);
        assert!(graph.is_empty());
    }

    #[test]
    fn degenerate_single_point_polyline_dropped() {
        let f = RoadFeature::new_road("r1", vec![Coordinate::new(0.0, 0.0)]);
        let graph = super::helpers::builder().build(&[f]);
        assert!(graph.is_empty());
    }

    #[test]
    fn consecutive_duplicate_points_collapse() {
        let f = RoadFeature::new_road(
            "r1",
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 0.00000000001),
                Coordinate::new(0.0, 0.001),
            ],
        );
        let graph = super::helpers::builder().build(&[f]);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn closed_loop_wraps_around() {
        let f = RoadFeature::new_road(
            "loop",
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 0.001),
                Coordinate::new(0.001, 0.001),
                Coordinate::new(0.0, 0.0), // closes the loop
            ],
        );
        let graph = super::helpers::builder().build(&[f]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3); // triangle, including wrap edge
    }
}

// ── GraphBuilder: intersection splitting ───────────────────────────────────────

#[cfg(test)]
mod intersections {
    use trailer_core::{Coordinate, NodeId};

    #[test]
    fn crossing_roads_split_into_four_spokes() {
        let graph = super::helpers::builder().build(&[super::helpers::straight_road(), super::helpers::crossing_road()]);

        let crossing = NodeId::from_coordinate(Coordinate::new(0.0, 0.0005), 8);
        assert!(graph.has_node(crossing), "crossing node should exist");

        let neighbors: Vec<_> = graph.neighbors(crossing).collect();
        assert_eq!(neighbors.len(), 4, "crossing node should have four spokes");

        // The original end-to-end straight-road edge must no longer exist.
        let r1_start = NodeId::from_coordinate(Coordinate::new(0.0, 0.0), 8);
        let r1_end = NodeId::from_coordinate(Coordinate::new(0.0, 0.001), 8);
        assert!(graph.edge_weight(r1_start, r1_end).is_none());
    }

    #[test]
    fn spoke_weights_are_haversine() {
        let graph = super::helpers::builder().build(&[super::helpers::straight_road(), super::helpers::crossing_road()]);
        let crossing = NodeId::from_coordinate(Coordinate::new(0.0, 0.0005), 8);
        let r1_start = NodeId::from_coordinate(Coordinate::new(0.0, 0.0), 8);
        let w = graph.edge_weight(crossing, r1_start).expect("spoke should exist");
        // Half of the ~111.32 m straight road.
        assert!((w - 55.66).abs() < 0.5, "got {w}");
    }

    #[test]
    fn parallel_roads_do_not_intersect() {
        let r1 = super::helpers::straight_road();
        let r2 = crate::RoadFeature::new_road("r2", vec![Coordinate::new(1.0, 0.0), Coordinate::new(1.0, 0.001)]);
        let graph = super::helpers::builder().build(&[r1, r2]);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn adjacent_segments_of_same_polyline_not_flagged_as_crossing() {
        // An "L" shape: consecutive segments share a vertex but must not be
        // treated as an intersection requiring a split.
        let f = crate::RoadFeature::new_road(
            "l",
            vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.001), Coordinate::new(0.001, 0.001)],
        );
        let graph = super::helpers::builder().build(&[f]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
    }
}

// ── Projector ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod projector {
    use trailer_core::Coordinate;
    use crate::{Projector, ProjectionKind};

    fn projector() -> Projector {
        Projector::new(6_371_000.0, 1e-7)
    }

    #[test]
    fn empty_graph_returns_none() {
        let mut graph = super::helpers::builder().build(&[]);
        assert!(projector().project(&mut graph, Coordinate::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn exact_node_match_does_not_mutate_graph() {
        let mut graph = super::helpers::builder().build(&[super::helpers::straight_road()]);
        let before = graph.node_count();
        let p = projector().project(&mut graph, Coordinate::new(0.0, 0.0)).unwrap();
        assert_eq!(p.kind, ProjectionKind::ExistingNode);
        assert_eq!(graph.node_count(), before);
    }

    #[test]
    fn off_graph_point_splits_nearest_edge() {
        let mut graph = super::helpers::builder().build(&[super::helpers::straight_road()]);
        let before = graph.node_count();
        // Roughly midway along the road, offset slightly in latitude —
        // projects onto the segment interior, not onto either endpoint.
        let target = Coordinate::new(0.0001, 0.0005);
        let p = projector().project(&mut graph, target).unwrap();
        assert_eq!(p.kind, ProjectionKind::SplitEdge);
        assert_eq!(graph.node_count(), before + 1);
    }

    #[test]
    fn projection_point_is_on_segment_not_offset_by_off_road_distance() {
        // A point ~20m off the road still projects exactly
        // onto the segment; the 20m gap itself never becomes a graph edge.
        let mut graph = super::helpers::builder().build(&[super::helpers::straight_road()]);
        let target = Coordinate::new(0.00018, 0.0005); // roughly 20m north of the midpoint
        let p = projector().project(&mut graph, target).unwrap();
        let projected_coord = graph.coordinate(p.node).unwrap();
        // The projected node must sit on the road's latitude (0.0), not at
        // the request's off-road latitude.
        assert!(projected_coord.lat.abs() < 1e-9, "got {projected_coord}");
    }
}
