//! Unit tests for trailer-reservation.

#[cfg(test)]
mod helpers {
    use trailer_core::{Coordinate, NodeId};

    pub fn node(lat: f64, lng: f64) -> NodeId {
        NodeId::from_coordinate(Coordinate::new(lat, lng), 8)
    }
}

#[cfg(test)]
mod table {
    use trailer_core::VehicleId;
    use crate::ReservationTable;

    #[test]
    fn empty_table_has_no_reservations() {
        let table = ReservationTable::new();
        let n = super::helpers::node(0.0, 0.0);
        assert!(table.segment_reservations(n, n).is_empty());
        assert!(table.node_reservations(n).is_empty());
    }

    #[test]
    fn segment_reservation_is_queryable_from_either_endpoint_order() {
        let mut table = ReservationTable::new();
        let a = super::helpers::node(0.0, 0.0);
        let b = super::helpers::node(0.0, 0.001);
        table.reserve_segment(VehicleId(1), a, b, 0.0, 10.0);
        assert_eq!(table.segment_reservations(a, b).len(), 1);
        assert_eq!(table.segment_reservations(b, a).len(), 1);
    }

    #[test]
    fn node_reservation_round_trips() {
        let mut table = ReservationTable::new();
        let n = super::helpers::node(1.0, 1.0);
        table.reserve_node(VehicleId(1), n, 5.0, 20.0);
        let r = &table.node_reservations(n)[0];
        assert_eq!(r.entry, 5.0);
        assert_eq!(r.exit, 20.0);
    }

    #[test]
    fn counts_aggregate_across_keys() {
        let mut table = ReservationTable::new();
        let a = super::helpers::node(0.0, 0.0);
        let b = super::helpers::node(0.0, 0.001);
        let c = super::helpers::node(0.0, 0.002);
        table.reserve_segment(VehicleId(1), a, b, 0.0, 10.0);
        table.reserve_segment(VehicleId(2), b, c, 0.0, 10.0);
        assert_eq!(table.segment_reservation_count(), 2);
    }
}

#[cfg(test)]
mod estimator {
    use trailer_core::VehicleId;
    use crate::{ConflictEstimator, ReservationTable};

    fn estimator() -> ConflictEstimator {
        // Default constants: clearance 10s, window 15s, inconvenience 30s, head-on ~1e6s.
        ConflictEstimator::new(10.0, 15.0, 30.0, 1.0e6)
    }

    #[test]
    fn no_reservations_yields_zero_penalty() {
        let table = ReservationTable::new();
        let a = super::helpers::node(0.0, 0.0);
        let b = super::helpers::node(0.0, 0.001);
        let penalty = estimator().estimate(&table, VehicleId(1), a, b, 0.0, 11.132, 111.32, 10.0, 5.0);
        assert_eq!(penalty, 0.0);
    }

    #[test]
    fn own_reservations_are_ignored() {
        let mut table = ReservationTable::new();
        let a = super::helpers::node(0.0, 0.0);
        let b = super::helpers::node(0.0, 0.001);
        table.reserve_segment(VehicleId(1), a, b, 0.0, 20.0);
        let penalty = estimator().estimate(&table, VehicleId(1), a, b, 0.0, 11.132, 111.32, 10.0, 5.0);
        assert_eq!(penalty, 0.0, "same vehicle must not conflict with its own reservation");
    }

    #[test]
    fn same_direction_conflict_induces_wait_plus_inconvenience() {
        let mut table = ReservationTable::new();
        let a = super::helpers::node(0.0, 0.0);
        let b = super::helpers::node(0.0, 0.001);
        // Another vehicle occupies a->b from t=0 to t=20.
        table.reserve_segment(VehicleId(2), a, b, 0.0, 20.0);
        // This vehicle wants to enter at t=5 (overlaps).
        let penalty = estimator().estimate(&table, VehicleId(1), a, b, 5.0, 16.132, 111.32, 10.0, 5.0);
        // wait = max(0, 20 - 5) = 15; penalty = 15 + 30 = 45.
        assert_eq!(penalty, 45.0);
    }

    #[test]
    fn head_on_conflict_adds_large_penalty() {
        let mut table = ReservationTable::new();
        let a = super::helpers::node(0.0, 0.0);
        let b = super::helpers::node(0.0, 0.001);
        // Another vehicle travels b->a (opposite direction) from t=0 to t=20.
        table.reserve_segment(VehicleId(2), b, a, 0.0, 20.0);
        let penalty = estimator().estimate(&table, VehicleId(1), a, b, 5.0, 16.132, 111.32, 10.0, 5.0);
        assert!(penalty > 1.0e6, "head-on conflict should be effectively forbidding, got {penalty}");
    }

    #[test]
    fn non_overlapping_reservation_is_ignored() {
        let mut table = ReservationTable::new();
        let a = super::helpers::node(0.0, 0.0);
        let b = super::helpers::node(0.0, 0.001);
        table.reserve_segment(VehicleId(2), a, b, 0.0, 5.0);
        // This vehicle enters well after the other has cleared.
        let penalty = estimator().estimate(&table, VehicleId(1), a, b, 100.0, 111.132, 111.32, 10.0, 5.0);
        assert_eq!(penalty, 0.0);
    }

    #[test]
    fn node_conflict_induces_wait() {
        let table_with_node = {
            let mut table = ReservationTable::new();
            let n = super::helpers::node(0.0, 0.0005);
            table.reserve_node(VehicleId(2), n, 0.0, 25.0);
            table
        };
        let a = super::helpers::node(0.0, 0.0);
        let n = super::helpers::node(0.0, 0.0005);
        // Arriving at n at t=10, within the other vehicle's [0, 25] window.
        let penalty = estimator().estimate(&table_with_node, VehicleId(1), a, n, 0.0, 10.0, 55.66, 10.0, 5.0);
        // wait = max(0, 25 - 10) = 15; penalty = 15 + 30 = 45.
        assert_eq!(penalty, 45.0);
    }
}
