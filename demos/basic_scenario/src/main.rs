//! basic_scenario — smallest example for the trailer fleet planner.
//!
//! Hand-builds a two-road crossing network (the same shape as the
//! planner's own crossing-road tests) and two vehicle requests that
//! contest the shared segment, then prints each vehicle's planned path.

use anyhow::Result;

use trailer_core::{Coordinate, PlannerConfig, VehicleId};
use trailer_graph::RoadFeature;
use trailer_planner::{plan, PlanStatus, VehicleRequest};

const MAIN_ROAD: &str = "main-road";
const CROSS_ROAD: &str = "cross-road";

fn main() -> Result<()> {
    println!("=== basic_scenario — trailer fleet planner ===");
    println!();

    let main_road = RoadFeature::new_road(
        MAIN_ROAD,
        vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.002)],
    );
    let cross_road = RoadFeature::new_road(
        CROSS_ROAD,
        vec![Coordinate::new(-0.0005, 0.001), Coordinate::new(0.0005, 0.001)],
    );
    let features = vec![main_road, cross_road];

    println!("Road features: {} (main road + one crossing road)", features.len());

    let requests = vec![
        VehicleRequest::new(VehicleId(1), Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.002), 10.0, 5.0, 0.0),
        VehicleRequest::new(VehicleId(2), Coordinate::new(0.0, 0.002), Coordinate::new(0.0, 0.0), 10.0, 5.0, 0.0),
    ];

    println!("Vehicle requests: {} (head-on on the shared segment)", requests.len());
    println!();

    let config = PlannerConfig::default();
    let plans = plan(&features, &requests, &config);

    println!("{:<10} {:<16} {:<10} {:<10}", "Vehicle", "Status", "Hops", "TotalTime(s)");
    println!("{}", "-".repeat(48));
    for p in &plans {
        let status = match p.status {
            PlanStatus::Success => "SUCCESS",
            PlanStatus::FailedNoPath => "FAILED_NO_PATH",
        };
        println!("{:<10} {:<16} {:<10} {:<10.3}", p.vehicle.0, status, p.path.len(), p.total_time_seconds);
    }

    Ok(())
}
