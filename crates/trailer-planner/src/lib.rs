//! `trailer-planner` — time-aware A* pathfinding and the sequential fleet
//! orchestrator, exposing the single public [`plan`] entry point.
//!
//! # Crate layout
//!
//! | Module          | Contents                                          |
//! |-----------------|------------------------------------------------------|
//! | [`request`]     | `VehicleRequest`                                     |
//! | [`plan`]        | `TimedNode`, `PlanStatus`, `Plan`                     |
//! | [`astar`]       | `TimeAwareAStar`                                      |
//! | [`orchestrator`]| `FleetOrchestrator`                                   |
//! | [`error`]       | `PlannerError`, `PlannerResult<T>` (internal only)    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.    |

pub mod astar;
pub mod error;
pub mod orchestrator;
pub mod plan;
pub mod request;


pub use astar::TimeAwareAStar;
pub use error::{PlannerError, PlannerResult};
pub use orchestrator::FleetOrchestrator;
pub use plan::{Plan, PlanStatus, TimedNode};
pub use request::VehicleRequest;

pub use trailer_core::PlannerConfig;
pub use trailer_graph::{FeatureKind, RoadFeature};

/// Plan routes for `requests` over the road network described by
/// `features`, using `config` for every tunable in the system.
///
/// Returns one [`Plan`] per request (see [`FleetOrchestrator::plan_all`]
/// for the exact ordering). No internal failure ever escapes this
/// function as an `Err` — every failure mode becomes
/// [`PlanStatus::FailedNoPath`] on the corresponding plan.
pub fn plan(features: &[RoadFeature], requests: &[VehicleRequest], config: &PlannerConfig) -> Vec<Plan> {
    FleetOrchestrator::new(config.clone()).plan_all(features, requests)
}
