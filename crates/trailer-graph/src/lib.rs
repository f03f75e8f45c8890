//! `trailer-graph` — road feature ingestion, intersection-splitting graph
//! construction, and per-request coordinate projection.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|---------------------------------------------------------|
//! | [`feature`]  | `FeatureKind`, `RoadFeature` — input types              |
//! | [`graph`]    | `Graph` (mutable adjacency map), `GraphBuilder`         |
//! | [`projector`]| `Projector`, `Projection` — start/end point insertion   |
//!
//! This crate's operations (snap, build, split) are total functions over
//! their inputs — an empty feature list yields an empty graph, a point with
//! no nearby node yields `None` — so it carries no error enum of its own.
//! Failure *kinds* (`NoGraph`, `ProjectionFailed`, ...) are named once, in
//! `trailer-planner::PlannerError`, where a missing graph or projection
//! actually becomes a per-request planning outcome.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.    |

pub mod feature;
pub mod graph;
pub mod projector;

#[cfg(test)]
mod tests;

pub use feature::{FeatureKind, RoadFeature};
pub use graph::{Graph, GraphBuilder};
pub use projector::{Projection, ProjectionKind, Projector};
