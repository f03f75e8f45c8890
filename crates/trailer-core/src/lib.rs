//! `trailer-core` — coordinate geometry, identifiers, and configuration for
//! the trailer fleet planner.
//!
//! This crate is a dependency of every other `trailer-*` crate. It
//! intentionally has no `trailer-*` dependencies and no external ones
//! beyond optional `serde`. Every operation here is total over its inputs
//! (quantization, distance, projection, intersection all produce a value
//! unconditionally), so this crate carries no error enum of its own —
//! downstream crates that can fail (`trailer-planner::PlannerError`)
//! define their own.
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|-------------------------------------------------------------|
//! | [`ids`]    | `NodeId`, `SegmentKey`, `VehicleId`                        |
//! | [`geo`]    | `Coordinate`, Haversine distance, projection, intersection |
//! | [`config`] | `PlannerConfig`                                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use geo::{intersect, project_onto_segment, Coordinate};
pub use ids::{NodeId, SegmentKey, VehicleId};
