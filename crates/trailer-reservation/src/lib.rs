//! `trailer-reservation` — the space-time reservation table and conflict
//! estimator consulted during time-aware pathfinding.
//!
//! # Crate layout
//!
//! | Module        | Contents                                            |
//! |---------------|-------------------------------------------------------|
//! | [`occupation`] | `SegmentOccupation`, `NodeOccupation`                 |
//! | [`table`]      | `ReservationTable`                                    |
//! | [`estimator`]  | `ConflictEstimator`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.    |

pub mod estimator;
pub mod occupation;
pub mod table;

#[cfg(test)]
mod tests;

pub use estimator::ConflictEstimator;
pub use occupation::{NodeOccupation, SegmentOccupation};
pub use table::ReservationTable;
