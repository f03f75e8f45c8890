//! Planner-subsystem error type.
//!
//! None of these variants ever leave [`crate::plan`] as an `Err` — each is
//! caught internally and turned into a [`crate::PlanStatus`] on the
//! corresponding request's plan, so one request's failure cannot abort the
//! batch.

use thiserror::Error;

use trailer_core::{NodeId, VehicleId};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("road features yielded an empty graph")]
    NoGraph,

    #[error("vehicle {0} could not be projected onto the graph")]
    ProjectionFailed(VehicleId),

    #[error("no path found from {from} to {to}")]
    Unreachable { from: NodeId, to: NodeId },

    #[error("search budget exceeded before reaching {to}")]
    BudgetExceeded { to: NodeId },

    #[error("vehicle {0} has a non-positive speed")]
    InvalidSpeed(VehicleId),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
