//! Crate error type.
//!
//! Every fallible operation reports locally through [`ScheduleError`]. A
//! failed transition leaves all pools untouched.

use thiserror::Error;

use crate::models::Weekday;
use crate::selection::Pool;
use crate::validation::ValidationError;

/// Result alias for timetable operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised by the timetable core.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The catalog failed structural validation and was rejected wholesale.
    #[error("invalid catalog: {}", join_messages(.0))]
    InvalidCatalog(Vec<ValidationError>),

    /// A transition referenced an id that is not in the required pool.
    #[error("course not found: {id}")]
    NotFound { id: String },

    /// The course is already in the cart or the confirmed schedule.
    #[error("course {id} is already selected ({pool})")]
    AlreadySelected { id: String, pool: Pool },

    /// Confirming would overlap an already confirmed course.
    #[error("course {id} conflicts with {conflicting_course}")]
    TimeConflict {
        id: String,
        conflicting_course: String,
    },

    /// Two confirmed courses landed in the same grid cell.
    #[error("grid cell {day}{period} claimed by both {occupant} and {intruder}")]
    RenderInvariantViolation {
        day: Weekday,
        period: u8,
        occupant: String,
        intruder: String,
    },

    /// A snapshot or configuration document could not be encoded or decoded.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ScheduleError {
    /// Whether the caller can recover without discarding the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ScheduleError::NotFound { .. }
                | ScheduleError::AlreadySelected { .. }
                | ScheduleError::TimeConflict { .. }
        )
    }
}
