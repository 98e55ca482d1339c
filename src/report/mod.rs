//! Credit aggregation and schedule diagnostics.
//!
//! `CreditSummary` sums credits of a confirmed schedule; `ScheduleValidator`
//! compares a schedule against a `RequirementProfile` and reports what is
//! missing. Neither touches session state, so both may run at any point.

mod credits;
mod validator;

pub use credits::{CreditSummary, GraduationProgress};
pub use validator::{
    BalanceWarning, CreditShortfall, FreeDayViolation, MissingRequirement, PrerequisiteWarning,
    Report, ScheduleValidator, Shortfall,
};
