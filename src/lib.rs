//! Course timetable core.
//!
//! Turns a normalized course catalog into a conflict-free weekly timetable
//! and checks it against curriculum credit requirements. Catalog extraction,
//! persistence, and presentation are left to collaborators; this crate only
//! consumes typed records and produces plain structured data.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Course`, `RequirementProfile`
//! - **`validation`**: Catalog integrity gate (duplicate IDs, slot ranges, credits)
//! - **`selection`**: Candidate → cart → confirmed state machine and conflict detection
//! - **`render`**: Pastel course colors and the 9 × 5 grid with overflow row
//! - **`report`**: Credit aggregation and requirement diagnostics
//! - **`config`**: Major-credit predicate and balance thresholds
//!
//! # Architecture
//!
//! All operations are synchronous and in-memory. Session state lives in an
//! explicit [`selection::ScheduleSession`] owned by the caller; the crate
//! holds no global state, so any number of sessions may run side by side.
//!
//! # Example
//!
//! ```
//! use u_timetable::config::ScheduleConfig;
//! use u_timetable::models::{Classification, Course, RequirementProfile, TimeSlot, Weekday};
//! use u_timetable::report::ScheduleValidator;
//! use u_timetable::selection::ScheduleSession;
//!
//! let catalog = vec![
//!     Course::new("C1", "Circuits")
//!         .with_classification(Classification::RequiredMajor)
//!         .with_slot(TimeSlot::at(Weekday::Mon, 1)),
//!     Course::new("R1", "Remote Seminar").with_credits(1),
//! ];
//!
//! let mut session = ScheduleSession::new();
//! session.load(catalog).unwrap();
//! for id in ["C1", "R1"] {
//!     session.add_to_cart(id).unwrap();
//!     session.confirm(id).unwrap();
//! }
//!
//! let grid = session.render_grid().unwrap();
//! assert_eq!(grid.overflow.len(), 1);
//!
//! let profile = RequirementProfile::new("EE", "2024", 4);
//! let report = ScheduleValidator::new(ScheduleConfig::default())
//!     .validate(session.confirmed(), &profile);
//! assert_eq!(report.summary.total_credits, 4);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod report;
pub mod selection;
pub mod validation;

pub use error::{Result, ScheduleError};
