//! Course selection: pools, transitions, and conflict detection.
//!
//! A session owns three pools. Courses enter as candidates on catalog load,
//! move to the cart on selection, and reach the confirmed schedule only
//! through a conflict check. A course id lives in at most one pool.
//!
//! ```text
//! load ──▶ Candidates ──add_to_cart──▶ Cart ──confirm──▶ Confirmed
//!              │                         │                   │
//!              └───────────── remove ────┴───────────────────┘──▶ (gone)
//! ```
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{Course, TimeSlot, Weekday};
//! use u_timetable::selection::ScheduleSession;
//!
//! let mut session = ScheduleSession::new();
//! session
//!     .load(vec![Course::new("C1", "Calculus I").with_slot(TimeSlot::at(Weekday::Mon, 1))])
//!     .unwrap();
//! session.add_to_cart("C1").unwrap();
//! session.confirm("C1").unwrap();
//! assert_eq!(session.confirmed().len(), 1);
//! ```

mod conflict;
mod session;
mod snapshot;

pub use conflict::{find_conflict, has_conflict, overlapping_slots};
pub use session::{ConfirmedCourse, ScheduleSession};
pub use snapshot::ScheduleSnapshot;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The pool a course currently belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pool {
    /// Loaded from the catalog, not yet selected.
    Candidates,
    /// Selected, awaiting confirmation.
    Cart,
    /// Part of the conflict-free schedule.
    Confirmed,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Pool::Candidates => "candidates",
            Pool::Cart => "cart",
            Pool::Confirmed => "confirmed",
        })
    }
}
