//! Timetable domain models.
//!
//! Provides the core data types for a course-selection session: weekly
//! time slots, catalog courses, and the requirement profile a finished
//! schedule is checked against.
//!
//! # Domain Mappings
//!
//! | u-timetable | Course catalog | Timetable app |
//! |-------------|----------------|---------------|
//! | Course | 강의 (lecture section) | Block |
//! | TimeSlot | 요일 + 교시 | Cell |
//! | Classification | 이수구분 (전공필수, 교양선택, ...) | Tag |
//! | RequirementProfile | 학사요람 credit table | Goal |

mod course;
mod profile;
mod time_slot;

pub use course::{Classification, Course, Priority};
pub use profile::{RequiredCourse, RequirementProfile};
pub use time_slot::{
    period_start_label, ParseSlotError, TimeSlot, Weekday, DAYS_PER_WEEK, PERIODS_PER_DAY,
};
