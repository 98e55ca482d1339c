//! Course (catalog entry) model.
//!
//! A course is one section of a subject offered in a semester. Different
//! sections of the same subject share a `name` but have distinct `id`s.
//!
//! # Time Representation
//! Meetings are a set of weekly [`TimeSlot`]s. An empty set, or a set holding
//! only [`TimeSlot::Unscheduled`], means the course has no fixed meeting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::TimeSlot;

/// A catalog entry that can be placed in a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier within one catalog snapshot.
    pub id: String,
    /// Subject name (shared by all sections).
    pub name: String,
    /// Section code.
    pub section: String,
    /// Instructor name.
    pub instructor: String,
    /// Credit value (positive).
    pub credits: u32,
    /// Weekly meetings.
    pub slots: BTreeSet<TimeSlot>,
    /// Curriculum classification.
    pub classification: Classification,
    /// Selection priority.
    pub priority: Priority,
    /// Name of a course that should be completed first.
    pub prerequisite: Option<String>,
}

/// Curriculum classification of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Major course every student of the program must take.
    RequiredMajor,
    /// Major course chosen from the program's offering.
    ElectiveMajor,
    /// General-education course required of all students.
    RequiredGeneral,
    /// General-education course chosen freely.
    ElectiveGeneral,
    /// Anything else (teaching certificate, free electives, ...).
    Other,
}

impl Classification {
    /// All classifications in report order.
    pub const ALL: [Classification; 5] = [
        Classification::RequiredMajor,
        Classification::ElectiveMajor,
        Classification::RequiredGeneral,
        Classification::ElectiveGeneral,
        Classification::Other,
    ];

    /// English label (`"RequiredMajor"`).
    pub fn label(self) -> &'static str {
        match self {
            Classification::RequiredMajor => "RequiredMajor",
            Classification::ElectiveMajor => "ElectiveMajor",
            Classification::RequiredGeneral => "RequiredGeneral",
            Classification::ElectiveGeneral => "ElectiveGeneral",
            Classification::Other => "Other",
        }
    }

    /// Korean catalog label (`"전공필수"`).
    pub fn korean_label(self) -> &'static str {
        match self {
            Classification::RequiredMajor => "전공필수",
            Classification::ElectiveMajor => "전공선택",
            Classification::RequiredGeneral => "교양필수",
            Classification::ElectiveGeneral => "교양선택",
            Classification::Other => "기타",
        }
    }

    /// Whether the classification marks a mandatory course.
    pub fn is_required(self) -> bool {
        matches!(
            self,
            Classification::RequiredMajor | Classification::RequiredGeneral
        )
    }
}

/// Selection priority of a course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Should be placed before anything else.
    High,
    /// Regular course.
    #[default]
    Normal,
}

impl Course {
    /// Creates a 3-credit `Other` course with no meetings.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            section: String::new(),
            instructor: String::new(),
            credits: 3,
            slots: BTreeSet::new(),
            classification: Classification::Other,
            priority: Priority::Normal,
            prerequisite: None,
        }
    }

    /// Sets the section code.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets the credit value.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a weekly meeting.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.insert(slot);
        self
    }

    /// Adds several weekly meetings.
    pub fn with_slots(mut self, slots: impl IntoIterator<Item = TimeSlot>) -> Self {
        self.slots.extend(slots);
        self
    }

    /// Sets the classification.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the prerequisite course name.
    pub fn with_prerequisite(mut self, name: impl Into<String>) -> Self {
        self.prerequisite = Some(name.into());
        self
    }

    /// Fixed weekly meetings, sentinel excluded.
    pub fn scheduled_slots(&self) -> impl Iterator<Item = &TimeSlot> + '_ {
        self.slots.iter().filter(|s| s.is_scheduled())
    }

    /// Whether the course has no fixed weekly meeting.
    ///
    /// Such courses never conflict and render in the overflow row.
    pub fn is_unscheduled(&self) -> bool {
        self.scheduled_slots().next().is_none()
    }
}

impl AsRef<Course> for Course {
    fn as_ref(&self) -> &Course {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    #[test]
    fn test_course_builder() {
        let course = Course::new("C1", "Calculus I")
            .with_section("01")
            .with_instructor("Kim")
            .with_credits(4)
            .with_slot(TimeSlot::at(Weekday::Mon, 1))
            .with_classification(Classification::RequiredGeneral)
            .with_priority(Priority::High)
            .with_prerequisite("Precalculus");

        assert_eq!(course.id, "C1");
        assert_eq!(course.name, "Calculus I");
        assert_eq!(course.section, "01");
        assert_eq!(course.instructor, "Kim");
        assert_eq!(course.credits, 4);
        assert_eq!(course.slots.len(), 1);
        assert_eq!(course.classification, Classification::RequiredGeneral);
        assert_eq!(course.priority, Priority::High);
        assert_eq!(course.prerequisite.as_deref(), Some("Precalculus"));
    }

    #[test]
    fn test_unscheduled_detection() {
        assert!(Course::new("R", "Remote").is_unscheduled());
        assert!(Course::new("R", "Remote")
            .with_slot(TimeSlot::Unscheduled)
            .is_unscheduled());

        let mixed = Course::new("M", "Mixed")
            .with_slots([TimeSlot::Unscheduled, TimeSlot::at(Weekday::Fri, 2)]);
        assert!(!mixed.is_unscheduled());
        assert_eq!(mixed.scheduled_slots().count(), 1);
    }

    #[test]
    fn test_duplicate_slots_collapse() {
        let course = Course::new("C", "C")
            .with_slot(TimeSlot::at(Weekday::Tue, 3))
            .with_slot(TimeSlot::at(Weekday::Tue, 3));
        assert_eq!(course.slots.len(), 1);
    }

    #[test]
    fn test_classification_labels() {
        assert_eq!(Classification::RequiredMajor.label(), "RequiredMajor");
        assert_eq!(Classification::ElectiveMajor.korean_label(), "전공선택");
        assert!(Classification::RequiredGeneral.is_required());
        assert!(!Classification::ElectiveMajor.is_required());
    }

    #[test]
    fn test_course_serde() {
        let course = Course::new("C1", "Physics").with_slot(TimeSlot::at(Weekday::Mon, 1));
        let json = serde_json::to_string(&course).unwrap();
        let back: Course = serde_json::from_str(&json).unwrap();
        assert_eq!(back, course);
    }
}
