//! Requirement profile model.
//!
//! A profile is the credit and curriculum target for one
//! (program, cohort, grade, semester) combination. It is supplied by the
//! curriculum-data collaborator and stays fixed for a scheduling session.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{Classification, Weekday};

/// Credit and curriculum targets a schedule is validated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementProfile {
    /// Program (department) name.
    pub program: String,
    /// Admission year of the cohort.
    pub cohort_year: String,
    /// Target credits for the semester.
    pub target_total_credits: u32,
    /// Target credits per classification.
    pub target_by_classification: BTreeMap<Classification, u32>,
    /// Courses the curriculum mandates for this semester.
    pub required_courses: Vec<RequiredCourse>,
    /// Days the student would like to keep free.
    pub preferred_free_days: BTreeSet<Weekday>,
}

/// A course mandated by the curriculum, matched by subject name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredCourse {
    /// Subject name.
    pub name: String,
    /// Bucket the requirement belongs to.
    pub classification: Classification,
}

impl RequiredCourse {
    /// Creates a required course entry.
    pub fn new(name: impl Into<String>, classification: Classification) -> Self {
        Self {
            name: name.into(),
            classification,
        }
    }
}

impl RequirementProfile {
    /// Creates a profile with a total credit target.
    pub fn new(
        program: impl Into<String>,
        cohort_year: impl Into<String>,
        target_total_credits: u32,
    ) -> Self {
        Self {
            program: program.into(),
            cohort_year: cohort_year.into(),
            target_total_credits,
            ..Default::default()
        }
    }

    /// Sets the target for one classification.
    pub fn with_target(mut self, classification: Classification, credits: u32) -> Self {
        self.target_by_classification.insert(classification, credits);
        self
    }

    /// Adds a mandated course.
    pub fn with_required_course(mut self, course: RequiredCourse) -> Self {
        self.required_courses.push(course);
        self
    }

    /// Marks a day the student prefers to keep free.
    pub fn with_free_day(mut self, day: Weekday) -> Self {
        self.preferred_free_days.insert(day);
        self
    }
}
