//! Credit aggregation.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total | Sum of credits over the schedule |
//! | By classification | Sum per [`Classification`] |
//! | Major | Sum over classifications accepted by the [`MajorRule`] |
//! | Major share | Major / total (0 when total is 0) |
//!
//! [`GraduationProgress`] extends a semester summary with credits already
//! earned, toward the program's graduation total.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{MajorRule, ScheduleConfig};
use crate::models::{Classification, Course};

/// Credit totals of a schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditSummary {
    /// Sum of all credits.
    pub total_credits: u32,
    /// Credits per classification (only classifications present).
    pub by_classification: BTreeMap<Classification, u32>,
    /// Credits counted as major.
    pub major_credits: u32,
}

impl CreditSummary {
    /// Sums credits over a schedule. Pure; courses are only read.
    ///
    /// Sums saturate at `u32::MAX`.
    pub fn aggregate<C: AsRef<Course>>(courses: &[C], major_rule: &MajorRule) -> Self {
        let mut summary = Self::default();
        for course in courses.iter().map(|c| c.as_ref()) {
            summary.total_credits = summary.total_credits.saturating_add(course.credits);
            let bucket = summary
                .by_classification
                .entry(course.classification)
                .or_insert(0);
            *bucket = bucket.saturating_add(course.credits);
            if major_rule.matches(course.classification) {
                summary.major_credits = summary.major_credits.saturating_add(course.credits);
            }
        }
        summary
    }

    /// Credits in one classification.
    pub fn credits_for(&self, classification: Classification) -> u32 {
        self.by_classification
            .get(&classification)
            .copied()
            .unwrap_or(0)
    }

    /// Credits outside the major bucket.
    pub fn non_major_credits(&self) -> u32 {
        self.total_credits.saturating_sub(self.major_credits)
    }

    /// Major fraction of total credits (0.0 for an empty schedule).
    pub fn major_share(&self) -> f64 {
        if self.total_credits == 0 {
            0.0
        } else {
            f64::from(self.major_credits) / f64::from(self.total_credits)
        }
    }
}

/// Progress toward the graduation credit total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraduationProgress {
    /// Major credits earned, including the current semester if projected.
    pub major_credits: u32,
    /// Non-major credits earned, including the current semester if projected.
    pub general_credits: u32,
    /// Credits required to graduate.
    pub required_credits: u32,
}

impl GraduationProgress {
    /// Progress from credits already earned.
    pub fn from_completed(major_credits: u32, general_credits: u32, required_credits: u32) -> Self {
        Self {
            major_credits,
            general_credits,
            required_credits,
        }
    }

    /// Progress toward the configured graduation total.
    pub fn from_config(major_credits: u32, general_credits: u32, config: &ScheduleConfig) -> Self {
        Self::from_completed(major_credits, general_credits, config.graduation_credits)
    }

    /// Adds a semester's schedule to the earned credits.
    pub fn with_semester(mut self, semester: &CreditSummary) -> Self {
        self.major_credits = self.major_credits.saturating_add(semester.major_credits);
        self.general_credits = self
            .general_credits
            .saturating_add(semester.non_major_credits());
        self
    }

    /// Total earned credits.
    pub fn total_credits(&self) -> u32 {
        self.major_credits.saturating_add(self.general_credits)
    }

    /// Credits still missing.
    pub fn remaining_credits(&self) -> u32 {
        self.required_credits.saturating_sub(self.total_credits())
    }

    /// Fraction completed, capped at 1.0.
    pub fn ratio(&self) -> f64 {
        if self.required_credits == 0 {
            return 1.0;
        }
        (f64::from(self.total_credits()) / f64::from(self.required_credits)).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, credits: u32, classification: Classification) -> Course {
        Course::new(id, id)
            .with_credits(credits)
            .with_classification(classification)
    }

    #[test]
    fn test_aggregate_basic() {
        let courses = vec![
            course("CourseA", 3, Classification::RequiredMajor),
            course("CourseB", 3, Classification::ElectiveGeneral),
        ];
        let summary = CreditSummary::aggregate(&courses, &MajorRule::default());
        assert_eq!(summary.total_credits, 6);
        assert_eq!(summary.major_credits, 3);
        assert_eq!(summary.non_major_credits(), 3);
        assert_eq!(summary.credits_for(Classification::ElectiveGeneral), 3);
        assert_eq!(summary.credits_for(Classification::Other), 0);
        assert!((summary.major_share() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_aggregate_with_label_rule() {
        let courses = vec![
            course("A", 3, Classification::RequiredMajor),
            course("B", 2, Classification::RequiredGeneral),
            course("C", 1, Classification::Other),
        ];
        let rule = MajorRule::LabelContains("Required".into());
        let summary = CreditSummary::aggregate(&courses, &rule);
        assert_eq!(summary.major_credits, 5);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let courses = vec![
            course("A", 3, Classification::ElectiveMajor),
            course("B", 4, Classification::RequiredGeneral),
        ];
        let rule = MajorRule::default();
        assert_eq!(
            CreditSummary::aggregate(&courses, &rule),
            CreditSummary::aggregate(&courses, &rule)
        );
    }

    #[test]
    fn test_aggregate_empty() {
        let none: Vec<Course> = Vec::new();
        let summary = CreditSummary::aggregate(&none, &MajorRule::default());
        assert_eq!(summary.total_credits, 0);
        assert_eq!(summary.major_share(), 0.0);
    }

    #[test]
    fn test_graduation_progress() {
        let semester = CreditSummary::aggregate(
            &[
                course("A", 3, Classification::RequiredMajor),
                course("B", 3, Classification::ElectiveGeneral),
            ],
            &MajorRule::default(),
        );
        let progress = GraduationProgress::from_completed(45, 20, 130).with_semester(&semester);
        assert_eq!(progress.major_credits, 48);
        assert_eq!(progress.general_credits, 23);
        assert_eq!(progress.total_credits(), 71);
        assert_eq!(progress.remaining_credits(), 59);
        assert!((progress.ratio() - 71.0 / 130.0).abs() < 1e-10);
    }

    #[test]
    fn test_graduation_from_config() {
        let progress = GraduationProgress::from_config(45, 20, &ScheduleConfig::default());
        assert_eq!(progress.required_credits, 130);
        assert_eq!(progress.remaining_credits(), 65);
    }

    #[test]
    fn test_aggregate_saturates() {
        let courses = vec![
            course("A", u32::MAX, Classification::RequiredMajor),
            course("B", 1, Classification::RequiredMajor),
        ];
        let summary = CreditSummary::aggregate(&courses, &MajorRule::default());
        assert_eq!(summary.total_credits, u32::MAX);
        assert_eq!(summary.major_credits, u32::MAX);
        assert_eq!(summary.credits_for(Classification::RequiredMajor), u32::MAX);
        assert_eq!(summary.non_major_credits(), 0);

        let progress =
            GraduationProgress::from_completed(u32::MAX, 1, 130).with_semester(&summary);
        assert_eq!(progress.total_credits(), u32::MAX);
        assert_eq!(progress.remaining_credits(), 0);
    }

    #[test]
    fn test_graduation_ratio_capped() {
        let progress = GraduationProgress::from_completed(100, 40, 130);
        assert_eq!(progress.remaining_credits(), 0);
        assert!((progress.ratio() - 1.0).abs() < 1e-10);
        assert!((GraduationProgress::from_completed(0, 0, 0).ratio() - 1.0).abs() < 1e-10);
    }
}
