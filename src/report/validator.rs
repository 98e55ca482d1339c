//! Schedule validation against a requirement profile.
//!
//! Produces a [`Report`] with one section per concern:
//! - **Missing required**: mandated courses absent from the schedule
//! - **Credit shortfall**: total and per-classification credits below target
//! - **Balance**: major share of credits below the configured minimum
//! - **Free days**: preferred free days that still hold a class
//! - **Prerequisites**: confirmed courses whose prerequisite is not satisfied
//!
//! Validation only reads its inputs; the same schedule and profile always
//! produce the same report.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

use super::credits::CreditSummary;
use crate::config::ScheduleConfig;
use crate::models::{Classification, Course, RequirementProfile, Weekday};

/// Target versus achieved credits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub target: u32,
    pub actual: u32,
    /// `target - actual`, floored at zero.
    pub missing: u32,
}

impl Shortfall {
    fn new(target: u32, actual: u32) -> Self {
        Self {
            target,
            actual,
            missing: target.saturating_sub(actual),
        }
    }

    /// Whether the target is met.
    pub fn is_met(&self) -> bool {
        self.missing == 0
    }
}

/// Credit comparison for the total and every targeted classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditShortfall {
    pub total: Shortfall,
    pub by_classification: BTreeMap<Classification, Shortfall>,
}

impl CreditShortfall {
    /// Whether any target is unmet.
    pub fn has_shortfall(&self) -> bool {
        !self.total.is_met() || self.by_classification.values().any(|s| !s.is_met())
    }
}

/// A mandated course missing from the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingRequirement {
    pub name: String,
    pub classification: Classification,
}

/// Major share below the configured minimum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceWarning {
    pub major_credits: u32,
    pub total_credits: u32,
    pub major_share: f64,
    pub minimum_share: f64,
}

/// Classes on a day the student wanted free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeDayViolation {
    pub day: Weekday,
    /// Course names meeting that day, in schedule order.
    pub courses: Vec<String>,
}

/// A confirmed course whose prerequisite is neither completed nor scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteWarning {
    pub course: String,
    pub prerequisite: String,
}

/// Diagnostics for a confirmed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub summary: CreditSummary,
    pub missing_required: Vec<MissingRequirement>,
    pub credit_shortfall: CreditShortfall,
    pub balance_warning: Option<BalanceWarning>,
    pub free_day_violations: Vec<FreeDayViolation>,
    pub prerequisite_warnings: Vec<PrerequisiteWarning>,
}

impl Report {
    /// Whether the schedule raises no diagnostic at all.
    pub fn is_clean(&self) -> bool {
        self.missing_required.is_empty()
            && !self.credit_shortfall.has_shortfall()
            && self.balance_warning.is_none()
            && self.free_day_violations.is_empty()
            && self.prerequisite_warnings.is_empty()
    }

    /// Encodes the report as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Checks confirmed schedules against requirement profiles.
///
/// # Example
///
/// ```
/// use u_timetable::config::ScheduleConfig;
/// use u_timetable::models::{Classification, Course, RequirementProfile};
/// use u_timetable::report::ScheduleValidator;
///
/// let schedule = vec![Course::new("C1", "Circuits")
///     .with_credits(3)
///     .with_classification(Classification::RequiredMajor)];
/// let profile = RequirementProfile::new("EE", "2024", 3);
///
/// let report = ScheduleValidator::new(ScheduleConfig::default()).validate(&schedule, &profile);
/// assert!(report.is_clean());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleValidator {
    config: ScheduleConfig,
    completed: BTreeSet<String>,
}

impl ScheduleValidator {
    /// Creates a validator.
    pub fn new(config: ScheduleConfig) -> Self {
        Self {
            config,
            completed: BTreeSet::new(),
        }
    }

    /// Records course names the student has already passed.
    pub fn with_completed_courses<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed.extend(names.into_iter().map(Into::into));
        self
    }

    /// The configuration in use.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Validates a confirmed schedule.
    pub fn validate<C: AsRef<Course>>(&self, confirmed: &[C], profile: &RequirementProfile) -> Report {
        let courses: Vec<&Course> = confirmed.iter().map(|c| c.as_ref()).collect();
        let summary = CreditSummary::aggregate(confirmed, &self.config.major_rule);

        let report = Report {
            missing_required: missing_required(&courses, profile),
            credit_shortfall: credit_shortfall(&summary, profile),
            balance_warning: self.balance_warning(&summary),
            free_day_violations: free_day_violations(&courses, profile),
            prerequisite_warnings: self.prerequisite_warnings(&courses),
            summary,
        };

        debug!(
            program = %profile.program,
            total = report.summary.total_credits,
            missing = report.missing_required.len(),
            clean = report.is_clean(),
            "schedule validated"
        );
        report
    }

    fn balance_warning(&self, summary: &CreditSummary) -> Option<BalanceWarning> {
        if summary.total_credits == 0 {
            return None;
        }
        let share = summary.major_share();
        (share < self.config.min_major_share).then(|| BalanceWarning {
            major_credits: summary.major_credits,
            total_credits: summary.total_credits,
            major_share: share,
            minimum_share: self.config.min_major_share,
        })
    }

    fn prerequisite_warnings(&self, courses: &[&Course]) -> Vec<PrerequisiteWarning> {
        let scheduled: HashSet<&str> = courses.iter().map(|c| c.name.as_str()).collect();
        courses
            .iter()
            .filter_map(|c| {
                let prerequisite = c.prerequisite.as_deref()?;
                let satisfied =
                    self.completed.contains(prerequisite) || scheduled.contains(prerequisite);
                (!satisfied).then(|| PrerequisiteWarning {
                    course: c.name.clone(),
                    prerequisite: prerequisite.to_string(),
                })
            })
            .collect()
    }
}

fn missing_required(courses: &[&Course], profile: &RequirementProfile) -> Vec<MissingRequirement> {
    let scheduled: HashSet<&str> = courses.iter().map(|c| c.name.as_str()).collect();
    profile
        .required_courses
        .iter()
        .filter(|req| !scheduled.contains(req.name.as_str()))
        .map(|req| MissingRequirement {
            name: req.name.clone(),
            classification: req.classification,
        })
        .collect()
}

fn credit_shortfall(summary: &CreditSummary, profile: &RequirementProfile) -> CreditShortfall {
    CreditShortfall {
        total: Shortfall::new(profile.target_total_credits, summary.total_credits),
        by_classification: profile
            .target_by_classification
            .iter()
            .map(|(&class, &target)| (class, Shortfall::new(target, summary.credits_for(class))))
            .collect(),
    }
}

fn free_day_violations(courses: &[&Course], profile: &RequirementProfile) -> Vec<FreeDayViolation> {
    profile
        .preferred_free_days
        .iter()
        .filter_map(|&day| {
            let names: Vec<String> = courses
                .iter()
                .filter(|c| c.scheduled_slots().any(|s| s.day_period().map(|(d, _)| d) == Some(day)))
                .map(|c| c.name.clone())
                .collect();
            (!names.is_empty()).then_some(FreeDayViolation { day, courses: names })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MajorRule;
    use crate::models::{RequiredCourse, TimeSlot};

    fn course(id: &str, credits: u32, classification: Classification) -> Course {
        Course::new(id, id)
            .with_credits(credits)
            .with_classification(classification)
    }

    fn sample_schedule() -> Vec<Course> {
        vec![
            course("Circuits", 3, Classification::RequiredMajor)
                .with_slot(TimeSlot::at(Weekday::Mon, 2)),
            course("Writing", 3, Classification::ElectiveGeneral)
                .with_slot(TimeSlot::at(Weekday::Fri, 1)),
        ]
    }

    fn sample_profile() -> RequirementProfile {
        RequirementProfile::new("Electronic Convergence", "2024", 9)
            .with_target(Classification::RequiredMajor, 6)
            .with_target(Classification::ElectiveGeneral, 3)
            .with_required_course(RequiredCourse::new("Circuits", Classification::RequiredMajor))
            .with_required_course(RequiredCourse::new(
                "Signals",
                Classification::RequiredMajor,
            ))
    }

    #[test]
    fn test_missing_required() {
        let report = ScheduleValidator::default().validate(&sample_schedule(), &sample_profile());
        assert_eq!(
            report.missing_required,
            vec![MissingRequirement {
                name: "Signals".into(),
                classification: Classification::RequiredMajor,
            }]
        );
    }

    #[test]
    fn test_credit_shortfall() {
        let report = ScheduleValidator::default().validate(&sample_schedule(), &sample_profile());
        let shortfall = &report.credit_shortfall;
        assert_eq!(shortfall.total, Shortfall::new(9, 6));
        assert_eq!(shortfall.total.missing, 3);
        assert_eq!(
            shortfall.by_classification[&Classification::RequiredMajor].missing,
            3
        );
        assert!(shortfall.by_classification[&Classification::ElectiveGeneral].is_met());
        assert!(shortfall.has_shortfall());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_surplus_is_not_shortfall() {
        let profile = RequirementProfile::new("P", "2024", 3);
        let report = ScheduleValidator::default().validate(&sample_schedule(), &profile);
        assert_eq!(report.credit_shortfall.total.missing, 0);
        assert!(!report.credit_shortfall.has_shortfall());
    }

    #[test]
    fn test_balance_warning() {
        let schedule = vec![
            course("A", 3, Classification::RequiredMajor),
            course("B", 3, Classification::ElectiveGeneral),
            course("C", 3, Classification::RequiredGeneral),
        ];
        let profile = RequirementProfile::new("P", "2024", 9);

        let report = ScheduleValidator::default().validate(&schedule, &profile);
        let warning = report.balance_warning.unwrap();
        assert_eq!(warning.major_credits, 3);
        assert_eq!(warning.total_credits, 9);
        assert!((warning.minimum_share - 0.5).abs() < 1e-10);

        let lenient = ScheduleValidator::new(ScheduleConfig::new().with_min_major_share(0.3));
        assert!(lenient.validate(&schedule, &profile).balance_warning.is_none());

        let broad = ScheduleValidator::new(
            ScheduleConfig::new().with_major_rule(MajorRule::LabelContains("Required".into())),
        );
        assert!(broad.validate(&schedule, &profile).balance_warning.is_none());
    }

    #[test]
    fn test_no_balance_warning_when_empty() {
        let none: Vec<Course> = Vec::new();
        let report = ScheduleValidator::default().validate(&none, &RequirementProfile::default());
        assert!(report.balance_warning.is_none());
        assert!(report.is_clean());
    }

    #[test]
    fn test_free_day_violations() {
        let profile = sample_profile()
            .with_free_day(Weekday::Fri)
            .with_free_day(Weekday::Wed);
        let report = ScheduleValidator::default().validate(&sample_schedule(), &profile);
        assert_eq!(
            report.free_day_violations,
            vec![FreeDayViolation {
                day: Weekday::Fri,
                courses: vec!["Writing".into()],
            }]
        );
    }

    #[test]
    fn test_prerequisite_warnings() {
        let schedule = vec![
            course("Signals", 3, Classification::RequiredMajor).with_prerequisite("Circuits"),
            course("Control", 3, Classification::ElectiveMajor).with_prerequisite("Signals"),
            course("DSP", 3, Classification::ElectiveMajor).with_prerequisite("Linear Algebra"),
        ];
        let profile = RequirementProfile::new("P", "2024", 9);

        let report = ScheduleValidator::default()
            .with_completed_courses(["Circuits"])
            .validate(&schedule, &profile);
        assert_eq!(
            report.prerequisite_warnings,
            vec![PrerequisiteWarning {
                course: "DSP".into(),
                prerequisite: "Linear Algebra".into(),
            }]
        );
    }

    #[test]
    fn test_validate_is_idempotent() {
        let validator = ScheduleValidator::default();
        let schedule = sample_schedule();
        let profile = sample_profile().with_free_day(Weekday::Mon);
        assert_eq!(
            validator.validate(&schedule, &profile),
            validator.validate(&schedule, &profile)
        );
    }

    #[test]
    fn test_report_serializes_as_plain_data() {
        let report = ScheduleValidator::default().validate(&sample_schedule(), &sample_profile());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["summary"]["total_credits"], 6);
        assert_eq!(value["missing_required"][0]["name"], "Signals");
        assert_eq!(value["credit_shortfall"]["total"]["missing"], 3);
    }
}
