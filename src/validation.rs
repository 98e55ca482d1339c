//! Catalog validation.
//!
//! Checks structural integrity of a normalized course list before it enters
//! a session. This is the single gate for extractor output; nothing past
//! `load` re-checks record shape. Detects:
//! - Duplicate course IDs
//! - Empty course IDs
//! - Slots outside Mon..Fri × periods 1..=9
//! - Courses worth zero credits, or more than [`MAX_COURSE_CREDITS`]
//!
//! Semantic correctness (is this really a required course?) belongs to the
//! extractor and is not checked.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::models::{Course, PERIODS_PER_DAY};

/// Largest credit value a single course may carry.
pub const MAX_COURSE_CREDITS: u32 = 30;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Two courses share the same ID.
    DuplicateId,
    /// A course has an empty ID.
    EmptyId,
    /// A slot's period lies outside `1..=9`.
    InvalidSlot,
    /// A course is worth zero credits.
    NonPositiveCredits,
    /// A course is worth more than [`MAX_COURSE_CREDITS`].
    ExcessiveCredits,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a normalized catalog.
///
/// Checks:
/// 1. No duplicate course IDs
/// 2. No empty course IDs
/// 3. Every scheduled slot has a period in `1..=9`
/// 4. Every course has credits in `1..=MAX_COURSE_CREDITS`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for course in courses {
        if course.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Course '{}' has an empty ID", course.name),
            ));
        } else if !ids.insert(course.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate course ID: {}", course.id),
            ));
        }

        for slot in course.slots.iter().filter(|s| !s.is_valid()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSlot,
                format!(
                    "Course '{}' has slot {slot} outside periods 1..={PERIODS_PER_DAY}",
                    course.id
                ),
            ));
        }

        if course.credits == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCredits,
                format!("Course '{}' is worth zero credits", course.id),
            ));
        } else if course.credits > MAX_COURSE_CREDITS {
            errors.push(ValidationError::new(
                ValidationErrorKind::ExcessiveCredits,
                format!(
                    "Course '{}' is worth {} credits, above the maximum of {MAX_COURSE_CREDITS}",
                    course.id, course.credits
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
