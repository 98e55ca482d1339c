//! Weekly time-overlap detection.
//!
//! # Algorithm
//! Two courses conflict iff their sets of scheduled slots intersect. The
//! unscheduled sentinel is dropped before comparison, so a course with no
//! fixed meeting never conflicts with anything. The collection being checked
//! against is scanned in stored order and the first hit is reported, which
//! keeps the reported blocker deterministic.
//!
//! # Complexity
//! O(n · s) for n courses of at most s slots, using `BTreeSet` lookups.

use std::collections::BTreeSet;

use crate::models::{Course, TimeSlot};

/// Scheduled slots of a course, sentinel excluded.
fn scheduled_set(course: &Course) -> BTreeSet<TimeSlot> {
    course.scheduled_slots().copied().collect()
}

/// Slots shared by two courses, in timetable order.
pub fn overlapping_slots(a: &Course, b: &Course) -> Vec<TimeSlot> {
    let b_slots = scheduled_set(b);
    a.scheduled_slots()
        .filter(|slot| b_slots.contains(slot))
        .copied()
        .collect()
}

/// Finds the first course in `against` that overlaps `candidate`.
///
/// Returns `None` when the candidate has no scheduled slot or nothing
/// overlaps. Courses in `against` without scheduled slots are skipped.
pub fn find_conflict<'a, C: AsRef<Course>>(candidate: &Course, against: &'a [C]) -> Option<&'a Course> {
    let candidate_slots = scheduled_set(candidate);
    if candidate_slots.is_empty() {
        return None;
    }

    against
        .iter()
        .map(|c| c.as_ref())
        .find(|other| other.scheduled_slots().any(|slot| candidate_slots.contains(slot)))
}

/// Whether `candidate` overlaps any course in `against`.
#[inline]
pub fn has_conflict<C: AsRef<Course>>(candidate: &Course, against: &[C]) -> bool {
    find_conflict(candidate, against).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn calculus() -> Course {
        Course::new("C1", "CalculusI")
            .with_slots([TimeSlot::at(Weekday::Mon, 1), TimeSlot::at(Weekday::Wed, 1)])
    }

    fn physics() -> Course {
        Course::new("C2", "Physics")
            .with_slots([TimeSlot::at(Weekday::Mon, 1), TimeSlot::at(Weekday::Tue, 2)])
    }

    #[test]
    fn test_overlap_detected() {
        let confirmed = vec![calculus()];
        let hit = find_conflict(&physics(), &confirmed).unwrap();
        assert_eq!(hit.name, "CalculusI");
        assert_eq!(
            overlapping_slots(&physics(), &calculus()),
            vec![TimeSlot::at(Weekday::Mon, 1)]
        );
    }

    #[test]
    fn test_disjoint_courses() {
        let english = Course::new("C3", "English").with_slot(TimeSlot::at(Weekday::Thu, 5));
        assert!(!has_conflict(&english, &[calculus(), physics()]));
        assert!(overlapping_slots(&english, &calculus()).is_empty());
    }

    #[test]
    fn test_unscheduled_never_conflicts() {
        let remote = Course::new("R", "RemoteSeminar").with_slot(TimeSlot::Unscheduled);
        let empty = Course::new("E", "Async");
        let also_remote = Course::new("R2", "Online").with_slot(TimeSlot::Unscheduled);

        assert!(!has_conflict(&remote, &[calculus(), also_remote.clone()]));
        assert!(!has_conflict(&empty, &[calculus()]));
        assert!(!has_conflict(&calculus(), &[remote, empty, also_remote]));
    }

    #[test]
    fn test_first_conflict_in_stored_order() {
        let a = Course::new("A", "Alpha").with_slot(TimeSlot::at(Weekday::Fri, 3));
        let b = Course::new("B", "Beta").with_slot(TimeSlot::at(Weekday::Fri, 4));
        let probe = Course::new("P", "Probe")
            .with_slots([TimeSlot::at(Weekday::Fri, 3), TimeSlot::at(Weekday::Fri, 4)]);

        assert_eq!(find_conflict(&probe, &[b.clone(), a.clone()]).unwrap().name, "Beta");
        assert_eq!(find_conflict(&probe, &[a, b]).unwrap().name, "Alpha");
    }

    #[test]
    fn test_empty_against() {
        let none: Vec<Course> = Vec::new();
        assert!(find_conflict(&calculus(), &none).is_none());
    }
}
