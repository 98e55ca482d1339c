//! Selection state machine.
//!
//! One [`ScheduleSession`] is one student's working state. The session is an
//! ordinary owned value: callers that share it across threads wrap the whole
//! session in a single lock, and independent sessions never interact.
//!
//! Every transition is all-or-nothing. Checks run before any pool is touched,
//! so an error leaves candidates, cart and confirmed schedule unchanged.

use tracing::{debug, info, warn};

use super::conflict::find_conflict;
use super::snapshot::ScheduleSnapshot;
use super::Pool;
use crate::error::{Result, ScheduleError};
use crate::models::{Course, Priority};
use crate::render::{Color, ColorAssigner, Grid};
use crate::validation::validate_catalog;

/// A course in the confirmed schedule together with its display color.
///
/// Only a session creates these, so every confirmed course has passed the
/// catalog gate and the conflict check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedCourse {
    course: Course,
    color: Color,
}

impl ConfirmedCourse {
    pub(crate) fn new(course: Course, color: Color) -> Self {
        Self { course, color }
    }

    /// The confirmed course.
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Display color assigned at confirmation.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl AsRef<Course> for ConfirmedCourse {
    fn as_ref(&self) -> &Course {
        &self.course
    }
}

/// Candidate pool, cart, and confirmed schedule of one student.
#[derive(Debug, Clone, Default)]
pub struct ScheduleSession {
    candidates: Vec<Course>,
    cart: Vec<Course>,
    confirmed: Vec<ConfirmedCourse>,
    colors: ColorAssigner,
}

impl ScheduleSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole session with a new catalog.
    ///
    /// Every course becomes a candidate; cart and confirmed schedule are
    /// discarded. A catalog failing validation is rejected wholesale and the
    /// previous state is kept.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidCatalog`] with every detected problem.
    pub fn load(&mut self, catalog: Vec<Course>) -> Result<()> {
        if let Err(errors) = validate_catalog(&catalog) {
            warn!(errors = errors.len(), "catalog rejected");
            return Err(ScheduleError::InvalidCatalog(errors));
        }

        info!(
            courses = catalog.len(),
            dropped_cart = self.cart.len(),
            dropped_confirmed = self.confirmed.len(),
            "catalog loaded"
        );
        self.candidates = catalog;
        self.cart.clear();
        self.confirmed.clear();
        self.colors.clear();
        Ok(())
    }

    /// Moves a candidate into the cart.
    ///
    /// # Errors
    /// - [`ScheduleError::AlreadySelected`] if the course is in the cart or confirmed.
    /// - [`ScheduleError::NotFound`] if no candidate has this id.
    pub fn add_to_cart(&mut self, id: &str) -> Result<()> {
        if let Some(pool @ (Pool::Cart | Pool::Confirmed)) = self.pool_of(id) {
            return Err(ScheduleError::AlreadySelected {
                id: id.to_string(),
                pool,
            });
        }

        let idx = position(&self.candidates, id).ok_or_else(|| not_found(id))?;
        let course = self.candidates.remove(idx);
        debug!(id, course = %course.name, "added to cart");
        self.cart.push(course);
        Ok(())
    }

    /// Moves a cart course into the confirmed schedule.
    ///
    /// The course is checked against the confirmed schedule in confirmation
    /// order; the first overlapping course blocks it. On success the course
    /// gets its display color.
    ///
    /// # Errors
    /// - [`ScheduleError::TimeConflict`] naming the blocking course; the course stays in the cart.
    /// - [`ScheduleError::AlreadySelected`] if the course is already confirmed.
    /// - [`ScheduleError::NotFound`] if the course is not in the cart.
    pub fn confirm(&mut self, id: &str) -> Result<&ConfirmedCourse> {
        let idx = match position(&self.cart, id) {
            Some(idx) => idx,
            None if self.pool_of(id) == Some(Pool::Confirmed) => {
                return Err(ScheduleError::AlreadySelected {
                    id: id.to_string(),
                    pool: Pool::Confirmed,
                })
            }
            None => return Err(not_found(id)),
        };

        if let Some(blocker) = find_conflict(&self.cart[idx], &self.confirmed) {
            warn!(id, blocked_by = %blocker.name, "confirm blocked by time conflict");
            return Err(ScheduleError::TimeConflict {
                id: id.to_string(),
                conflicting_course: blocker.name.clone(),
            });
        }

        let course = self.cart.remove(idx);
        let color = self.colors.color_for(&course.name);
        debug!(id, course = %course.name, %color, "confirmed");
        self.confirmed.push(ConfirmedCourse::new(course, color));
        let last = self.confirmed.len() - 1;
        Ok(&self.confirmed[last])
    }

    /// Removes a course from whichever pool holds it.
    ///
    /// The course is not returned to the candidates; only a catalog load
    /// creates candidates.
    ///
    /// # Errors
    /// [`ScheduleError::NotFound`] if no pool tracks the id.
    pub fn remove(&mut self, id: &str) -> Result<(Pool, Course)> {
        let removed = match self.pool_of(id) {
            Some(Pool::Confirmed) => {
                let idx = self
                    .confirmed
                    .iter()
                    .position(|c| c.course.id == id)
                    .ok_or_else(|| not_found(id))?;
                (Pool::Confirmed, self.confirmed.remove(idx).course)
            }
            Some(Pool::Cart) => {
                let idx = position(&self.cart, id).ok_or_else(|| not_found(id))?;
                (Pool::Cart, self.cart.remove(idx))
            }
            Some(Pool::Candidates) => {
                let idx = position(&self.candidates, id).ok_or_else(|| not_found(id))?;
                (Pool::Candidates, self.candidates.remove(idx))
            }
            None => return Err(not_found(id)),
        };

        debug!(id, pool = %removed.0, "removed");
        Ok(removed)
    }

    /// The pool currently holding `id`.
    pub fn pool_of(&self, id: &str) -> Option<Pool> {
        if self.confirmed.iter().any(|c| c.course.id == id) {
            Some(Pool::Confirmed)
        } else if position(&self.cart, id).is_some() {
            Some(Pool::Cart)
        } else if position(&self.candidates, id).is_some() {
            Some(Pool::Candidates)
        } else {
            None
        }
    }

    /// Candidates in catalog order.
    pub fn candidates(&self) -> &[Course] {
        &self.candidates
    }

    /// Candidates with high-priority courses first, catalog order otherwise.
    pub fn candidates_by_priority(&self) -> Vec<&Course> {
        let mut sorted: Vec<&Course> = self.candidates.iter().collect();
        sorted.sort_by_key(|c| c.priority != Priority::High);
        sorted
    }

    /// Cart in selection order.
    pub fn cart(&self) -> &[Course] {
        &self.cart
    }

    /// Confirmed schedule in confirmation order.
    pub fn confirmed(&self) -> &[ConfirmedCourse] {
        &self.confirmed
    }

    /// Colors handed out in this session.
    pub fn colors(&self) -> &ColorAssigner {
        &self.colors
    }

    /// Credits currently in the cart.
    pub fn cart_credits(&self) -> u32 {
        self.cart
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.credits))
    }

    /// Credits in the confirmed schedule.
    pub fn confirmed_credits(&self) -> u32 {
        self.confirmed
            .iter()
            .fold(0u32, |acc, c| acc.saturating_add(c.course.credits))
    }

    /// Renders the confirmed schedule as a timetable grid.
    pub fn render_grid(&self) -> Result<Grid> {
        Grid::render(&self.confirmed)
    }

    /// Captures the confirmed schedule under a caller-chosen label.
    pub fn snapshot(&self, label: impl Into<String>) -> ScheduleSnapshot {
        ScheduleSnapshot::new(
            label,
            self.confirmed.iter().map(|c| c.course.clone()).collect(),
        )
    }

    /// Rebuilds a session whose confirmed schedule is the snapshot's courses.
    ///
    /// Courses pass through the regular `load` → `add_to_cart` → `confirm`
    /// path, so a snapshot that was edited into an invalid or conflicting
    /// state is rejected with the same errors.
    pub fn restore(snapshot: &ScheduleSnapshot) -> Result<Self> {
        let mut session = Self::new();
        session.load(snapshot.courses.clone())?;
        for course in &snapshot.courses {
            session.add_to_cart(&course.id)?;
            session.confirm(&course.id)?;
        }
        info!(label = %snapshot.label, courses = session.confirmed.len(), "snapshot restored");
        Ok(session)
    }
}

fn position(pool: &[Course], id: &str) -> Option<usize> {
    pool.iter().position(|c| c.id == id)
}

fn not_found(id: &str) -> ScheduleError {
    ScheduleError::NotFound { id: id.to_string() }
}
