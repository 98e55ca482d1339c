//! Timetable grid projection.
//!
//! # Layout
//! Nine period rows by five weekday columns, plus one overflow row for
//! courses without a fixed weekly meeting. The shape is fixed regardless of
//! content; presentation layers may rely on it.
//!
//! # Algorithm
//! Each confirmed course either contributes one cell per scheduled slot to
//! the body, or, having none, one entry to the overflow row. Courses are
//! visited in confirmation order. A cell claimed twice is a broken upstream
//! invariant and aborts rendering instead of overwriting.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::Color;
use crate::error::{Result, ScheduleError};
use crate::models::{period_start_label, Weekday, DAYS_PER_WEEK, PERIODS_PER_DAY};
use crate::selection::ConfirmedCourse;

/// Number of body rows.
pub const GRID_ROWS: usize = PERIODS_PER_DAY as usize;

/// Grid body indexed `[period - 1][weekday]`.
pub type GridBody = [[Option<GridCell>; DAYS_PER_WEEK]; GRID_ROWS];

/// A course occupying one period of one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub course_id: String,
    pub course_name: String,
    pub section: String,
    pub instructor: String,
    pub color: Color,
}

/// A course listed in the overflow row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverflowEntry {
    pub course_id: String,
    pub course_name: String,
    pub instructor: String,
    pub color: Color,
}

/// A rendered weekly timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    /// Period × weekday cells.
    pub body: GridBody,
    /// Courses with no fixed meeting, in confirmation order.
    pub overflow: Vec<OverflowEntry>,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            body: std::array::from_fn(|_| std::array::from_fn(|_| None)),
            overflow: Vec::new(),
        }
    }
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Projects a confirmed schedule onto the grid.
    ///
    /// # Errors
    /// [`ScheduleError::RenderInvariantViolation`] if two courses claim one cell.
    pub fn render(confirmed: &[ConfirmedCourse]) -> Result<Self> {
        let mut grid = Self::new();

        for entry in confirmed {
            let course = entry.course();
            if course.is_unscheduled() {
                grid.overflow.push(OverflowEntry {
                    course_id: course.id.clone(),
                    course_name: course.name.clone(),
                    instructor: course.instructor.clone(),
                    color: entry.color(),
                });
                continue;
            }

            for (day, period) in course.scheduled_slots().filter_map(|s| s.day_period()) {
                // Slot ranges are checked when the catalog is loaded.
                let Some(cell) = usize::from(period)
                    .checked_sub(1)
                    .and_then(|row| grid.body.get_mut(row))
                    .map(|row| &mut row[day.index()])
                else {
                    warn!(%day, period, course = %course.name, "slot outside the grid skipped");
                    continue;
                };
                if let Some(occupant) = cell.as_ref() {
                    error!(%day, period, occupant = %occupant.course_name, intruder = %course.name,
                        "grid cell claimed twice");
                    return Err(ScheduleError::RenderInvariantViolation {
                        day,
                        period,
                        occupant: occupant.course_name.clone(),
                        intruder: course.name.clone(),
                    });
                }
                *cell = Some(GridCell {
                    course_id: course.id.clone(),
                    course_name: course.name.clone(),
                    section: course.section.clone(),
                    instructor: course.instructor.clone(),
                    color: entry.color(),
                });
            }
        }

        Ok(grid)
    }

    /// Cell at a day and 1-based period.
    pub fn cell(&self, day: Weekday, period: u8) -> Option<&GridCell> {
        let row = usize::from(period).checked_sub(1)?;
        self.body.get(row)?[day.index()].as_ref()
    }

    /// Occupied cells as `(day, period, cell)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Weekday, u8, &GridCell)> + '_ {
        self.body.iter().zip(1u8..).flat_map(|(row, period)| {
            Weekday::ALL
                .into_iter()
                .zip(row.iter())
                .filter_map(move |(day, cell)| cell.as_ref().map(|c| (day, period, c)))
        })
    }

    /// Row labels (`"09:00"` .. `"17:00"`) paired with their cells.
    pub fn rows(&self) -> impl Iterator<Item = (String, &[Option<GridCell>; DAYS_PER_WEEK])> + '_ {
        self.body
            .iter()
            .zip(1u8..)
            .map(|(row, period)| (period_start_label(period), row))
    }

    /// Whether neither the body nor the overflow row holds anything.
    pub fn is_empty(&self) -> bool {
        self.overflow.is_empty() && self.cells().next().is_none()
    }
}
