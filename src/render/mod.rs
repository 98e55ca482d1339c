//! Timetable rendering: course colors and the weekly grid.
//!
//! Output is plain structured data. Styling is left to the presentation
//! layer, which receives hex colors and a fixed 9 × 5 grid plus an overflow
//! row.

mod color;
mod grid;

pub use color::{pastel_color, Color, ColorAssigner, LIGHTNESS_FLOOR};
pub use grid::{Grid, GridBody, GridCell, OverflowEntry, GRID_ROWS};
