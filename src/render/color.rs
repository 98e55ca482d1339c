//! Deterministic pastel colors for course blocks.
//!
//! # Algorithm
//! The course name is hashed with BLAKE3 and the first three digest bytes
//! become the red, green and blue channels. Each byte is halved and lifted
//! into `128..=255`, so every color is light enough to sit behind dark text.
//! Keying on the name (not the id) gives all sections of a subject one color.
//! Distinct names may collide; no avoidance is attempted.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Lower bound of every channel.
pub const LIGHTNESS_FLOOR: u8 = 128;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation (`"#a1b2c3"`).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Whether every channel is at or above [`LIGHTNESS_FLOOR`].
    pub fn is_pastel(self) -> bool {
        self.r >= LIGHTNESS_FLOOR && self.g >= LIGHTNESS_FLOOR && self.b >= LIGHTNESS_FLOOR
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[inline]
fn lift(byte: u8) -> u8 {
    LIGHTNESS_FLOOR | (byte >> 1)
}

/// Pastel color for a course name. Pure and stable across processes.
pub fn pastel_color(course_name: &str) -> Color {
    let digest = blake3::hash(course_name.as_bytes());
    let bytes = digest.as_bytes();
    Color::rgb(lift(bytes[0]), lift(bytes[1]), lift(bytes[2]))
}

/// Remembers the color handed out for each course name in a session.
#[derive(Debug, Clone, Default)]
pub struct ColorAssigner {
    assigned: HashMap<String, Color>,
}

impl ColorAssigner {
    /// Creates an empty assigner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for a course name, assigning it on first request.
    pub fn color_for(&mut self, course_name: &str) -> Color {
        *self
            .assigned
            .entry(course_name.to_string())
            .or_insert_with(|| pastel_color(course_name))
    }

    /// Previously assigned color, if any.
    pub fn get(&self, course_name: &str) -> Option<Color> {
        self.assigned.get(course_name).copied()
    }

    /// Number of names with an assigned color.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Whether no color has been assigned yet.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Forgets every assignment.
    pub fn clear(&mut self) {
        self.assigned.clear();
    }
}
