//! Weekly time slot model.
//!
//! A timetable week has five teaching days and nine periods per day.
//! Period *n* starts at `08:00 + n` hours, so period 1 is 09:00 and
//! period 9 is 17:00. Courses without a fixed weekly meeting (remote,
//! asynchronous, intensive) carry the [`TimeSlot::Unscheduled`] sentinel
//! or no slots at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of teaching periods per day.
pub const PERIODS_PER_DAY: u8 = 9;

/// Number of teaching days per week.
pub const DAYS_PER_WEEK: usize = 5;

/// A teaching day.
///
/// Ordered Monday first, so sorted slot sets read like a timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All teaching days in column order.
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Zero-based grid column.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// English abbreviation (`"Mon"`).
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }

    /// Korean day initial (`"월"`), as printed in university timetables.
    pub fn korean(self) -> &'static str {
        match self {
            Weekday::Mon => "월",
            Weekday::Tue => "화",
            Weekday::Wed => "수",
            Weekday::Thu => "목",
            Weekday::Fri => "금",
        }
    }

    fn parse_prefix(s: &str) -> Option<(Weekday, &str)> {
        for day in Self::ALL {
            for name in [day.abbrev(), day.korean()] {
                if let Some(rest) = strip_prefix_ignore_case(s, name) {
                    return Some((day, rest));
                }
            }
        }
        None
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        s.get(prefix.len()..)
    } else {
        None
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// A weekly meeting unit: one period on one day, or the unscheduled sentinel.
///
/// # Invariant
/// A scheduled slot has `period` in `1..=9`. The constructor does not
/// enforce this because records arrive from an external extractor; the
/// catalog gate ([`crate::validation::validate_catalog`]) rejects bad slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// A fixed weekly meeting.
    At {
        /// Teaching day.
        day: Weekday,
        /// Period (1-based).
        period: u8,
    },
    /// No fixed weekly meeting. Never overlaps anything.
    Unscheduled,
}

impl TimeSlot {
    /// Creates a scheduled slot.
    pub fn at(day: Weekday, period: u8) -> Self {
        TimeSlot::At { day, period }
    }

    /// Whether this slot is a fixed weekly meeting.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        matches!(self, TimeSlot::At { .. })
    }

    /// Whether this slot satisfies the range invariant.
    ///
    /// The sentinel is always valid.
    pub fn is_valid(&self) -> bool {
        match self {
            TimeSlot::At { period, .. } => (1..=PERIODS_PER_DAY).contains(period),
            TimeSlot::Unscheduled => true,
        }
    }

    /// Day and period of a scheduled slot.
    pub fn day_period(&self) -> Option<(Weekday, u8)> {
        match *self {
            TimeSlot::At { day, period } => Some((day, period)),
            TimeSlot::Unscheduled => None,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlot::At { day, period } => write!(f, "{day}{period}"),
            TimeSlot::Unscheduled => f.write_str("-"),
        }
    }
}

/// Error returned when slot notation cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized time slot '{0}'")]
pub struct ParseSlotError(pub String);

impl FromStr for TimeSlot {
    type Err = ParseSlotError;

    /// Parses `Mon1`, `wed 3`, `월1`, or `-`/`none`/empty for the sentinel.
    ///
    /// The period range is not checked here; see [`TimeSlot::is_valid`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("none") {
            return Ok(TimeSlot::Unscheduled);
        }

        let (day, rest) =
            Weekday::parse_prefix(trimmed).ok_or_else(|| ParseSlotError(s.to_string()))?;
        let period = rest
            .trim()
            .parse::<u8>()
            .map_err(|_| ParseSlotError(s.to_string()))?;
        Ok(TimeSlot::at(day, period))
    }
}

/// Start time label of a period (`"09:00"` for period 1).
pub fn period_start_label(period: u8) -> String {
    format!("{:02}:00", 8 + u32::from(period))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_english_and_korean() {
        assert_eq!("Mon1".parse::<TimeSlot>(), Ok(TimeSlot::at(Weekday::Mon, 1)));
        assert_eq!("wed 3".parse::<TimeSlot>(), Ok(TimeSlot::at(Weekday::Wed, 3)));
        assert_eq!("금9".parse::<TimeSlot>(), Ok(TimeSlot::at(Weekday::Fri, 9)));
    }

    #[test]
    fn test_parse_sentinel() {
        assert_eq!("".parse::<TimeSlot>(), Ok(TimeSlot::Unscheduled));
        assert_eq!("-".parse::<TimeSlot>(), Ok(TimeSlot::Unscheduled));
        assert_eq!("None".parse::<TimeSlot>(), Ok(TimeSlot::Unscheduled));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("Sat1".parse::<TimeSlot>().is_err());
        assert!("Mon".parse::<TimeSlot>().is_err());
        assert!("월x".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_validity() {
        assert!(TimeSlot::at(Weekday::Tue, 9).is_valid());
        assert!(!TimeSlot::at(Weekday::Tue, 0).is_valid());
        assert!(!TimeSlot::at(Weekday::Tue, 10).is_valid());
        assert!(TimeSlot::Unscheduled.is_valid());
        assert!(!TimeSlot::Unscheduled.is_scheduled());
    }

    #[test]
    fn test_display_round_trip() {
        let slot = TimeSlot::at(Weekday::Thu, 4);
        assert_eq!(slot.to_string(), "Thu4");
        assert_eq!(slot.to_string().parse::<TimeSlot>(), Ok(slot));
    }

    #[test]
    fn test_period_start_label() {
        assert_eq!(period_start_label(1), "09:00");
        assert_eq!(period_start_label(9), "17:00");
    }
}
