//! Date and time display utilities.
//!
//! Wrapper types that format civil dates and times for terminal output via
//! the `Display` trait.

use std::fmt;

use jiff::civil::{Date, Time};

/// Formats a date as a full itinerary day header, e.g. `Sat Jun 01 2024`.
pub struct DateLabel(pub Date);

impl fmt::Display for DateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %b %d %Y"))
    }
}

/// Formats a date compactly for plan headers, e.g. `Jun 1`.
pub struct ShortDate(pub Date);

impl fmt::Display for ShortDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%b %-d"))
    }
}

/// Formats a time of day as `HH:MM`.
pub struct ClockTime(pub Time);

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%H:%M"))
    }
}
