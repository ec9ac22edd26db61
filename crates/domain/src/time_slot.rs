// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Length of every coaching session.
pub const SESSION_LENGTH_MINUTES: i64 = 45;

/// A bookable start time.
///
/// Serialised as 24-hour `HH:MM`; parses either that form or the display
/// form `h:MM AM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(NaiveTime);

impl TimeSlot {
    /// Creates a slot at `hour:minute`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hour or minute is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, DomainError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| DomainError::InvalidTimeSlot(format!("{hour}:{minute:02}")))
    }

    /// The wrapped time of day.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.0
    }

    /// Value form, e.g. `"09:00"`.
    #[must_use]
    pub fn value(&self) -> String {
        self.0.format("%H:%M").to_string()
    }

    /// Display form, e.g. `"9:00 AM"`.
    #[must_use]
    pub fn display(&self) -> String {
        self.0.format("%-I:%M %p").to_string()
    }

    /// When a session starting at this slot ends.
    #[must_use]
    pub fn end_time(&self) -> NaiveTime {
        self.0 + TimeDelta::minutes(SESSION_LENGTH_MINUTES)
    }

    /// Display form of [`TimeSlot::end_time`].
    #[must_use]
    pub fn end_display(&self) -> String {
        self.end_time().format("%-I:%M %p").to_string()
    }
}

impl FromStr for TimeSlot {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        NaiveTime::parse_from_str(trimmed, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%I:%M %p"))
            .map(Self)
            .map_err(|_| DomainError::InvalidTimeSlot(s.to_string()))
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value())
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_value_and_display_forms() {
        let from_value: TimeSlot = "09:00".parse().unwrap();
        let from_display: TimeSlot = "9:00 AM".parse().unwrap();
        assert_eq!(from_value, from_display);

        let afternoon: TimeSlot = "3:00 PM".parse().unwrap();
        assert_eq!(afternoon.value(), "15:00");
        assert_eq!(afternoon.display(), "3:00 PM");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            "noon".parse::<TimeSlot>(),
            Err(DomainError::InvalidTimeSlot(_))
        ));
        assert!(TimeSlot::from_hm(25, 0).is_err());
    }

    #[test]
    fn test_end_time_is_45_minutes_later() {
        let slot: TimeSlot = TimeSlot::from_hm(16, 0).unwrap();
        assert_eq!(slot.end_display(), "4:45 PM");
    }

    #[test]
    fn test_serializes_as_value_form() {
        let slot: TimeSlot = TimeSlot::from_hm(9, 0).unwrap();
        assert_eq!(serde_json::to_string(&slot).unwrap(), "\"09:00\"");
    }
}
