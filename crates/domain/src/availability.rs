// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mock availability generation.
//!
//! Dates and time slots are a pure function of the reference date and the
//! coach constraint. "Unavailability" is derived from the day of the month,
//! so repeated queries always agree.
//!
//! ## Invariants
//!
//! - No weekend dates are offered, and the earliest date is the day after `today`
//! - Pinning a specific coach never offers more dates or more slots than
//!   [`CoachConstraint::AnyCoach`] for the same window

use crate::time_slot::TimeSlot;
use crate::types::CoachId;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Number of weekdays in the booking window.
pub const BOOKING_WINDOW_WEEKDAYS: usize = 30;

/// A specific coach is available on every n-th weekday of the window.
pub const SPECIFIC_COACH_DATE_STRIDE: usize = 3;

/// Slots offered per day when a specific coach is requested.
pub const SPECIFIC_COACH_SLOTS_PER_DAY: usize = 3;

const FIRST_SLOT_HOUR: u32 = 9;
const LAST_SLOT_HOUR: u32 = 17;

/// Whose calendar the availability is drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "coach_id", rename_all = "snake_case")]
pub enum CoachConstraint {
    /// Any coach with a matching specialty.
    #[default]
    AnyCoach,
    /// Only the named coach.
    Specific(CoachId),
}

impl CoachConstraint {
    /// Returns whether a specific coach is pinned.
    #[must_use]
    pub const fn is_specific(&self) -> bool {
        matches!(self, Self::Specific(_))
    }
}

fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The weekdays following `today`, up to the booking window size.
fn booking_window(today: NaiveDate) -> Vec<NaiveDate> {
    today
        .iter_days()
        .skip(1)
        .filter(|d| is_weekday(*d))
        .take(BOOKING_WINDOW_WEEKDAYS)
        .collect()
}

/// Returns the bookable dates after `today`, in ascending order.
///
/// # Arguments
///
/// * `constraint` - Whether any coach or one specific coach is requested
/// * `today` - The reference date; it is never offered
#[must_use]
pub fn available_dates(constraint: &CoachConstraint, today: NaiveDate) -> Vec<NaiveDate> {
    let window: Vec<NaiveDate> = booking_window(today);
    match constraint {
        CoachConstraint::AnyCoach => window,
        CoachConstraint::Specific(_) => window
            .into_iter()
            .step_by(SPECIFIC_COACH_DATE_STRIDE)
            .collect(),
    }
}

/// Every slot of a working day, 9:00 AM through 5:00 PM.
#[must_use]
pub fn all_time_slots() -> Vec<TimeSlot> {
    (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
        .filter_map(|hour| TimeSlot::from_hm(hour, 0).ok())
        .collect()
}

/// Returns the slots offered on `date`, in ascending order.
///
/// `AnyCoach` drops `day_of_month % 3` slots from the end of the day. A
/// specific coach offers a three-slot run starting at `(day_of_month % 3) * 2`.
#[must_use]
pub fn available_times_for_date(constraint: &CoachConstraint, date: NaiveDate) -> Vec<TimeSlot> {
    let slots: Vec<TimeSlot> = all_time_slots();
    let shift: usize = (date.day() % 3) as usize;

    match constraint {
        CoachConstraint::AnyCoach => {
            let keep: usize = slots.len().saturating_sub(shift);
            slots.into_iter().take(keep).collect()
        }
        CoachConstraint::Specific(_) => slots
            .into_iter()
            .skip(shift * 2)
            .take(SPECIFIC_COACH_SLOTS_PER_DAY)
            .collect(),
    }
}
