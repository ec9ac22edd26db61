// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenario-aware views over the fixtures.
//!
//! Every function is a pure projection of `(scenario, inputs)`; calling one
//! twice with the same arguments yields the same list.

use crate::fixtures;
use chrono::NaiveDate;
use coach_booking_domain::{
    CoachConstraint, EligibilityView, ExistingStudent, PreviousCoachSession, Scenario, Student,
    StudentId, TimeSlot, available_dates, available_times_for_date,
};

/// The roster as seen under `scenario`.
///
/// - `no-appointments`: every student has zero sessions left
/// - `no-topics-available`: a single newborn
#[must_use]
pub fn students_for_scenario(scenario: Scenario) -> Vec<Student> {
    match scenario {
        Scenario::NoAppointments => fixtures::mock_students()
            .into_iter()
            .map(|mut student| {
                student.sessions_available = 0;
                student
            })
            .collect(),
        Scenario::NoTopicsAvailable => fixtures::newborn_roster(),
        _ => fixtures::mock_students(),
    }
}

/// Students from other services that may be claimed. Empty unless the
/// scenario is `with-existing-students`.
#[must_use]
pub fn existing_students_for_scenario(scenario: Scenario) -> Vec<ExistingStudent> {
    match scenario {
        Scenario::WithExistingStudents => fixtures::mock_existing_students(),
        _ => Vec::new(),
    }
}

/// Topics for `category` as seen by `student` under `scenario`.
#[must_use]
pub fn topics_for_scenario(scenario: Scenario, category: &str, student: &Student) -> Vec<&'static str> {
    EligibilityView::new(scenario).topics(category, student)
}

/// Bookable dates under `scenario`. Empty for `no-dates-available`.
#[must_use]
pub fn dates_for_scenario(
    scenario: Scenario,
    constraint: &CoachConstraint,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    match scenario {
        Scenario::NoDatesAvailable => Vec::new(),
        _ => available_dates(constraint, today),
    }
}

/// Bookable slots on `date` under `scenario`. Empty for `no-dates-available`.
#[must_use]
pub fn times_for_scenario(
    scenario: Scenario,
    constraint: &CoachConstraint,
    date: NaiveDate,
) -> Vec<TimeSlot> {
    match scenario {
        Scenario::NoDatesAvailable => Vec::new(),
        _ => available_times_for_date(constraint, date),
    }
}

/// The previous session for an exact `(student, topic)` pairing.
#[must_use]
pub fn previous_coach_for(student: StudentId, topic: &str) -> Option<PreviousCoachSession> {
    fixtures::previous_sessions()
        .into_iter()
        .find(|(id, session)| *id == student && session.topic == topic)
        .map(|(_, session)| session)
}
