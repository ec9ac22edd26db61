// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{
    BookingSession, WizardView, choose_phone_option, continue_step, select_category,
    select_student, select_topic, set_date, set_time,
};
use chrono::NaiveDate;
use coach_booking::BookingConfig;
use coach_booking_domain::{AuxToggles, Scenario, ScenarioCatalogKey};

pub const NICK: u32 = 1;
pub const SARAH: u32 = 3;
pub const ADMISSIONS: &str = "College Admissions";
pub const APPLICATIONS: &str = "Preparing College Applications";
/// The first offered weekday after [`create_test_today`].
pub const FIRST_DATE: &str = "2026-10-19";

/// A Friday.
pub fn create_test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn create_session_with(scenario: Scenario, toggles: AuxToggles) -> BookingSession {
    BookingSession::new(
        ScenarioCatalogKey::Default,
        BookingConfig::new(scenario, toggles),
        create_test_today(),
    )
    .unwrap()
}

pub fn create_test_session() -> BookingSession {
    create_session_with(Scenario::Default, AuxToggles::default())
}

pub fn continuity_on() -> AuxToggles {
    AuxToggles {
        coach_continuity: true,
        teams_calls: false,
    }
}

/// Nick, College Admissions, Preparing College Applications; cursor on step 2.
pub fn advance_to_scheduling(session: &mut BookingSession) -> WizardView {
    select_student(session, NICK).unwrap();
    select_category(session, ADMISSIONS).unwrap();
    continue_step(session, 0).unwrap();
    select_topic(session, APPLICATIONS).unwrap();
    continue_step(session, 1).unwrap()
}

/// Fills every scheduling field with the first offered date and slot.
pub fn fill_scheduling(session: &mut BookingSession) -> WizardView {
    set_date(session, Some(FIRST_DATE)).unwrap();
    let first_slot: String = session.available_times()[0].value();
    set_time(session, Some(&first_slot)).unwrap();
    choose_phone_option(session, "work").unwrap()
}
