// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    ADMISSIONS, NICK, advance_to_scheduling, create_session_with, create_test_session,
    create_test_today, fill_scheduling,
};
use crate::{
    AddStudentRequest, ApiError, BookingSession, StudentView, WizardView, add_student,
    continue_step, current_view, select_category, select_student, set_aux_toggle, set_scenario,
    submit,
};
use chrono::NaiveDate;
use coach_booking::BookingConfig;
use coach_booking_domain::{
    AuxToggles, FOCUS_AREAS, INTRODUCTORY_CATEGORY, Scenario, ScenarioCatalogKey,
};

#[test]
fn test_session_rejects_scenario_outside_catalog() {
    let result: Result<BookingSession, ApiError> = BookingSession::new(
        ScenarioCatalogKey::Default,
        BookingConfig::new(Scenario::BigCCoaching, AuxToggles::default()),
        create_test_today(),
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_set_scenario_checks_catalog() {
    let mut session: BookingSession = create_test_session();

    let unknown: Result<WizardView, ApiError> = set_scenario(&mut session, "no-such-scenario");
    let foreign: Result<WizardView, ApiError> = set_scenario(&mut session, "big-c-coaching");

    assert!(matches!(unknown, Err(ApiError::InvalidInput { .. })));
    assert!(matches!(foreign, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_no_appointments_marks_students_unselectable() {
    let mut session: BookingSession = create_test_session();

    let view: WizardView = set_scenario(&mut session, "no-appointments").unwrap();

    assert!(view.students.iter().all(|s| s.sessions_available == 0));
    assert!(view.students.iter().all(|s| !s.selectable));
}

#[test]
fn test_no_appointments_does_not_block_wizard() {
    let mut session: BookingSession =
        create_session_with(Scenario::NoAppointments, AuxToggles::default());
    select_student(&mut session, NICK).unwrap();
    select_category(&mut session, ADMISSIONS).unwrap();

    let view: WizardView = continue_step(&mut session, 0).unwrap();

    assert!(view.validation_error.is_none());
    assert_eq!(view.cursor, 1);
}

#[test]
fn test_no_topics_available() {
    let mut session: BookingSession =
        create_session_with(Scenario::NoTopicsAvailable, AuxToggles::default());
    let students: Vec<StudentView> = current_view(&session).students;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].display_name, "Baby");

    select_student(&mut session, 4).unwrap();
    select_category(&mut session, "Academic Foundations").unwrap();
    let view: WizardView = continue_step(&mut session, 0).unwrap();

    assert!(view.available_topics.is_empty());
}

#[test]
fn test_no_dates_available() {
    let mut session: BookingSession =
        create_session_with(Scenario::NoDatesAvailable, AuxToggles::default());

    let view: WizardView = advance_to_scheduling(&mut session);

    assert!(view.available_dates.is_empty());
    assert!(view.available_times.is_empty());
}

#[test]
fn test_hide_intro_after_call() {
    let mut session: BookingSession =
        create_session_with(Scenario::HideIntroAfterCall, AuxToggles::default());

    let nick: WizardView = select_student(&mut session, NICK).unwrap();
    let christopher: WizardView = select_student(&mut session, 2).unwrap();

    assert!(
        !nick
            .available_categories
            .iter()
            .any(|c| c.name == INTRODUCTORY_CATEGORY)
    );
    assert_eq!(
        christopher.available_categories[0].name,
        INTRODUCTORY_CATEGORY
    );
}

#[test]
fn test_big_c_focus_areas() {
    let mut session: BookingSession = BookingSession::new(
        ScenarioCatalogKey::OneBh,
        BookingConfig::new(Scenario::BigCCoaching, AuxToggles::default()),
        create_test_today(),
    )
    .unwrap();

    let view: WizardView = select_student(&mut session, NICK).unwrap();
    let names: Vec<&str> = view.available_categories.iter().map(|c| c.name).collect();

    assert_eq!(names, FOCUS_AREAS.to_vec());

    select_category(&mut session, "Financial").unwrap();
    let view: WizardView = continue_step(&mut session, 0).unwrap();
    assert_eq!(view.cursor, 1);
    assert!(!view.available_topics.is_empty());
}

#[test]
fn test_scenario_switch_resets_wizard_and_roster() {
    let mut session: BookingSession = create_test_session();
    add_student(
        &mut session,
        &AddStudentRequest {
            display_name: String::from("Lily"),
            age_band: String::from("2nd grade"),
        },
    )
    .unwrap();
    advance_to_scheduling(&mut session);

    let view: WizardView = set_scenario(&mut session, "with-existing-students").unwrap();

    assert_eq!(view.scenario, Scenario::WithExistingStudents);
    assert_eq!(view.cursor, 0);
    assert!(view.completed.is_empty());
    assert!(view.fields.student.is_none());
    assert_eq!(view.students.len(), 3);
    assert_eq!(view.existing_students.len(), 3);
}

#[test]
fn test_scenario_allowed_after_submit() {
    let mut session: BookingSession = create_test_session();
    advance_to_scheduling(&mut session);
    fill_scheduling(&mut session);
    submit(&mut session).unwrap();

    let view: WizardView = set_scenario(&mut session, "no-dates-available").unwrap();

    assert!(view.summary.is_none());
    assert!(view.available_dates.is_empty());
}

#[test]
fn test_unknown_toggle_rejected() {
    let mut session: BookingSession = create_test_session();

    let result: Result<WizardView, ApiError> = set_aux_toggle(&mut session, "dark-mode", true);

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_teams_toggle_swaps_phone_options() {
    let mut session: BookingSession = create_test_session();

    let view: WizardView = set_aux_toggle(&mut session, "teamsCalls", true).unwrap();

    assert!(view.toggles.teams_calls);
    assert_eq!(view.phone_options[0].label, "Home");
}

#[test]
fn test_dates_are_deterministic() {
    let session: BookingSession = create_test_session();

    let first: Vec<NaiveDate> = session.available_dates();
    let second: Vec<NaiveDate> = session.available_dates();

    assert_eq!(first, second);
    assert_eq!(first[0], NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
}
