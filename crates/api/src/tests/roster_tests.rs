// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_session_with, create_test_session};
use crate::{
    AddStudentRequest, ApiError, BookingSession, ClaimExistingStudentRequest, StudentView,
    WizardView, add_student, claim_existing_student, select_student,
};
use coach_booking_domain::{AuxToggles, Scenario};

fn lily() -> AddStudentRequest {
    AddStudentRequest {
        display_name: String::from("Lily"),
        age_band: String::from("2nd grade"),
    }
}

#[test]
fn test_add_student_appends_without_selecting() {
    let mut session: BookingSession = create_test_session();

    let view: WizardView = add_student(&mut session, &lily()).unwrap();
    let added: &StudentView = view.students.last().unwrap();

    assert_eq!(view.students.len(), 4);
    assert_eq!(added.display_name, "Lily");
    assert_eq!(added.age_band, "2nd grade");
    assert_eq!(added.sessions_available, 3);
    assert!(view.fields.student.is_none());
    assert!(session.history().is_empty());
}

#[test]
fn test_added_student_can_be_selected() {
    let mut session: BookingSession = create_test_session();
    add_student(&mut session, &lily()).unwrap();

    let view: WizardView = select_student(&mut session, 4).unwrap();

    assert_eq!(view.fields.student.map(|id| id.value()), Some(4));
}

#[test]
fn test_add_student_unknown_age_band() {
    let mut session: BookingSession = create_test_session();

    let result: Result<WizardView, ApiError> = add_student(
        &mut session,
        &AddStudentRequest {
            display_name: String::from("Lily"),
            age_band: String::from("13th grade"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "age_band"
    ));
}

#[test]
fn test_add_student_blank_name() {
    let mut session: BookingSession = create_test_session();

    let result: Result<WizardView, ApiError> = add_student(
        &mut session,
        &AddStudentRequest {
            display_name: String::from(" "),
            age_band: String::from("2nd grade"),
        },
    );

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "display_name"
    ));
}

#[test]
fn test_claim_existing_student() {
    let mut session: BookingSession =
        create_session_with(Scenario::WithExistingStudents, AuxToggles::default());
    assert_eq!(session.roster().existing_students().len(), 3);

    let view: WizardView = claim_existing_student(
        &mut session,
        &ClaimExistingStudentRequest {
            existing_id: String::from("existing-1"),
            age_band: String::from("9th grade"),
        },
    )
    .unwrap();

    assert_eq!(view.existing_students.len(), 2);
    assert_eq!(view.students.last().unwrap().display_name, "Emma");
}

#[test]
fn test_claim_requires_pool() {
    let mut session: BookingSession = create_test_session();

    let result: Result<WizardView, ApiError> = claim_existing_student(
        &mut session,
        &ClaimExistingStudentRequest {
            existing_id: String::from("existing-1"),
            age_band: String::from("9th grade"),
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_reset_keeps_added_students() {
    let mut session: BookingSession = create_test_session();
    add_student(&mut session, &lily()).unwrap();

    let view: WizardView = crate::reset(&mut session).unwrap();

    assert_eq!(view.students.len(), 4);
}
