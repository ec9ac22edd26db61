// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AgeBand, AuxToggle, AuxToggles, CoachId, DomainError, PreviousCoachSession, Student,
    StudentId, WizardStep,
};
use chrono::NaiveDate;

#[test]
fn test_age_band_parses_labels_case_insensitively() {
    assert_eq!("11th grade".parse::<AgeBand>().unwrap(), AgeBand::Grade11);
    assert_eq!("  pre-k ".parse::<AgeBand>().unwrap(), AgeBand::PreK);
    assert_eq!("Postgraduate".parse::<AgeBand>().unwrap(), AgeBand::Postgraduate);
    assert!(matches!(
        "13th grade".parse::<AgeBand>(),
        Err(DomainError::UnknownAgeBand(_))
    ));
}

#[test]
fn test_age_band_order_follows_life_order() {
    assert!(AgeBand::Prenatal < AgeBand::Newborn);
    assert!(AgeBand::Kindergarten < AgeBand::Grade1);
    assert!(AgeBand::Grade12 < AgeBand::Postgraduate);
    assert_eq!(AgeBand::ALL.len(), 20);
    assert!(AgeBand::ALL.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_age_band_serializes_as_label() {
    let json: String = serde_json::to_string(&AgeBand::Grade8).unwrap();
    assert_eq!(json, "\"8th grade\"");
    let back: AgeBand = serde_json::from_str(&json).unwrap();
    assert_eq!(back, AgeBand::Grade8);
}

#[test]
fn test_student_new_trims_and_rejects_empty_names() {
    let student: Student = Student::new(StudentId::new(7), "  Ada ", AgeBand::Grade3, 3).unwrap();
    assert_eq!(student.display_name, "Ada");
    assert_eq!(student.prior_sessions, 0);
    assert!(student.is_bookable());

    let result: Result<Student, DomainError> =
        Student::new(StudentId::new(8), "   ", AgeBand::Grade3, 3);
    assert!(matches!(result, Err(DomainError::InvalidStudentName(_))));
}

#[test]
fn test_student_with_zero_sessions_is_not_bookable() {
    let student: Student = Student::new(StudentId::new(1), "Nick", AgeBand::Grade12, 0).unwrap();
    assert!(!student.is_bookable());
}

#[test]
fn test_wizard_step_index_round_trip() {
    for step in WizardStep::ALL {
        assert_eq!(WizardStep::from_index(step.index()).unwrap(), step);
    }
    assert!(matches!(
        WizardStep::from_index(3),
        Err(DomainError::InvalidStepIndex(3))
    ));
}

#[test]
fn test_aux_toggles_get_and_set() {
    let mut toggles: AuxToggles = AuxToggles::default();
    assert!(!toggles.get(AuxToggle::CoachContinuity));

    toggles.set(AuxToggle::TeamsCalls, true);
    assert!(toggles.teams_calls);
    assert!(!toggles.coach_continuity);

    assert_eq!(
        "coachContinuity".parse::<AuxToggle>().unwrap(),
        AuxToggle::CoachContinuity
    );
    assert!("dark-mode".parse::<AuxToggle>().is_err());
}

#[test]
fn test_continuity_line_uses_short_us_date() {
    let session: PreviousCoachSession = PreviousCoachSession {
        coach_id: CoachId::new("coach-1"),
        coach_name: String::from("Becky"),
        topic: String::from("Preparing College Applications"),
        last_meeting_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
    };

    assert_eq!(
        session.continuity_line(),
        "You'll be meeting with Becky. You last met on 9/1/25 for a Preparing College Applications appointment."
    );
}
