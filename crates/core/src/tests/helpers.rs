// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingConfig, Command, WizardState, apply};
use chrono::NaiveDate;
use coach_booking_domain::{
    AgeBand, AuxToggles, CoachId, PreviousCoachSession, Scenario, Student, StudentId, TimeSlot,
    WizardStep,
};

pub const ADMISSIONS: &str = "College Admissions";
pub const APPLICATIONS: &str = "Preparing College Applications";

pub fn create_test_student(id: u32, name: &str, age_band: AgeBand) -> Student {
    Student::new(StudentId::new(id), name, age_band, 3).unwrap()
}

pub fn create_nick() -> Student {
    create_test_student(1, "Nick", AgeBand::Grade11)
}

pub fn create_sarah() -> Student {
    create_test_student(3, "Sarah", AgeBand::Grade5)
}

pub fn create_test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
}

pub fn create_test_time() -> TimeSlot {
    TimeSlot::from_hm(10, 0).unwrap()
}

pub fn create_becky_session() -> PreviousCoachSession {
    PreviousCoachSession {
        coach_id: CoachId::new("coach-1"),
        coach_name: String::from("Becky"),
        topic: String::from(APPLICATIONS),
        last_meeting_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
    }
}

pub fn create_test_state() -> WizardState {
    WizardState::new(BookingConfig::default())
}

pub fn create_state_with(scenario: Scenario, toggles: AuxToggles) -> WizardState {
    WizardState::new(BookingConfig::new(scenario, toggles))
}

/// Applies a command that is expected to be accepted.
pub fn run(state: &WizardState, command: Command) -> WizardState {
    apply(state, command).unwrap().new_state
}

pub fn run_all(state: &WizardState, commands: Vec<Command>) -> WizardState {
    commands
        .into_iter()
        .fold(state.clone(), |current, command| run(&current, command))
}

pub fn select(student: Student, category: &str) -> Vec<Command> {
    vec![
        Command::SelectStudent { student },
        Command::SelectCategory {
            category: String::from(category),
        },
    ]
}

/// Nick in College Admissions, step 0 confirmed, topic step open.
pub fn create_state_at_topic_step(initial: &WizardState) -> WizardState {
    let mut commands: Vec<Command> = select(create_nick(), ADMISSIONS);
    commands.push(Command::Continue {
        step: WizardStep::StudentAndCategory,
    });
    run_all(initial, commands)
}

/// Nick in College Admissions with a topic chosen and the scheduling step open.
pub fn create_state_at_scheduling_step(initial: &WizardState) -> WizardState {
    let at_topic: WizardState = create_state_at_topic_step(initial);
    run_all(
        &at_topic,
        vec![
            Command::SelectTopic {
                topic: String::from(APPLICATIONS),
            },
            Command::Continue {
                step: WizardStep::Topic,
            },
        ],
    )
}

/// Scheduling step open with every required field filled in.
pub fn create_state_ready_to_submit(initial: &WizardState) -> WizardState {
    let scheduling: WizardState = create_state_at_scheduling_step(initial);
    run_all(
        &scheduling,
        vec![
            Command::SetDate {
                date: Some(create_test_date()),
            },
            Command::SetTime {
                time: Some(create_test_time()),
            },
            Command::SetPhone {
                phone: String::from("(555) 123-4567"),
            },
        ],
    )
}
