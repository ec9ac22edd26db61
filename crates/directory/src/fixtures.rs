// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static mock data. Accessors hand out owned copies; nothing here is mutable.

use chrono::NaiveDate;
use coach_booking_domain::{
    AgeBand, Coach, CoachId, ExistingStudent, PhoneOption, PreviousCoachSession, Student,
    StudentId,
};

/// Sessions granted to every fixture and newly added student.
pub const DEFAULT_SESSION_QUOTA: u32 = 3;

struct StudentFixture {
    id: u32,
    name: &'static str,
    age_band: AgeBand,
}

const STUDENTS: [StudentFixture; 3] = [
    StudentFixture {
        id: 1,
        name: "Nick",
        age_band: AgeBand::Grade12,
    },
    StudentFixture {
        id: 2,
        name: "Christopher",
        age_band: AgeBand::Grade8,
    },
    StudentFixture {
        id: 3,
        name: "Sarah",
        age_band: AgeBand::Grade5,
    },
];

/// The only student shown when no topics are available.
const NEWBORN: StudentFixture = StudentFixture {
    id: 4,
    name: "Baby",
    age_band: AgeBand::Newborn,
};

const EXISTING_STUDENTS: [(&str, &str, &str, &str); 3] = [
    ("existing-1", "Emma", "Johnson", "bc-12345"),
    ("existing-2", "Michael", "Chen", "tut-67890"),
    ("existing-3", "Sophia", "Rodriguez", "bc-54321"),
];

const COACHES: [(&str, &str, [&str; 2]); 4] = [
    (
        "coach-1",
        "Becky",
        ["Preparing College Applications", "College Admissions"],
    ),
    ("coach-2", "Sarah", ["Financial Aid", "Scholarships"]),
    ("coach-3", "Michael", ["Career Planning", "Major Selection"]),
    (
        "coach-4",
        "Jennifer",
        ["Essay Writing", "Preparing College Applications"],
    ),
];

/// (student id, coach id, topic, year, month, day)
const PREVIOUS_SESSIONS: [(u32, &str, &str, i32, u32, u32); 2] = [
    (1, "coach-1", "Preparing College Applications", 2025, 9, 1),
    (
        1,
        "coach-1",
        "Introduction to Your College Coach",
        2025,
        8,
        15,
    ),
];

const PHONE_OPTIONS_DEFAULT: [(&str, &str, &str); 3] = [
    ("work", "Work", "(555) 123-4567"),
    ("mobile", "Mobile", "(555) 987-6543"),
    ("other", "Other", "(555) 456-7890"),
];

const PHONE_OPTIONS_TEAMS: [(&str, &str, &str); 3] = [
    ("home", "Home", "(000) 000-0000"),
    ("mobile", "Mobile", "(000) 000-0000"),
    ("work", "Work", "(000) 000-0000"),
];

fn build_student(fixture: &StudentFixture) -> Option<Student> {
    let student: Student = Student::new(
        StudentId::new(fixture.id),
        fixture.name,
        fixture.age_band,
        DEFAULT_SESSION_QUOTA,
    )
    .ok()?;
    let prior_sessions: u32 = prior_session_count(student.id);
    Some(student.with_prior_sessions(prior_sessions))
}

/// The standard roster.
#[must_use]
pub fn mock_students() -> Vec<Student> {
    STUDENTS.iter().filter_map(build_student).collect()
}

/// The single-student roster used when no topics are available.
#[must_use]
pub fn newborn_roster() -> Vec<Student> {
    build_student(&NEWBORN).into_iter().collect()
}

/// Students known to other services.
#[must_use]
pub fn mock_existing_students() -> Vec<ExistingStudent> {
    EXISTING_STUDENTS
        .iter()
        .map(|(id, first, last, benefit)| ExistingStudent {
            id: (*id).to_string(),
            first_name: (*first).to_string(),
            last_name: (*last).to_string(),
            benefit_id: (*benefit).to_string(),
        })
        .collect()
}

/// Every coach.
#[must_use]
pub fn mock_coaches() -> Vec<Coach> {
    COACHES
        .iter()
        .map(|(id, name, specialties)| Coach {
            id: CoachId::new(id),
            name: (*name).to_string(),
            specialties: specialties.iter().map(ToString::to_string).collect(),
        })
        .collect()
}

/// Session history as `(student, session)` pairs.
#[must_use]
pub fn previous_sessions() -> Vec<(StudentId, PreviousCoachSession)> {
    PREVIOUS_SESSIONS
        .iter()
        .filter_map(|(student, coach_id, topic, year, month, day)| {
            let coach: Coach = mock_coaches()
                .into_iter()
                .find(|c| c.id.as_str() == *coach_id)?;
            let last_meeting_date: NaiveDate = NaiveDate::from_ymd_opt(*year, *month, *day)?;
            Some((
                StudentId::new(*student),
                PreviousCoachSession {
                    coach_id: coach.id,
                    coach_name: coach.name,
                    topic: (*topic).to_string(),
                    last_meeting_date,
                },
            ))
        })
        .collect()
}

/// Number of sessions a student has attended.
#[must_use]
pub fn prior_session_count(student: StudentId) -> u32 {
    let count: usize = PREVIOUS_SESSIONS
        .iter()
        .filter(|(id, ..)| *id == student.value())
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Phone numbers on file. Teams mode offers placeholder backup numbers.
#[must_use]
pub fn phone_options(teams_calls: bool) -> Vec<PhoneOption> {
    let source: &[(&str, &str, &str); 3] = if teams_calls {
        &PHONE_OPTIONS_TEAMS
    } else {
        &PHONE_OPTIONS_DEFAULT
    };
    source
        .iter()
        .map(|(id, label, number)| PhoneOption {
            id: (*id).to_string(),
            label: (*label).to_string(),
            number: (*number).to_string(),
        })
        .collect()
}
