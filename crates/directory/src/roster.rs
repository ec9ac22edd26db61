// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DirectoryError;
use crate::fixtures::DEFAULT_SESSION_QUOTA;
use crate::scenario_data::{existing_students_for_scenario, students_for_scenario};
use coach_booking_domain::{AgeBand, ExistingStudent, Scenario, Student, StudentId};
use std::collections::BTreeSet;

/// The in-memory student list for one booking session.
///
/// Starts from the scenario's fixture view. The add-student flow appends to
/// it; claimed existing students leave the candidate pool. Nothing is
/// persisted, and switching scenario starts over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    scenario: Scenario,
    added: Vec<Student>,
    claimed: BTreeSet<String>,
}

impl Roster {
    /// Creates the roster for `scenario`.
    #[must_use]
    pub const fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            added: Vec::new(),
            claimed: BTreeSet::new(),
        }
    }

    /// The scenario this roster reflects.
    #[must_use]
    pub const fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Every student, fixtures first, then added students in order.
    #[must_use]
    pub fn students(&self) -> Vec<Student> {
        let mut students: Vec<Student> = students_for_scenario(self.scenario);
        students.extend(self.added.iter().cloned());
        students
    }

    /// Looks up a student by id.
    ///
    /// # Errors
    ///
    /// Returns an error if no student has this id.
    pub fn student(&self, id: StudentId) -> Result<Student, DirectoryError> {
        self.students()
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(DirectoryError::StudentNotFound(id))
    }

    /// Existing students that have not been claimed yet.
    #[must_use]
    pub fn existing_students(&self) -> Vec<ExistingStudent> {
        existing_students_for_scenario(self.scenario)
            .into_iter()
            .filter(|e| !self.claimed.contains(&e.id))
            .collect()
    }

    fn next_id(&self) -> StudentId {
        let highest: u32 = self
            .students()
            .iter()
            .map(|s| s.id.value())
            .max()
            .unwrap_or(0);
        StudentId::new(highest.saturating_add(1))
    }

    /// Appends a new student with the default session quota.
    ///
    /// # Arguments
    ///
    /// * `display_name` - Name shown in the picker
    /// * `age_band` - The student's life stage
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty.
    pub fn add_student(
        &mut self,
        display_name: &str,
        age_band: AgeBand,
    ) -> Result<Student, DirectoryError> {
        let student: Student =
            Student::new(self.next_id(), display_name, age_band, DEFAULT_SESSION_QUOTA)?;
        self.added.push(student.clone());
        Ok(student)
    }

    /// Converts an existing student into a roster student.
    ///
    /// The display name is the existing student's first name. The candidate
    /// leaves the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate is unknown or already claimed.
    pub fn claim_existing(
        &mut self,
        existing_id: &str,
        age_band: AgeBand,
    ) -> Result<Student, DirectoryError> {
        let candidate: ExistingStudent = self
            .existing_students()
            .into_iter()
            .find(|e| e.id == existing_id)
            .ok_or_else(|| DirectoryError::ExistingStudentNotFound(existing_id.to_string()))?;

        let student: Student = self.add_student(&candidate.first_name, age_band)?;
        self.claimed.insert(candidate.id);
        Ok(student)
    }
}
