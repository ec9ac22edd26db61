// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coach_booking_domain::{DomainError, StudentId};

/// Errors raised by roster lookups and the add-student flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No student with this id is on the roster.
    StudentNotFound(StudentId),
    /// No unclaimed existing student with this id.
    ExistingStudentNotFound(String),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StudentNotFound(id) => write!(f, "Student {id} not found"),
            Self::ExistingStudentNotFound(id) => {
                write!(f, "Existing student '{id}' not found or already added")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for DirectoryError {}

impl From<DomainError> for DirectoryError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
