// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Validation failures are not errors; they travel in
//! [`WizardView::validation_error`](crate::WizardView). An `ApiError` means
//! the event was refused and the session is unchanged.

use coach_booking::CoreError;
use coach_booking_directory::DirectoryError;
use coach_booking_domain::DomainError;
use thiserror::Error;

/// API-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The wizard refused the event in its current state.
    #[error("Rejected '{intent}': {message}")]
    IntentRejected {
        /// The refused intent.
        intent: String,
        /// Why it was refused.
        message: String,
    },
    /// The value is well-formed but not among the offered choices.
    #[error("{field} '{value}' is not currently offered")]
    NotOffered {
        /// The picker the value was meant for.
        field: String,
        /// The requested value.
        value: String,
    },
}

fn invalid(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: String::from(field),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::UnknownAgeBand(_) => invalid("age_band", &err),
        DomainError::UnknownScenario(_) | DomainError::UnknownScenarioCatalog(_) => {
            invalid("scenario", &err)
        }
        DomainError::ScenarioNotInCatalog { scenario, catalog } => ApiError::ResourceNotFound {
            resource_type: String::from("Scenario"),
            message: format!("'{scenario}' is not part of the '{catalog}' catalog"),
        },
        DomainError::UnknownAuxToggle(_) => invalid("toggle", &err),
        DomainError::InvalidStepIndex(_) => invalid("step", &err),
        DomainError::InvalidTimeSlot(_) => invalid("time", &err),
        DomainError::DateParseError { .. } => invalid("date", &err),
        DomainError::InvalidStudentName(_) => invalid("display_name", &err),
    }
}

/// Translates a core error into an API error.
///
/// # Arguments
///
/// * `intent` - Name of the refused intent, for the message
/// * `err` - The core error
#[must_use]
pub fn translate_core_error(intent: &str, err: CoreError) -> ApiError {
    ApiError::IntentRejected {
        intent: String::from(intent),
        message: err.to_string(),
    }
}

/// Translates a directory error into an API error.
#[must_use]
pub fn translate_directory_error(err: DirectoryError) -> ApiError {
    match err {
        DirectoryError::StudentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Student"),
            message: format!("Student {id} does not exist"),
        },
        DirectoryError::ExistingStudentNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Existing student"),
            message: format!("'{id}' is not in the candidate pool"),
        },
        DirectoryError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
