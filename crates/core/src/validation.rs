// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Step validation.
//!
//! Validation is synchronous and side-effect free. A failure is returned as a
//! [`ValidationError`] value; the transition layer stores it on the state and
//! leaves everything else untouched.
//!
//! # Rules
//!
//! - **Step 0**: a student and a category must be selected, and the category
//!   must be selectable for the student under the active scenario
//! - **Step 1**: a topic must be selected and selectable, unless the category
//!   bypasses topic selection
//! - **Step 2**: a date, a time and a phone number must be present
//!
//! A student's remaining session count is not checked here. The shell disables
//! students with no sessions left; the state machine accepts them.

use crate::state::WizardState;
use coach_booking_domain::{EligibilityView, Student, WizardStep};
use serde::Serialize;

/// A field that must be filled before a step can be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// The student picker.
    Student,
    /// The category picker.
    Category,
    /// The topic picker.
    Topic,
    /// The date picker.
    Date,
    /// The time picker.
    Time,
    /// The phone number.
    Phone,
}

impl RequiredField {
    /// The message shown next to the step.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Student => "Please select a student.",
            Self::Category => "Please select a category.",
            Self::Topic => "Please select a topic.",
            Self::Date | Self::Time => "Please select a date and time.",
            Self::Phone => "Please enter a phone number.",
        }
    }
}

/// A selection that is not eligible for the selected student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IneligibleField {
    /// The selected category.
    Category,
    /// The selected topic.
    Topic,
}

/// Why a step could not be confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field is empty.
    MissingRequiredField(RequiredField),
    /// A selection is not eligible for the student's age band.
    IneligibleSelection(IneligibleField),
}

impl ValidationError {
    /// The message shown next to the step.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingRequiredField(field) => field.message(),
            Self::IneligibleSelection(IneligibleField::Category) => {
                "This category is not available for this student's age."
            }
            Self::IneligibleSelection(IneligibleField::Topic) => {
                "This topic is not available for this student."
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

const fn missing(field: RequiredField) -> ValidationError {
    ValidationError::MissingRequiredField(field)
}

fn require_student(state: &WizardState) -> Result<&Student, ValidationError> {
    state
        .student
        .as_ref()
        .ok_or(missing(RequiredField::Student))
}

fn validate_student_and_category(
    state: &WizardState,
    view: &EligibilityView,
) -> Result<(), ValidationError> {
    let student: &Student = require_student(state)?;
    let category: &str = state
        .category
        .as_deref()
        .ok_or(missing(RequiredField::Category))?;

    if !view.is_category_selectable(category, student) {
        return Err(ValidationError::IneligibleSelection(
            IneligibleField::Category,
        ));
    }
    Ok(())
}

fn validate_topic(state: &WizardState, view: &EligibilityView) -> Result<(), ValidationError> {
    if state.topic_step_bypassed() {
        return Ok(());
    }

    let student: &Student = require_student(state)?;
    let category: &str = state
        .category
        .as_deref()
        .ok_or(missing(RequiredField::Category))?;
    let topic: &str = state
        .topic
        .as_deref()
        .ok_or(missing(RequiredField::Topic))?;

    if !view.is_topic_selectable(category, topic, student) {
        return Err(ValidationError::IneligibleSelection(IneligibleField::Topic));
    }
    Ok(())
}

fn validate_scheduling(state: &WizardState) -> Result<(), ValidationError> {
    if state.date.is_none() {
        return Err(missing(RequiredField::Date));
    }
    if state.time.is_none() {
        return Err(missing(RequiredField::Time));
    }
    if state.phone.trim().is_empty() {
        return Err(missing(RequiredField::Phone));
    }
    Ok(())
}

/// Validates one step of the wizard.
///
/// # Arguments
///
/// * `state` - The wizard state to inspect
/// * `step` - The step being confirmed
///
/// # Errors
///
/// Returns the first rule the step violates.
pub fn validate_step(state: &WizardState, step: WizardStep) -> Result<(), ValidationError> {
    let view: EligibilityView = state.eligibility();
    match step {
        WizardStep::StudentAndCategory => validate_student_and_category(state, &view),
        WizardStep::Topic => validate_topic(state, &view),
        WizardStep::Scheduling => validate_scheduling(state),
    }
}
