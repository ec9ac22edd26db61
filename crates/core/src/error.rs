// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use coach_booking_domain::WizardStep;

/// Errors that reject an intent outright.
///
/// A rejected intent leaves the wizard untouched. Validation failures are
/// not errors; they are recorded on the state instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The intent targets a step whose panel is not open.
    StepNotOpen {
        /// The targeted step.
        step: WizardStep,
        /// The step under the cursor.
        cursor: WizardStep,
    },
    /// The step has not been reached yet, so there is nothing to edit.
    StepNotEditable(WizardStep),
    /// The step is skipped for the selected category.
    StepBypassed(WizardStep),
    /// The appointment has already been submitted.
    AlreadySubmitted,
    /// Opt-in requested without a previous coach for the current pairing.
    PreviousCoachUnavailable,
    /// Edit of a later step while an earlier one is reopened.
    EarlierStepOpen {
        /// The targeted step.
        step: WizardStep,
        /// The reopened step under the cursor.
        cursor: WizardStep,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StepNotOpen { step, cursor } => write!(
                f,
                "Step {} is not open (current step is {})",
                step.index(),
                cursor.index()
            ),
            Self::StepNotEditable(step) => {
                write!(f, "Step {} has not been reached yet", step.index())
            }
            Self::StepBypassed(step) => write!(
                f,
                "Step {} is skipped for the selected category",
                step.index()
            ),
            Self::AlreadySubmitted => write!(f, "The appointment has already been submitted"),
            Self::PreviousCoachUnavailable => {
                write!(f, "No previous coach is available for this student and topic")
            }
            Self::EarlierStepOpen { step, cursor } => write!(
                f,
                "Step {} cannot be edited until step {} is confirmed",
                step.index(),
                cursor.index()
            ),
        }
    }
}

impl std::error::Error for CoreError {}
