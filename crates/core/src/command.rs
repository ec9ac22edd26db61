// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use coach_booking_domain::{
    Attachment, AuxToggle, PreviousCoachSession, Scenario, Student, TimeSlot, WizardStep,
};

/// A command represents a shell intent as data only.
///
/// Commands are the only way to change wizard state. Lookups that need the
/// roster (the student record, the previous-coach offer) are resolved by the
/// caller and carried in the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Choose the student the appointment is for.
    SelectStudent {
        /// The roster record, as seen under the active scenario.
        student: Student,
    },
    /// Choose a category.
    SelectCategory {
        /// Category name.
        category: String,
    },
    /// Choose a topic.
    SelectTopic {
        /// Topic name.
        topic: String,
    },
    /// Replace the free-text note.
    SetNote {
        /// Note text.
        note: String,
    },
    /// Choose or clear the appointment date.
    SetDate {
        /// The date, or `None` to clear it.
        date: Option<NaiveDate>,
    },
    /// Choose or clear the appointment time.
    SetTime {
        /// The slot, or `None` to clear it.
        time: Option<TimeSlot>,
    },
    /// Replace the contact phone number.
    SetPhone {
        /// Phone number as entered or chosen.
        phone: String,
    },
    /// Attach or detach a file.
    SetAttachment {
        /// File metadata, or `None` to detach.
        attachment: Option<Attachment>,
    },
    /// Flip the "meet with my previous coach" opt-in.
    TogglePreviousCoachOptIn {
        /// The previous session for the current (student, topic), if any.
        offer: Option<PreviousCoachSession>,
    },
    /// Validate a step and advance past it.
    Continue {
        /// The step being confirmed.
        step: WizardStep,
    },
    /// Reopen a step for editing.
    Edit {
        /// The step to reopen.
        step: WizardStep,
    },
    /// Validate the scheduling step and book the appointment.
    Submit,
    /// Start over with empty fields ("schedule another").
    Reset,
    /// Switch the active demonstration scenario. Clears all fields.
    SetScenario {
        /// The new scenario.
        scenario: Scenario,
    },
    /// Turn an auxiliary feature on or off.
    SetAuxToggle {
        /// The toggle.
        toggle: AuxToggle,
        /// New value.
        enabled: bool,
    },
}

impl Command {
    /// Short name used in transition records and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectStudent { .. } => "SelectStudent",
            Self::SelectCategory { .. } => "SelectCategory",
            Self::SelectTopic { .. } => "SelectTopic",
            Self::SetNote { .. } => "SetNote",
            Self::SetDate { .. } => "SetDate",
            Self::SetTime { .. } => "SetTime",
            Self::SetPhone { .. } => "SetPhone",
            Self::SetAttachment { .. } => "SetAttachment",
            Self::TogglePreviousCoachOptIn { .. } => "TogglePreviousCoachOptIn",
            Self::Continue { .. } => "Continue",
            Self::Edit { .. } => "Edit",
            Self::Submit => "Submit",
            Self::Reset => "Reset",
            Self::SetScenario { .. } => "SetScenario",
            Self::SetAuxToggle { .. } => "SetAuxToggle",
        }
    }

    /// Human-readable detail for transition records.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            Self::SelectStudent { student } => Some(format!(
                "student {} ({})",
                student.id, student.age_band
            )),
            Self::SelectCategory { category } => Some(category.clone()),
            Self::SelectTopic { topic } => Some(topic.clone()),
            Self::SetDate { date } => date.map(|d| d.to_string()),
            Self::SetTime { time } => time.map(|t| t.value()),
            Self::Continue { step } | Self::Edit { step } => Some(format!("step {}", step.index())),
            Self::SetScenario { scenario } => Some(scenario.to_string()),
            Self::SetAuxToggle { toggle, enabled } => Some(format!("{toggle}={enabled}")),
            Self::SetNote { .. }
            | Self::SetPhone { .. }
            | Self::SetAttachment { .. }
            | Self::TogglePreviousCoachOptIn { .. }
            | Self::Submit
            | Self::Reset => None,
        }
    }

    /// The step whose panel holds the field this command edits.
    ///
    /// Returns `None` for commands that are not field edits.
    #[must_use]
    pub const fn field_step(&self) -> Option<WizardStep> {
        match self {
            Self::SelectStudent { .. } | Self::SelectCategory { .. } => {
                Some(WizardStep::StudentAndCategory)
            }
            Self::SelectTopic { .. } | Self::SetNote { .. } => Some(WizardStep::Topic),
            Self::SetDate { .. }
            | Self::SetTime { .. }
            | Self::SetPhone { .. }
            | Self::SetAttachment { .. }
            | Self::TogglePreviousCoachOptIn { .. } => Some(WizardStep::Scheduling),
            Self::Continue { .. }
            | Self::Edit { .. }
            | Self::Submit
            | Self::Reset
            | Self::SetScenario { .. }
            | Self::SetAuxToggle { .. } => None,
        }
    }
}
