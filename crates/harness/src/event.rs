// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inbound shell events as read from the input stream.

use coach_booking_api::{
    AddStudentRequest, ApiError, AttachmentRequest, BookingSession, ClaimExistingStudentRequest,
    WizardView, add_student, choose_phone_option, claim_existing_student, continue_step,
    current_view, edit_step, reset, select_category, select_student, select_topic,
    set_attachment, set_aux_toggle, set_custom_phone, set_date, set_note, set_phone,
    set_scenario, set_time, submit, toggle_previous_coach_opt_in,
};
use serde::Deserialize;

/// One line of input, tagged by `"event"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    SelectStudent {
        id: u32,
    },
    AddStudent {
        display_name: String,
        age_band: String,
    },
    ClaimExistingStudent {
        existing_id: String,
        age_band: String,
    },
    SelectCategory {
        category: String,
    },
    SelectTopic {
        topic: String,
    },
    SetNote {
        note: String,
    },
    SetDate {
        /// `YYYY-MM-DD`; `null` clears.
        date: Option<String>,
    },
    SetTime {
        /// `HH:MM` or `h:MM AM/PM`; `null` clears.
        time: Option<String>,
    },
    SetPhone {
        phone: String,
    },
    /// A one-time number, formatted on the way in.
    SetCustomPhone {
        phone: String,
    },
    ChoosePhoneOption {
        option: String,
    },
    SetAttachment {
        attachment: Option<AttachmentRequest>,
    },
    TogglePreviousCoachOptIn,
    Continue {
        step: u8,
    },
    Edit {
        step: u8,
    },
    Submit,
    Reset,
    SetScenario {
        scenario: String,
    },
    SetAuxToggle {
        toggle: String,
        enabled: bool,
    },
    /// Prints the current view without changing anything.
    View,
}

impl Event {
    /// Routes the event to its handler.
    ///
    /// # Errors
    ///
    /// Returns the handler's error when the session refuses the event.
    pub fn dispatch(self, session: &mut BookingSession) -> Result<WizardView, ApiError> {
        match self {
            Self::SelectStudent { id } => select_student(session, id),
            Self::AddStudent {
                display_name,
                age_band,
            } => add_student(
                session,
                &AddStudentRequest {
                    display_name,
                    age_band,
                },
            ),
            Self::ClaimExistingStudent {
                existing_id,
                age_band,
            } => claim_existing_student(
                session,
                &ClaimExistingStudentRequest {
                    existing_id,
                    age_band,
                },
            ),
            Self::SelectCategory { category } => select_category(session, &category),
            Self::SelectTopic { topic } => select_topic(session, &topic),
            Self::SetNote { note } => set_note(session, &note),
            Self::SetDate { date } => set_date(session, date.as_deref()),
            Self::SetTime { time } => set_time(session, time.as_deref()),
            Self::SetPhone { phone } => set_phone(session, &phone),
            Self::SetCustomPhone { phone } => set_custom_phone(session, &phone),
            Self::ChoosePhoneOption { option } => choose_phone_option(session, &option),
            Self::SetAttachment { attachment } => set_attachment(session, attachment),
            Self::TogglePreviousCoachOptIn => toggle_previous_coach_opt_in(session),
            Self::Continue { step } => continue_step(session, step),
            Self::Edit { step } => edit_step(session, step),
            Self::Submit => submit(session),
            Self::Reset => reset(session),
            Self::SetScenario { scenario } => set_scenario(session, &scenario),
            Self::SetAuxToggle { toggle, enabled } => set_aux_toggle(session, &toggle, enabled),
            Self::View => Ok(current_view(session)),
        }
    }
}
