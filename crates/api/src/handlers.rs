// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One handler per inbound shell event.
//!
//! Handlers translate raw event input into domain types, check it against
//! what the session currently offers, and hand a single [`Command`] to the
//! session. Every handler answers with the full [`WizardView`].

use crate::error::{ApiError, translate_directory_error, translate_domain_error};
use crate::request_response::{
    AddStudentRequest, AttachmentRequest, ClaimExistingStudentRequest, WizardView,
};
use crate::session::BookingSession;
use chrono::NaiveDate;
use coach_booking::Command;
use coach_booking_domain::{
    AgeBand, Attachment, AuxToggle, DomainError, PhoneOption, PreviousCoachSession, Scenario,
    Student, StudentId, TimeSlot, WizardStep, format_phone_number, resolve_scenario,
};
use coach_booking_signals::Signal;
use tracing::{info, warn};

fn dispatch(session: &mut BookingSession, command: Command) -> Result<WizardView, ApiError> {
    let signals: Vec<Signal> = session.execute(command)?;
    Ok(session.view(signals))
}

fn parse_step(index: u8) -> Result<WizardStep, ApiError> {
    WizardStep::from_index(index).map_err(translate_domain_error)
}

fn parse_age_band(label: &str) -> Result<AgeBand, ApiError> {
    label.parse().map_err(translate_domain_error)
}

/// Returns the view without changing anything.
#[must_use]
pub fn current_view(session: &BookingSession) -> WizardView {
    session.view(Vec::new())
}

/// Selects a roster student.
///
/// Students with no sessions left are accepted; the shell is expected to
/// disable them using [`StudentView::selectable`](crate::StudentView).
///
/// # Errors
///
/// Returns an error if the student is not on the roster or step 0 is not open.
pub fn select_student(session: &mut BookingSession, id: u32) -> Result<WizardView, ApiError> {
    let student: Student = session
        .roster()
        .student(StudentId::new(id))
        .map_err(translate_directory_error)?;
    dispatch(session, Command::SelectStudent { student })
}

/// Adds a student through the add-student flow.
///
/// The new student is appended to the roster with the default session quota.
/// It is not selected.
///
/// # Errors
///
/// Returns an error if the name is empty or the age band is unknown.
pub fn add_student(
    session: &mut BookingSession,
    request: &AddStudentRequest,
) -> Result<WizardView, ApiError> {
    let age_band: AgeBand = parse_age_band(&request.age_band)?;
    let student: Student = session
        .roster_mut()
        .add_student(&request.display_name, age_band)
        .map_err(|e| {
            warn!(error = %e, "Add student rejected");
            translate_directory_error(e)
        })?;

    info!(id = %student.id, age_band = %student.age_band, "Student added");
    Ok(current_view(session))
}

/// Converts an existing student from another service into a roster student.
///
/// # Errors
///
/// Returns an error if the candidate is unknown or already claimed, or the
/// age band is unknown.
pub fn claim_existing_student(
    session: &mut BookingSession,
    request: &ClaimExistingStudentRequest,
) -> Result<WizardView, ApiError> {
    let age_band: AgeBand = parse_age_band(&request.age_band)?;
    let student: Student = session
        .roster_mut()
        .claim_existing(&request.existing_id, age_band)
        .map_err(|e| {
            warn!(error = %e, "Claim rejected");
            translate_directory_error(e)
        })?;

    info!(
        existing_id = %request.existing_id,
        id = %student.id,
        "Existing student claimed"
    );
    Ok(current_view(session))
}

/// Selects a category.
///
/// # Errors
///
/// Returns an error if step 0 is not open.
pub fn select_category(
    session: &mut BookingSession,
    category: &str,
) -> Result<WizardView, ApiError> {
    dispatch(
        session,
        Command::SelectCategory {
            category: category.to_string(),
        },
    )
}

/// Selects a topic.
///
/// # Errors
///
/// Returns an error if step 1 is not open or is bypassed.
pub fn select_topic(session: &mut BookingSession, topic: &str) -> Result<WizardView, ApiError> {
    dispatch(
        session,
        Command::SelectTopic {
            topic: topic.to_string(),
        },
    )
}

/// Sets the note for the coach.
///
/// # Errors
///
/// Returns an error if step 1 is not open or is bypassed.
pub fn set_note(session: &mut BookingSession, note: &str) -> Result<WizardView, ApiError> {
    dispatch(
        session,
        Command::SetNote {
            note: note.to_string(),
        },
    )
}

/// Sets or clears the appointment date.
///
/// # Arguments
///
/// * `session` - The booking session
/// * `date` - `YYYY-MM-DD`, or `None` to clear
///
/// # Errors
///
/// Returns an error if the date cannot be parsed, is not offered, or step 2
/// is not open.
pub fn set_date(
    session: &mut BookingSession,
    date: Option<&str>,
) -> Result<WizardView, ApiError> {
    let parsed: Option<NaiveDate> = match date {
        Some(raw) => {
            let parsed: NaiveDate = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
                translate_domain_error(DomainError::DateParseError {
                    date_string: raw.to_string(),
                    error: e.to_string(),
                })
            })?;
            if !session.available_dates().contains(&parsed) {
                return Err(ApiError::NotOffered {
                    field: String::from("Date"),
                    value: raw.to_string(),
                });
            }
            Some(parsed)
        }
        None => None,
    };

    dispatch(session, Command::SetDate { date: parsed })
}

/// Sets or clears the start time.
///
/// # Arguments
///
/// * `session` - The booking session
/// * `time` - `HH:MM` or `h:MM AM/PM`, or `None` to clear
///
/// # Errors
///
/// Returns an error if the time cannot be parsed, is not offered on the
/// chosen date, or step 2 is not open.
pub fn set_time(
    session: &mut BookingSession,
    time: Option<&str>,
) -> Result<WizardView, ApiError> {
    let parsed: Option<TimeSlot> = match time {
        Some(raw) => {
            let slot: TimeSlot = raw.parse().map_err(translate_domain_error)?;
            if !session.available_times().contains(&slot) {
                return Err(ApiError::NotOffered {
                    field: String::from("Time"),
                    value: raw.to_string(),
                });
            }
            Some(slot)
        }
        None => None,
    };

    dispatch(session, Command::SetTime { time: parsed })
}

/// Sets the phone number exactly as typed.
///
/// # Errors
///
/// Returns an error if step 2 is not open.
pub fn set_phone(session: &mut BookingSession, phone: &str) -> Result<WizardView, ApiError> {
    dispatch(
        session,
        Command::SetPhone {
            phone: phone.to_string(),
        },
    )
}

/// Sets a one-time number, normalised to `(XXX) XXX-XXXX` as far as the
/// digits go.
///
/// # Errors
///
/// Returns an error if step 2 is not open.
pub fn set_custom_phone(
    session: &mut BookingSession,
    input: &str,
) -> Result<WizardView, ApiError> {
    set_phone(session, &format_phone_number(input))
}

/// Uses one of the canned phone numbers.
///
/// # Errors
///
/// Returns an error if the option does not exist for the current call mode
/// or step 2 is not open.
pub fn choose_phone_option(
    session: &mut BookingSession,
    option_id: &str,
) -> Result<WizardView, ApiError> {
    let option: PhoneOption = session
        .phone_options()
        .into_iter()
        .find(|o| o.id == option_id)
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Phone option"),
            message: format!("'{option_id}' is not on file"),
        })?;
    set_phone(session, &option.number)
}

/// Sets or clears the attachment.
///
/// # Errors
///
/// Returns an error if step 2 is not open.
pub fn set_attachment(
    session: &mut BookingSession,
    request: Option<AttachmentRequest>,
) -> Result<WizardView, ApiError> {
    let attachment: Option<Attachment> = request.map(|r| Attachment {
        file_name: r.file_name,
        size_bytes: r.size_bytes,
    });
    dispatch(session, Command::SetAttachment { attachment })
}

/// Opts in to, or out of, meeting the previous coach.
///
/// # Errors
///
/// Returns an error if opting in without an offer for the current student
/// and topic, or step 2 is not open.
pub fn toggle_previous_coach_opt_in(
    session: &mut BookingSession,
) -> Result<WizardView, ApiError> {
    let offer: Option<PreviousCoachSession> = session.previous_coach_offer();
    dispatch(session, Command::TogglePreviousCoachOptIn { offer })
}

/// Confirms a step.
///
/// A validation failure is not an error: the view carries it.
///
/// # Errors
///
/// Returns an error if the index is out of range or the step is not open.
pub fn continue_step(session: &mut BookingSession, index: u8) -> Result<WizardView, ApiError> {
    let step: WizardStep = parse_step(index)?;
    dispatch(session, Command::Continue { step })
}

/// Reopens a completed step.
///
/// # Errors
///
/// Returns an error if the index is out of range or the step was not reached.
pub fn edit_step(session: &mut BookingSession, index: u8) -> Result<WizardView, ApiError> {
    let step: WizardStep = parse_step(index)?;
    dispatch(session, Command::Edit { step })
}

/// Books the appointment.
///
/// # Errors
///
/// Returns an error if step 2 is not open.
pub fn submit(session: &mut BookingSession) -> Result<WizardView, ApiError> {
    dispatch(session, Command::Submit)
}

/// Starts over with the same scenario and toggles.
///
/// # Errors
///
/// Reset is accepted in every state; the error arm is never taken.
pub fn reset(session: &mut BookingSession) -> Result<WizardView, ApiError> {
    dispatch(session, Command::Reset)
}

/// Switches scenario. All answers and added students are dropped.
///
/// # Errors
///
/// Returns an error if the scenario is unknown or not in the session's catalog.
pub fn set_scenario(
    session: &mut BookingSession,
    scenario: &str,
) -> Result<WizardView, ApiError> {
    let scenario: Scenario =
        resolve_scenario(session.catalog(), scenario).map_err(translate_domain_error)?;
    dispatch(session, Command::SetScenario { scenario })
}

/// Turns an auxiliary feature on or off.
///
/// # Errors
///
/// Returns an error if the toggle name is unknown.
pub fn set_aux_toggle(
    session: &mut BookingSession,
    name: &str,
    enabled: bool,
) -> Result<WizardView, ApiError> {
    let toggle: AuxToggle = name.parse().map_err(translate_domain_error)?;
    dispatch(session, Command::SetAuxToggle { toggle, enabled })
}
