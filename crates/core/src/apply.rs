// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{BookingConfig, Phase, TransitionResult, WizardState};
use crate::validation::validate_step;
use coach_booking_domain::{AuxToggle, EligibilityView, PreviousCoachSession, WizardStep};
use coach_booking_signals::{Intent, ShellSnapshot, TransitionRecord};

/// Applies a command to the current state, producing a new state and a
/// transition record.
///
/// Transitions are atomic: either the command is accepted and a new state is
/// returned, or it is rejected and the caller keeps the old one. A failed
/// `Continue` or `Submit` is *accepted*: the new state differs only in its
/// validation error.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and transition record
/// * `Err(CoreError)` if the command is malformed for the current state
///
/// # Errors
///
/// Returns an error if:
/// - The appointment was already submitted and the command is not `Reset`,
///   `SetScenario` or `SetAuxToggle`
/// - The command edits a field whose step is not open
/// - The command targets the topic step while it is bypassed
/// - `Edit` targets a step that has not been reached, or a later step while
///   an earlier one is reopened
/// - The previous-coach opt-in is toggled on without a matching offer
pub fn apply(state: &WizardState, command: Command) -> Result<TransitionResult, CoreError> {
    let before: ShellSnapshot = state.to_snapshot();
    let intent: Intent = Intent::new(command.name().to_string(), command.details());

    let mut next: WizardState = state.clone();
    apply_in_place(&mut next, command)?;

    let after: ShellSnapshot = next.to_snapshot();
    Ok(TransitionResult {
        new_state: next,
        record: TransitionRecord::new(intent, before, after),
    })
}

fn apply_in_place(state: &mut WizardState, command: Command) -> Result<(), CoreError> {
    let config_command: bool = matches!(
        command,
        Command::Reset | Command::SetScenario { .. } | Command::SetAuxToggle { .. }
    );
    if state.is_submitted() && !config_command {
        return Err(CoreError::AlreadySubmitted);
    }

    if let Some(step) = command.field_step() {
        ensure_open(state, step)?;
    }

    match command {
        Command::SelectStudent { student } => {
            let changed: bool = state.student.as_ref() != Some(&student);
            state.student = Some(student);
            drop_ineligible_category(state);
            reconcile_topic(state);
            if changed {
                clear_previous_coach(state);
            }
        }
        Command::SelectCategory { category } => {
            let changed: bool = state.category.as_deref() != Some(category.as_str());
            state.category = Some(category);
            reconcile_topic(state);
            if changed {
                clear_previous_coach(state);
            }
        }
        Command::SelectTopic { topic } => {
            let changed: bool = state.topic.as_deref() != Some(topic.as_str());
            state.topic = Some(topic);
            if changed {
                clear_previous_coach(state);
            }
        }
        Command::SetNote { note } => state.note = note,
        Command::SetDate { date } => {
            // Slots are per date.
            if state.date != date {
                state.time = None;
            }
            state.date = date;
        }
        Command::SetTime { time } => state.time = time,
        Command::SetPhone { phone } => state.phone = phone,
        Command::SetAttachment { attachment } => state.attachment = attachment,
        Command::TogglePreviousCoachOptIn { offer } => toggle_previous_coach(state, offer)?,
        Command::Continue { step } => continue_step(state, step)?,
        Command::Submit => continue_step(state, WizardStep::Scheduling)?,
        Command::Edit { step } => edit_step(state, step)?,
        Command::Reset => *state = WizardState::new(state.config),
        Command::SetScenario { scenario } => {
            *state = WizardState::new(BookingConfig::new(scenario, state.config.toggles));
        }
        Command::SetAuxToggle { toggle, enabled } => {
            state.config.toggles.set(toggle, enabled);
            if toggle == AuxToggle::CoachContinuity && !enabled && !state.is_submitted() {
                clear_previous_coach(state);
            }
        }
    }

    Ok(())
}

fn ensure_open(state: &WizardState, step: WizardStep) -> Result<(), CoreError> {
    if step == WizardStep::Topic && state.topic_step_bypassed() {
        return Err(CoreError::StepBypassed(step));
    }
    if !state.is_open(step) {
        return Err(CoreError::StepNotOpen {
            step,
            cursor: state.cursor,
        });
    }
    Ok(())
}

/// Clears the category (and with it the topic) when the selected student
/// may no longer choose it.
fn drop_ineligible_category(state: &mut WizardState) {
    let view: EligibilityView = state.eligibility();
    let eligible: bool = match (&state.student, state.category.as_deref()) {
        (Some(student), Some(category)) => view.is_category_selectable(category, student),
        _ => true,
    };
    if !eligible {
        state.category = None;
        state.topic = None;
    }
}

/// Forces the sentinel topic for a bypassing category, otherwise clears a
/// topic that is no longer offered.
fn reconcile_topic(state: &mut WizardState) {
    let view: EligibilityView = state.eligibility();
    if let Some(forced) = state.category.as_deref().and_then(|c| view.forced_topic(c)) {
        state.topic = Some(forced.to_string());
        return;
    }

    let offered: Vec<&'static str> = state.available_topics();
    if state
        .topic
        .as_deref()
        .is_some_and(|topic| !offered.contains(&topic))
    {
        state.topic = None;
    }
}

/// Drops the previous-coach opt-in. Availability changes with it, so a
/// chosen date and time are dropped too.
fn clear_previous_coach(state: &mut WizardState) {
    if state.previous_coach.take().is_some() {
        state.date = None;
        state.time = None;
    }
}

fn toggle_previous_coach(
    state: &mut WizardState,
    offer: Option<PreviousCoachSession>,
) -> Result<(), CoreError> {
    if state.previous_coach.is_some() {
        clear_previous_coach(state);
        return Ok(());
    }

    if !state.config.toggles.coach_continuity {
        return Err(CoreError::PreviousCoachUnavailable);
    }
    let session: PreviousCoachSession = offer
        .filter(|session| state.topic.as_deref() == Some(session.topic.as_str()))
        .ok_or(CoreError::PreviousCoachUnavailable)?;

    state.previous_coach = Some(session);
    state.date = None;
    state.time = None;
    Ok(())
}

fn continue_step(state: &mut WizardState, step: WizardStep) -> Result<(), CoreError> {
    if state.cursor != step || state.completed.contains(&step) {
        return Err(CoreError::StepNotOpen {
            step,
            cursor: state.cursor,
        });
    }

    if let Err(validation_error) = validate_step(state, step) {
        state.validation_error = Some(validation_error);
        return Ok(());
    }

    state.validation_error = None;
    state.completed.insert(step);

    match step {
        WizardStep::StudentAndCategory => {
            if state.topic_step_bypassed() {
                state.completed.insert(WizardStep::Topic);
                state.cursor = WizardStep::Scheduling;
            } else {
                // Eligible topics may have changed; the topic step must be confirmed again.
                state.completed.remove(&WizardStep::Topic);
                state.cursor = WizardStep::Topic;
            }
        }
        WizardStep::Topic => state.cursor = WizardStep::Scheduling,
        WizardStep::Scheduling => {
            state.booked = state.build_summary();
            state.phase = Phase::Submitted;
        }
    }

    Ok(())
}

fn edit_step(state: &mut WizardState, step: WizardStep) -> Result<(), CoreError> {
    if step == WizardStep::Topic && state.topic_step_bypassed() {
        return Err(CoreError::StepBypassed(step));
    }
    if !state.completed.contains(&step) && state.cursor != step {
        return Err(CoreError::StepNotEditable(step));
    }
    // An earlier step reopened for editing must be confirmed before moving on.
    if step > state.cursor && !state.completed.contains(&state.cursor) {
        return Err(CoreError::EarlierStepOpen {
            step,
            cursor: state.cursor,
        });
    }

    state.completed.remove(&step);
    state.cursor = step;
    state.validation_error = None;
    Ok(())
}
