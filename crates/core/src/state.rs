// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validation::ValidationError;
use chrono::NaiveDate;
use coach_booking_domain::{
    Attachment, AuxToggles, CoachConstraint, EligibilityView, PreviousCoachSession, Scenario,
    StepState, Student, TimeSlot, WizardStep,
};
use coach_booking_signals::{ShellSnapshot, TransitionRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Meeting link attached to Teams appointments.
pub const TEAMS_MEETING_LINK: &str = "https://teams.microsoft.com/l/meetup-join/19%3ameeting_MOCK1234%40thread.v2/0?context=%7b%22Tid%22%3a%22mock_tenant_id%22%2c%22Oid%22%3a%22mock_user_id%22%7d";

/// Settings that shape the wizard but are not answers to its questions.
///
/// Passed in at construction; changed only through the `SetScenario` and
/// `SetAuxToggle` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BookingConfig {
    /// Active demonstration scenario.
    pub scenario: Scenario,
    /// Auxiliary feature toggles.
    pub toggles: AuxToggles,
}

impl BookingConfig {
    /// Creates a new configuration.
    #[must_use]
    pub const fn new(scenario: Scenario, toggles: AuxToggles) -> Self {
        Self { scenario, toggles }
    }
}

/// Whether the appointment has been booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Steps are still being answered.
    #[default]
    InProgress,
    /// The appointment was submitted; only `Reset` and configuration changes apply.
    /// Neither touches the booked appointment.
    Submitted,
}

/// The complete wizard state.
///
/// The cursor and the completed set are independent: several steps may be
/// completed while exactly one is current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    /// Scenario and toggles in effect.
    pub config: BookingConfig,
    /// The step under the cursor.
    pub cursor: WizardStep,
    /// Steps rendered as collapsed summaries.
    pub completed: BTreeSet<WizardStep>,
    /// Whether the appointment has been submitted.
    pub phase: Phase,
    /// The selected student.
    pub student: Option<Student>,
    /// The selected category.
    pub category: Option<String>,
    /// The selected topic.
    pub topic: Option<String>,
    /// Free-text note for the coach.
    pub note: String,
    /// The chosen date.
    pub date: Option<NaiveDate>,
    /// The chosen start time.
    pub time: Option<TimeSlot>,
    /// Contact phone number.
    pub phone: String,
    /// Optional attachment.
    pub attachment: Option<Attachment>,
    /// Set while the family has opted to meet their previous coach.
    pub previous_coach: Option<PreviousCoachSession>,
    /// The most recent validation failure, if any.
    pub validation_error: Option<ValidationError>,
    /// The appointment as booked, fixed at submission.
    pub booked: Option<AppointmentSummary>,
}

impl WizardState {
    /// Creates an empty wizard at step 0.
    ///
    /// # Arguments
    ///
    /// * `config` - Scenario and toggles to start with
    #[must_use]
    pub const fn new(config: BookingConfig) -> Self {
        Self {
            config,
            cursor: WizardStep::StudentAndCategory,
            completed: BTreeSet::new(),
            phase: Phase::InProgress,
            student: None,
            category: None,
            topic: None,
            note: String::new(),
            date: None,
            time: None,
            phone: String::new(),
            attachment: None,
            previous_coach: None,
            validation_error: None,
            booked: None,
        }
    }

    /// Eligibility lookups under the active scenario.
    #[must_use]
    pub const fn eligibility(&self) -> EligibilityView {
        EligibilityView::new(self.config.scenario)
    }

    /// Returns whether the appointment has been submitted.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Returns whether the selected category skips topic selection.
    #[must_use]
    pub fn topic_step_bypassed(&self) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| self.eligibility().bypasses_topic_step(c))
    }

    /// Returns whether `step` is the open panel.
    #[must_use]
    pub fn is_open(&self, step: WizardStep) -> bool {
        !self.is_submitted() && self.cursor == step && !self.completed.contains(&step)
    }

    /// Categories offered for the selected student; empty until one is chosen.
    #[must_use]
    pub fn available_categories(&self) -> Vec<&'static str> {
        self.student
            .as_ref()
            .map(|s| self.eligibility().categories(s))
            .unwrap_or_default()
    }

    /// Topics offered for the selected student and category.
    #[must_use]
    pub fn available_topics(&self) -> Vec<&'static str> {
        match (&self.student, self.category.as_deref()) {
            (Some(student), Some(category)) => self.eligibility().topics(category, student),
            _ => Vec::new(),
        }
    }

    /// Whose calendar availability is drawn from.
    #[must_use]
    pub fn coach_constraint(&self) -> CoachConstraint {
        self.previous_coach
            .as_ref()
            .map_or(CoachConstraint::AnyCoach, |session| {
                CoachConstraint::Specific(session.coach_id.clone())
            })
    }

    /// How `step` is drawn on the progress rail.
    #[must_use]
    pub fn step_state(&self, step: WizardStep) -> StepState {
        if self.completed.contains(&step) {
            StepState::Completed
        } else if self.cursor == step {
            StepState::Current
        } else {
            StepState::Upcoming
        }
    }

    /// The view the shell subscribes to.
    #[must_use]
    pub fn to_snapshot(&self) -> ShellSnapshot {
        ShellSnapshot::new(self.cursor, self.completed.clone(), self.category.clone())
    }

    /// The booked appointment, once submitted.
    #[must_use]
    pub fn summary(&self) -> Option<AppointmentSummary> {
        self.booked.clone()
    }

    /// Builds the appointment from the current answers and toggles.
    pub(crate) fn build_summary(&self) -> Option<AppointmentSummary> {
        let time: TimeSlot = self.time?;
        let call: CallMode = if self.config.toggles.teams_calls {
            CallMode::Teams {
                meeting_link: String::from(TEAMS_MEETING_LINK),
            }
        } else {
            CallMode::Phone
        };

        Some(AppointmentSummary {
            student: self.student.as_ref()?.display_name.clone(),
            category: self.category.clone()?,
            topic: self.topic.clone()?,
            date: self.date?,
            time,
            end_time: time.end_time().format("%H:%M").to_string(),
            phone: self.phone.clone(),
            meeting_with_previous_coach: self.previous_coach.is_some(),
            coach_name: self.previous_coach.as_ref().map(|s| s.coach_name.clone()),
            call,
        })
    }
}

/// How the coach will reach the family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CallMode {
    /// The coach calls the phone number.
    Phone,
    /// A Teams meeting; the phone number is a backup.
    Teams {
        /// Join link.
        meeting_link: String,
    },
}

/// The terminal artifact of the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentSummary {
    /// Student display name.
    pub student: String,
    /// Category name.
    pub category: String,
    /// Topic name.
    pub topic: String,
    /// Appointment date, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Start time, `HH:MM`.
    pub time: TimeSlot,
    /// End time, `HH:MM`.
    pub end_time: String,
    /// Contact phone number.
    pub phone: String,
    /// Whether the appointment is with the previous coach.
    pub meeting_with_previous_coach: bool,
    /// The previous coach's name, when meeting with them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coach_name: Option<String>,
    /// Phone or Teams.
    pub call: CallMode,
}

/// The result of an accepted intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: WizardState,
    /// The record of this transition.
    pub record: TransitionRecord,
}
