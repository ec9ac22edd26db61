// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use chrono::NaiveDate;
use coach_booking::{AppointmentSummary, Phase, ValidationError};
use coach_booking_domain::{
    Attachment, AuxToggles, ExistingStudent, PhoneOption, Scenario, StepState, StudentId,
    TimeSlot,
};
use coach_booking_signals::Signal;
use serde::{Deserialize, Serialize};

/// API request to add a student through the add-student flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddStudentRequest {
    /// Name shown in the student picker.
    pub display_name: String,
    /// Age band label, e.g. `"11th grade"`.
    pub age_band: String,
}

/// API request to claim a student known to another service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimExistingStudentRequest {
    /// Identifier in the existing-student pool.
    pub existing_id: String,
    /// Age band label for the new roster entry.
    pub age_band: String,
}

/// API request to attach a file to the appointment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AttachmentRequest {
    /// File name as uploaded.
    pub file_name: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// One entry of the progress rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepView {
    /// Zero-based step index.
    pub index: u8,
    /// Step heading.
    pub title: &'static str,
    /// How the step is drawn.
    pub state: StepState,
}

/// A student as offered by the picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentView {
    pub id: StudentId,
    pub display_name: String,
    pub age_band: &'static str,
    pub sessions_available: u32,
    /// False when the student has no sessions left; the picker disables it.
    pub selectable: bool,
}

/// A category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryView {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// A "Most Popular" topic card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedTopicView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_text: Option<&'static str>,
}

/// Topics for the selected category, featured first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TopicsView {
    /// Copy shown above the topic list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_description: Option<&'static str>,
    /// Featured topics in catalog order.
    pub featured: Vec<FeaturedTopicView>,
    /// Every other topic, alphabetical.
    pub regular: Vec<String>,
}

impl TopicsView {
    /// Total number of topics on offer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    /// Returns whether no topic is on offer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }
}

/// A bookable start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlotView {
    /// `HH:MM`, the form accepted by `set_time`.
    pub value: String,
    /// `h:MM AM/PM`.
    pub display: String,
    /// End of the session, `h:MM AM/PM`.
    pub ends: String,
}

impl From<TimeSlot> for TimeSlotView {
    fn from(slot: TimeSlot) -> Self {
        Self {
            value: slot.value(),
            display: slot.display(),
            ends: slot.end_display(),
        }
    }
}

/// The coach-continuity offer for the current student and topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviousCoachView {
    pub coach_name: String,
    /// "You'll be meeting with ..." copy.
    pub continuity_line: String,
    /// Whether the family has opted in.
    pub opted_in: bool,
}

/// The current answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldsView {
    pub student: Option<StudentId>,
    pub category: Option<String>,
    pub topic: Option<String>,
    pub note: String,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub phone: String,
    pub attachment: Option<Attachment>,
}

/// The current validation failure with its display copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationErrorView {
    pub error: ValidationError,
    pub message: &'static str,
}

impl From<ValidationError> for ValidationErrorView {
    fn from(error: ValidationError) -> Self {
        Self {
            error,
            message: error.message(),
        }
    }
}

/// Everything the presentation shell observes after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardView {
    /// Active scenario.
    pub scenario: Scenario,
    /// Auxiliary toggles.
    pub toggles: AuxToggles,
    /// In progress or submitted.
    pub phase: Phase,
    /// Index of the step under the cursor.
    pub cursor: u8,
    /// Indexes of completed steps, ascending.
    pub completed: Vec<u8>,
    /// The progress rail.
    pub steps: Vec<StepView>,
    /// Current answers.
    pub fields: FieldsView,
    /// The most recent validation failure.
    pub validation_error: Option<ValidationErrorView>,
    /// Student picker.
    pub students: Vec<StudentView>,
    /// Candidates for the add-student flow.
    pub existing_students: Vec<ExistingStudent>,
    /// Category picker.
    pub available_categories: Vec<CategoryView>,
    /// Topic picker.
    pub available_topics: TopicsView,
    /// Date picker.
    pub available_dates: Vec<NaiveDate>,
    /// Time picker for the chosen date.
    pub available_times: Vec<TimeSlotView>,
    /// Canned phone numbers.
    pub phone_options: Vec<PhoneOption>,
    /// The coach-continuity offer, when one applies.
    pub previous_coach: Option<PreviousCoachView>,
    /// The booked appointment, once submitted.
    pub summary: Option<AppointmentSummary>,
    /// Shell signals raised by the event that produced this view.
    pub signals: Vec<Signal>,
}
