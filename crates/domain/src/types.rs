// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::age_band::AgeBand;
use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a student on the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(u32);

impl StudentId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A student who can be booked for a coaching session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Roster identifier.
    pub id: StudentId,
    /// Name shown in the student picker.
    pub display_name: String,
    /// Life stage; the sole eligibility key for categories and topics.
    pub age_band: AgeBand,
    /// Remaining session quota. Zero means the shell disables the student.
    pub sessions_available: u32,
    /// Number of coaching sessions the student has already attended.
    pub prior_sessions: u32,
}

impl Student {
    /// Creates a new student with no session history.
    ///
    /// # Errors
    ///
    /// Returns an error if the display name is empty after trimming.
    pub fn new(
        id: StudentId,
        display_name: &str,
        age_band: AgeBand,
        sessions_available: u32,
    ) -> Result<Self, DomainError> {
        let trimmed: &str = display_name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidStudentName(String::from(
                "Display name cannot be empty",
            )));
        }
        Ok(Self {
            id,
            display_name: trimmed.to_string(),
            age_band,
            sessions_available,
            prior_sessions: 0,
        })
    }

    /// Sets the number of prior sessions.
    #[must_use]
    pub const fn with_prior_sessions(mut self, prior_sessions: u32) -> Self {
        self.prior_sessions = prior_sessions;
        self
    }

    /// Returns whether the shell should offer this student for selection.
    #[must_use]
    pub const fn is_bookable(&self) -> bool {
        self.sessions_available > 0
    }
}

/// A person known to another service who may be claimed as a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistingStudent {
    /// Identifier within the candidate pool.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Benefit identifier from the originating service.
    pub benefit_id: String,
}

impl ExistingStudent {
    /// Returns `"First Last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Identifies a coach.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoachId(String);

impl CoachId {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoachId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A coach and the areas they specialise in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    /// Coach identifier.
    pub id: CoachId,
    /// Display name.
    pub name: String,
    /// Specialty labels.
    pub specialties: Vec<String>,
}

/// The most recent session a student had with a coach on a given topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousCoachSession {
    /// Coach identifier.
    pub coach_id: CoachId,
    /// Coach display name.
    pub coach_name: String,
    /// Topic of the previous session.
    pub topic: String,
    /// Date of the previous session.
    pub last_meeting_date: NaiveDate,
}

impl PreviousCoachSession {
    /// Copy used to remind the family who they are continuing with.
    ///
    /// The date is rendered as `M/D/YY`.
    #[must_use]
    pub fn continuity_line(&self) -> String {
        format!(
            "You'll be meeting with {}. You last met on {} for a {} appointment.",
            self.coach_name,
            self.last_meeting_date.format("%-m/%-d/%y"),
            self.topic
        )
    }
}

/// The three wizard steps, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 0: choose a student and a category.
    StudentAndCategory,
    /// Step 1: choose a topic and write an optional note.
    Topic,
    /// Step 2: pick a date, a time and a phone number.
    Scheduling,
}

impl WizardStep {
    /// Every step, in flow order.
    pub const ALL: [Self; 3] = [Self::StudentAndCategory, Self::Topic, Self::Scheduling];

    /// Returns the zero-based step index.
    #[must_use]
    pub const fn index(&self) -> u8 {
        match self {
            Self::StudentAndCategory => 0,
            Self::Topic => 1,
            Self::Scheduling => 2,
        }
    }

    /// Returns the step at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than 2.
    pub const fn from_index(index: u8) -> Result<Self, DomainError> {
        match index {
            0 => Ok(Self::StudentAndCategory),
            1 => Ok(Self::Topic),
            2 => Ok(Self::Scheduling),
            _ => Err(DomainError::InvalidStepIndex(index)),
        }
    }

    /// Panel heading.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::StudentAndCategory => "Who is this appointment for?",
            Self::Topic => "What would you like to discuss?",
            Self::Scheduling => "When works best for you?",
        }
    }
}

/// How a step is drawn on the progress rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    /// Validated and collapsed.
    Completed,
    /// The open step under the cursor.
    Current,
    /// Not reached yet.
    Upcoming,
}

/// Feature flags that change copy and required data but not the step graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuxToggle {
    /// Offer to book with the coach a student previously met.
    CoachContinuity,
    /// Sessions are held as Teams calls; the phone is a backup.
    TeamsCalls,
}

impl AuxToggle {
    /// Returns the toggle name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CoachContinuity => "coach-continuity",
            Self::TeamsCalls => "teams-calls",
        }
    }
}

impl FromStr for AuxToggle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coach-continuity" | "coachContinuity" => Ok(Self::CoachContinuity),
            "teams-calls" | "teamsCalls" => Ok(Self::TeamsCalls),
            _ => Err(DomainError::UnknownAuxToggle(s.to_string())),
        }
    }
}

impl std::fmt::Display for AuxToggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Current value of every auxiliary toggle. Both are off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuxToggles {
    /// See [`AuxToggle::CoachContinuity`].
    pub coach_continuity: bool,
    /// See [`AuxToggle::TeamsCalls`].
    pub teams_calls: bool,
}

impl AuxToggles {
    /// Returns the value of one toggle.
    #[must_use]
    pub const fn get(&self, toggle: AuxToggle) -> bool {
        match toggle {
            AuxToggle::CoachContinuity => self.coach_continuity,
            AuxToggle::TeamsCalls => self.teams_calls,
        }
    }

    /// Sets the value of one toggle.
    pub const fn set(&mut self, toggle: AuxToggle, enabled: bool) {
        match toggle {
            AuxToggle::CoachContinuity => self.coach_continuity = enabled,
            AuxToggle::TeamsCalls => self.teams_calls = enabled,
        }
    }
}

/// A file attached to the booking request. Only metadata is retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name.
    pub file_name: String,
    /// File size in bytes.
    pub size_bytes: u64,
}
