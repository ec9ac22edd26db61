// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing or constructing domain values.
///
/// Eligibility lookups never produce these; unknown categories and topics
/// simply resolve to "not available".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Age band label is not one of the known life stages.
    UnknownAgeBand(String),
    /// Scenario identifier is not defined.
    UnknownScenario(String),
    /// Scenario catalog key is not defined.
    UnknownScenarioCatalog(String),
    /// Scenario exists but is not part of the active catalog.
    ScenarioNotInCatalog {
        /// The requested scenario identifier.
        scenario: String,
        /// The catalog that was searched.
        catalog: String,
    },
    /// Auxiliary toggle name is not known.
    UnknownAuxToggle(String),
    /// Wizard step index is out of range.
    InvalidStepIndex(u8),
    /// Time slot could not be parsed.
    InvalidTimeSlot(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Student display name is empty.
    InvalidStudentName(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAgeBand(label) => write!(f, "Unknown age band: '{label}'"),
            Self::UnknownScenario(id) => write!(f, "Unknown scenario: '{id}'"),
            Self::UnknownScenarioCatalog(key) => {
                write!(f, "Unknown scenario catalog: '{key}'")
            }
            Self::ScenarioNotInCatalog { scenario, catalog } => {
                write!(
                    f,
                    "Scenario '{scenario}' is not available in the '{catalog}' catalog"
                )
            }
            Self::UnknownAuxToggle(name) => write!(f, "Unknown toggle: '{name}'"),
            Self::InvalidStepIndex(index) => {
                write!(f, "Invalid step index: {index}. Must be between 0 and 2")
            }
            Self::InvalidTimeSlot(value) => write!(f, "Invalid time slot: '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidStudentName(msg) => write!(f, "Invalid student name: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
