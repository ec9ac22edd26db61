// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demonstration scenarios.
//!
//! A scenario is a named override profile that reshapes the mock data the
//! wizard sees (session quotas, topic lists, date lists, the existing-student
//! pool). Scenarios never mutate fixtures; they only select a view over them.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies one data-shaping rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Normal flow with all features available.
    #[default]
    Default,
    /// Students from other services are available to add.
    WithExistingStudents,
    /// Every student has zero sessions remaining.
    NoAppointments,
    /// No topics are offered for the selected student.
    NoTopicsAvailable,
    /// No dates or times are offered.
    NoDatesAvailable,
    /// The introductory category is hidden for students with prior sessions.
    HideIntroAfterCall,
    /// Focus-area driven flow: focus areas replace categories.
    BigCCoaching,
}

impl Scenario {
    /// Returns the identifier used in URLs and on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::WithExistingStudents => "with-existing-students",
            Self::NoAppointments => "no-appointments",
            Self::NoTopicsAvailable => "no-topics-available",
            Self::NoDatesAvailable => "no-dates-available",
            Self::HideIntroAfterCall => "hide-intro-after-call",
            Self::BigCCoaching => "big-c-coaching",
        }
    }
}

impl FromStr for Scenario {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "with-existing-students" => Ok(Self::WithExistingStudents),
            "no-appointments" => Ok(Self::NoAppointments),
            "no-topics-available" => Ok(Self::NoTopicsAvailable),
            "no-dates-available" => Ok(Self::NoDatesAvailable),
            "hide-intro-after-call" => Ok(Self::HideIntroAfterCall),
            "big-c-coaching" => Ok(Self::BigCCoaching),
            _ => Err(DomainError::UnknownScenario(s.to_string())),
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-facing description of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioDefinition {
    /// The scenario this entry describes.
    pub id: Scenario,
    /// Short label.
    pub name: &'static str,
    /// One-line description of the data override.
    pub description: &'static str,
    /// Shareable link that activates the scenario.
    pub url: &'static str,
}

/// Selects which set of scenarios a host page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCatalogKey {
    /// The standalone booking page.
    #[default]
    Default,
    /// The booking form embedded in the benefits portal.
    OneBh,
}

impl ScenarioCatalogKey {
    /// Returns the key as written on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::OneBh => "onebh",
        }
    }
}

impl FromStr for ScenarioCatalogKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "onebh" => Ok(Self::OneBh),
            _ => Err(DomainError::UnknownScenarioCatalog(s.to_string())),
        }
    }
}

const DEFAULT_SCENARIOS: &[ScenarioDefinition] = &[
    ScenarioDefinition {
        id: Scenario::Default,
        name: "Default",
        description: "Normal flow with all features available",
        url: "/",
    },
    ScenarioDefinition {
        id: Scenario::WithExistingStudents,
        name: "With Existing Students",
        description: "Students from other services are available to add",
        url: "/?scenario=with-existing-students",
    },
    ScenarioDefinition {
        id: Scenario::NoAppointments,
        name: "No Appointments",
        description: "All students have 0/3 sessions available",
        url: "/?scenario=no-appointments",
    },
    ScenarioDefinition {
        id: Scenario::NoTopicsAvailable,
        name: "No Topics Available",
        description: "No topics available for selected student",
        url: "/?scenario=no-topics-available",
    },
    ScenarioDefinition {
        id: Scenario::NoDatesAvailable,
        name: "No Dates Available",
        description: "No dates/times available for selected topic",
        url: "/?scenario=no-dates-available",
    },
    ScenarioDefinition {
        id: Scenario::HideIntroAfterCall,
        name: "Hide Intro (student has had calls)",
        description: "Intro to College Coach hidden for students with >0 prior calls",
        url: "/?scenario=hide-intro-after-call",
    },
];

const ONE_BH_SCENARIOS: &[ScenarioDefinition] = &[
    ScenarioDefinition {
        id: Scenario::Default,
        name: "Default",
        description: "Default OneBH integrated experience",
        url: "/onebh",
    },
    ScenarioDefinition {
        id: Scenario::BigCCoaching,
        name: "Big C Coaching",
        description: "Focus question then dependent/topic selection",
        url: "/onebh?scenario=big-c-coaching",
    },
];

/// Returns the scenarios offered by a catalog, in display order.
#[must_use]
pub const fn scenario_catalog(key: ScenarioCatalogKey) -> &'static [ScenarioDefinition] {
    match key {
        ScenarioCatalogKey::Default => DEFAULT_SCENARIOS,
        ScenarioCatalogKey::OneBh => ONE_BH_SCENARIOS,
    }
}

/// Checks if `scenario` names an entry of `catalog`.
#[must_use]
pub fn is_valid_scenario(catalog: &[ScenarioDefinition], scenario: &str) -> bool {
    catalog.iter().any(|definition| definition.id.as_str() == scenario)
}

/// Parses a scenario id and checks that the catalog offers it.
///
/// # Errors
///
/// Returns an error if the id is unknown or not part of the catalog.
pub fn resolve_scenario(key: ScenarioCatalogKey, scenario: &str) -> Result<Scenario, DomainError> {
    let parsed: Scenario = scenario.parse()?;
    if !is_valid_scenario(scenario_catalog(key), scenario) {
        return Err(DomainError::ScenarioNotInCatalog {
            scenario: scenario.to_string(),
            catalog: key.as_str().to_string(),
        });
    }
    Ok(parsed)
}

/// Focus areas offered in place of categories by [`Scenario::BigCCoaching`].
pub const FOCUS_AREAS: [&str; 5] = [
    "Education for Working Learners",
    "Career / Non-Degree",
    "Skills + Learning",
    "Financial",
    "Executive",
];

/// Returns the subtopics of a focus area, or an empty list if unknown.
#[must_use]
pub fn focus_area_subtopics(focus_area: &str) -> &'static [&'static str] {
    match focus_area {
        "Education for Working Learners" => &[
            "Degree planning and timelines",
            "Balancing work and school",
            "Credit transfer and prior learning",
        ],
        "Career / Non-Degree" => &[
            "Career exploration",
            "Certifications and non-degree paths",
            "Job search and networking",
        ],
        "Skills + Learning" => &[
            "Skill assessments",
            "Learning pathways",
            "Upskilling and reskilling",
        ],
        "Financial" => &[
            "Tuition and aid options",
            "Budgeting for education",
            "Loan repayment strategies",
        ],
        "Executive" => &[
            "Leadership development",
            "Executive education options",
            "Career transition at senior level",
        ],
        _ => &[],
    }
}
