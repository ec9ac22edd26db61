// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenario-aware eligibility.
//!
//! The catalog answers eligibility purely by age band. The wizard asks the
//! same questions through this view, which layers the active scenario on top:
//!
//! - `no-topics-available` empties every topic list while leaving category
//!   availability untouched
//! - `hide-intro-after-call` withholds the introductory category from students
//!   with prior sessions
//! - `big-c-coaching` replaces categories with focus areas and topics with
//!   their subtopics

use crate::catalog::{self, INTRODUCTORY_TOPIC};
use crate::scenario::{FOCUS_AREAS, Scenario, focus_area_subtopics};
use crate::types::Student;

/// Eligibility lookups as seen under one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityView {
    scenario: Scenario,
}

impl EligibilityView {
    /// Creates a view for `scenario`.
    #[must_use]
    pub const fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// The scenario this view applies.
    #[must_use]
    pub const fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Returns whether the introductory category is offered to `student`.
    #[must_use]
    pub const fn offers_introductory(&self, student: &Student) -> bool {
        match self.scenario {
            Scenario::HideIntroAfterCall => student.prior_sessions == 0,
            Scenario::BigCCoaching => false,
            _ => true,
        }
    }

    /// Categories the student may choose from, in display order.
    #[must_use]
    pub fn categories(&self, student: &Student) -> Vec<&'static str> {
        if self.scenario == Scenario::BigCCoaching {
            return FOCUS_AREAS.to_vec();
        }

        let mut categories: Vec<&'static str> = catalog::available_categories(student.age_band);
        if !self.offers_introductory(student) {
            categories.retain(|c| !catalog::is_introductory(c));
        }
        categories
    }

    /// Topics the student may choose from within `category`, in catalog order.
    #[must_use]
    pub fn topics(&self, category: &str, student: &Student) -> Vec<&'static str> {
        match self.scenario {
            Scenario::BigCCoaching => focus_area_subtopics(category).to_vec(),
            Scenario::NoTopicsAvailable if !catalog::is_introductory(category) => Vec::new(),
            _ => catalog::available_topics(category, student.age_band),
        }
    }

    /// Checks if `category` may be selected for `student`.
    #[must_use]
    pub fn is_category_selectable(&self, category: &str, student: &Student) -> bool {
        if self.scenario == Scenario::BigCCoaching {
            return FOCUS_AREAS.contains(&category);
        }
        if catalog::is_introductory(category) {
            return self.offers_introductory(student);
        }
        catalog::is_category_available(category, student.age_band)
    }

    /// Checks if `topic` may be selected within `category` for `student`.
    #[must_use]
    pub fn is_topic_selectable(&self, category: &str, topic: &str, student: &Student) -> bool {
        self.topics(category, student).contains(&topic)
    }

    /// Returns whether choosing `category` skips topic selection.
    #[must_use]
    pub fn bypasses_topic_step(&self, category: &str) -> bool {
        self.scenario != Scenario::BigCCoaching && catalog::is_introductory(category)
    }

    /// The topic forced by a bypassing category, if any.
    #[must_use]
    pub fn forced_topic(&self, category: &str) -> Option<&'static str> {
        self.bypasses_topic_step(category).then_some(INTRODUCTORY_TOPIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age_band::AgeBand;
    use crate::catalog::INTRODUCTORY_CATEGORY;
    use crate::types::StudentId;

    fn student(age_band: AgeBand, prior_sessions: u32) -> Student {
        Student::new(StudentId::new(1), "Nick", age_band, 3)
            .unwrap()
            .with_prior_sessions(prior_sessions)
    }

    #[test]
    fn test_default_view_matches_catalog() {
        let view: EligibilityView = EligibilityView::new(Scenario::Default);
        let nick: Student = student(AgeBand::Grade11, 0);

        assert_eq!(
            view.categories(&nick),
            catalog::available_categories(AgeBand::Grade11)
        );
        assert_eq!(
            view.topics("College Admissions", &nick),
            catalog::available_topics("College Admissions", AgeBand::Grade11)
        );
    }

    #[test]
    fn test_hide_intro_only_affects_students_with_history() {
        let view: EligibilityView = EligibilityView::new(Scenario::HideIntroAfterCall);

        let fresh: Student = student(AgeBand::Grade11, 0);
        let returning: Student = student(AgeBand::Grade11, 2);

        assert!(view.categories(&fresh).contains(&INTRODUCTORY_CATEGORY));
        assert!(!view.categories(&returning).contains(&INTRODUCTORY_CATEGORY));
        assert!(!view.is_category_selectable(INTRODUCTORY_CATEGORY, &returning));
        assert!(view.is_category_selectable("College Admissions", &returning));
    }

    #[test]
    fn test_no_topics_keeps_categories_but_empties_topics() {
        let view: EligibilityView = EligibilityView::new(Scenario::NoTopicsAvailable);
        let nick: Student = student(AgeBand::Grade11, 0);

        assert!(view.is_category_selectable("College Admissions", &nick));
        assert!(view.topics("College Admissions", &nick).is_empty());
        assert!(!view.is_topic_selectable(
            "College Admissions",
            "Admissions Basics",
            &nick
        ));
        assert_eq!(
            view.topics(INTRODUCTORY_CATEGORY, &nick),
            vec![INTRODUCTORY_TOPIC]
        );
    }

    #[test]
    fn test_big_c_uses_focus_areas() {
        let view: EligibilityView = EligibilityView::new(Scenario::BigCCoaching);
        let newborn: Student = student(AgeBand::Newborn, 0);

        assert_eq!(view.categories(&newborn), FOCUS_AREAS.to_vec());
        assert!(view.is_category_selectable("Financial", &newborn));
        assert!(!view.is_category_selectable("College Admissions", &newborn));
        assert!(view.is_topic_selectable("Financial", "Budgeting for education", &newborn));
        assert!(!view.bypasses_topic_step(INTRODUCTORY_CATEGORY));
    }

    #[test]
    fn test_forced_topic_only_for_introductory() {
        let view: EligibilityView = EligibilityView::new(Scenario::Default);

        assert_eq!(
            view.forced_topic(INTRODUCTORY_CATEGORY),
            Some(INTRODUCTORY_TOPIC)
        );
        assert_eq!(view.forced_topic("College Admissions"), None);
    }
}
