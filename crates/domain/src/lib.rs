// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod age_band;
mod availability;
mod catalog;
mod eligibility;
mod error;
mod phone;
mod scenario;
mod time_slot;
mod types;

#[cfg(test)]
mod tests;

pub use age_band::{AgeBand, band_range};
pub use availability::{
    BOOKING_WINDOW_WEEKDAYS, CoachConstraint, all_time_slots, available_dates,
    available_times_for_date,
};
pub use catalog::{
    CATALOG, CategoryEntry, INTRODUCTORY_CATEGORY, INTRODUCTORY_TOPIC, OrganizedTopics, TopicEntry,
    all_categories, all_topics_in_category, available_categories, available_topics,
    category_description, featured_supporting_text, is_category_available, is_introductory,
    is_topic_available, organize_topics, section_description,
};
pub use eligibility::EligibilityView;
pub use error::DomainError;
pub use phone::{PhoneOption, format_phone_number, is_complete_phone_number};
pub use scenario::{
    FOCUS_AREAS, Scenario, ScenarioCatalogKey, ScenarioDefinition, focus_area_subtopics,
    is_valid_scenario, resolve_scenario, scenario_catalog,
};
pub use time_slot::{SESSION_LENGTH_MINUTES, TimeSlot};
pub use types::{
    Attachment, AuxToggle, AuxToggles, Coach, CoachId, ExistingStudent, PreviousCoachSession,
    StepState, Student, StudentId, WizardStep,
};
