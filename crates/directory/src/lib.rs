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

//! Mock directory for the booking wizard.
//!
//! Holds the fixtures (students, existing students, coaches, session history,
//! phone numbers) and the scenario-aware accessors the boundary layer uses to
//! populate the wizard's pickers.

mod error;
mod fixtures;
mod roster;
mod scenario_data;

#[cfg(test)]
mod tests;

pub use error::DirectoryError;
pub use fixtures::{
    DEFAULT_SESSION_QUOTA, mock_coaches, mock_existing_students, mock_students, phone_options,
    previous_sessions, prior_session_count,
};
pub use roster::Roster;
pub use scenario_data::{
    dates_for_scenario, existing_students_for_scenario, previous_coach_for, students_for_scenario,
    times_for_scenario, topics_for_scenario,
};
