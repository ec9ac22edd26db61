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
    clippy::all
)]

//! Boundary layer between the presentation shell and the booking wizard.
//!
//! A [`BookingSession`] owns the roster and the wizard state. Handlers
//! accept raw event input, apply it through the core state machine and
//! return a [`WizardView`] describing everything the shell renders.

mod error;
mod handlers;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

pub use error::{
    ApiError, translate_core_error, translate_directory_error, translate_domain_error,
};
pub use handlers::{
    add_student, choose_phone_option, claim_existing_student, continue_step, current_view,
    edit_step, reset, select_category, select_student, select_topic, set_attachment,
    set_aux_toggle, set_custom_phone, set_date, set_note, set_phone, set_scenario, set_time,
    submit, toggle_previous_coach_opt_in,
};
pub use request_response::{
    AddStudentRequest, AttachmentRequest, CategoryView, ClaimExistingStudentRequest,
    FeaturedTopicView, FieldsView, PreviousCoachView, StepView, StudentView, TimeSlotView,
    TopicsView, ValidationErrorView, WizardView,
};
pub use session::BookingSession;
