// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking session: roster, wizard state and the clock date.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    CategoryView, FeaturedTopicView, FieldsView, PreviousCoachView, StepView, StudentView,
    TimeSlotView, TopicsView, ValidationErrorView, WizardView,
};
use chrono::NaiveDate;
use coach_booking::{BookingConfig, Command, TransitionResult, WizardState, apply};
use coach_booking_directory::{
    Roster, dates_for_scenario, phone_options, previous_coach_for, times_for_scenario,
};
use coach_booking_domain::{
    OrganizedTopics, PhoneOption, PreviousCoachSession, ScenarioCatalogKey, Student, TimeSlot,
    WizardStep, category_description, featured_supporting_text, organize_topics, resolve_scenario,
    section_description,
};
use coach_booking_signals::{Signal, TransitionRecord};
use tracing::{debug, info, warn};

/// One family's pass through the booking wizard.
///
/// Owns the only mutable state in the system. Every inbound event goes
/// through [`BookingSession::execute`], which applies one command and keeps
/// its transition record.
#[derive(Debug, Clone)]
pub struct BookingSession {
    catalog: ScenarioCatalogKey,
    today: NaiveDate,
    roster: Roster,
    state: WizardState,
    /// Every accepted intent since the session started. Not capped; a
    /// session lives for one family's pass through the wizard.
    history: Vec<TransitionRecord>,
}

impl BookingSession {
    /// Starts a session.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The scenario catalog the host page offers
    /// * `config` - Initial scenario and toggles
    /// * `today` - The clock date; availability starts the next weekday
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is not part of `catalog`.
    pub fn new(
        catalog: ScenarioCatalogKey,
        config: BookingConfig,
        today: NaiveDate,
    ) -> Result<Self, ApiError> {
        resolve_scenario(catalog, config.scenario.as_str()).map_err(translate_domain_error)?;

        info!(
            scenario = %config.scenario,
            catalog = catalog.as_str(),
            %today,
            "Booking session started"
        );

        Ok(Self {
            catalog,
            today,
            roster: Roster::new(config.scenario),
            state: WizardState::new(config),
            history: Vec::new(),
        })
    }

    /// The scenario catalog in use.
    #[must_use]
    pub const fn catalog(&self) -> ScenarioCatalogKey {
        self.catalog
    }

    /// The clock date.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// The current wizard state.
    #[must_use]
    pub const fn state(&self) -> &WizardState {
        &self.state
    }

    /// The student roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    pub(crate) const fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Every accepted transition, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    /// Applies one command. On success the state is replaced and the
    /// signals raised by the transition are returned; on failure nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the wizard refuses the command.
    pub fn execute(&mut self, command: Command) -> Result<Vec<Signal>, ApiError> {
        let intent: &'static str = command.name();
        let rebuilds_roster: bool = matches!(command, Command::SetScenario { .. });

        let result: TransitionResult = apply(&self.state, command).map_err(|e| {
            warn!(intent, error = %e, "Intent rejected");
            translate_core_error(intent, e)
        })?;

        self.state = result.new_state;
        if rebuilds_roster {
            self.roster = Roster::new(self.state.config.scenario);
        }

        let signals: Vec<Signal> = result.record.signals();
        info!(
            intent,
            step = self.state.cursor.index(),
            category = self.state.category.as_deref().unwrap_or(""),
            scenario = %self.state.config.scenario,
            signals = signals.len(),
            "Intent applied"
        );
        if let Some(error) = self.state.validation_error {
            info!(intent, error = %error, "Step validation failed");
        }

        self.history.push(result.record);
        Ok(signals)
    }

    /// Dates offered by the date picker.
    #[must_use]
    pub fn available_dates(&self) -> Vec<NaiveDate> {
        dates_for_scenario(
            self.state.config.scenario,
            &self.state.coach_constraint(),
            self.today,
        )
    }

    /// Start times offered on the chosen date; empty until a date is chosen.
    #[must_use]
    pub fn available_times(&self) -> Vec<TimeSlot> {
        self.state.date.map_or_else(Vec::new, |date| {
            times_for_scenario(
                self.state.config.scenario,
                &self.state.coach_constraint(),
                date,
            )
        })
    }

    /// The previous coach for the selected student and topic, offered only
    /// while coach continuity is on.
    #[must_use]
    pub fn previous_coach_offer(&self) -> Option<PreviousCoachSession> {
        if !self.state.config.toggles.coach_continuity {
            return None;
        }
        let student: &Student = self.state.student.as_ref()?;
        let topic: &str = self.state.topic.as_deref()?;
        previous_coach_for(student.id, topic)
    }

    /// Canned phone numbers for the current call mode.
    #[must_use]
    pub fn phone_options(&self) -> Vec<PhoneOption> {
        phone_options(self.state.config.toggles.teams_calls)
    }

    fn topics_view(&self) -> TopicsView {
        let Some(category) = self.state.category.as_deref() else {
            return TopicsView::default();
        };
        let organized: OrganizedTopics =
            organize_topics(&self.state.available_topics(), category);

        TopicsView {
            section_description: Some(section_description(category)),
            featured: organized
                .featured
                .into_iter()
                .map(|name| FeaturedTopicView {
                    supporting_text: featured_supporting_text(category, &name),
                    name,
                })
                .collect(),
            regular: organized.regular,
        }
    }

    /// Projects the session into the shell's view.
    ///
    /// # Arguments
    ///
    /// * `signals` - Signals raised by the event being answered
    #[must_use]
    pub fn view(&self, signals: Vec<Signal>) -> WizardView {
        let state: &WizardState = &self.state;
        let offer: Option<PreviousCoachSession> = self.previous_coach_offer();

        let available_dates: Vec<NaiveDate> = self.available_dates();
        let available_times: Vec<TimeSlotView> = self
            .available_times()
            .into_iter()
            .map(TimeSlotView::from)
            .collect();
        let available_topics: TopicsView = self.topics_view();
        debug!(
            dates = available_dates.len(),
            times = available_times.len(),
            categories = state.available_categories().len(),
            topics = available_topics.len(),
            "Derived lists recomputed"
        );

        WizardView {
            scenario: state.config.scenario,
            toggles: state.config.toggles,
            phase: state.phase,
            cursor: state.cursor.index(),
            completed: state.completed.iter().map(WizardStep::index).collect(),
            steps: WizardStep::ALL
                .iter()
                .map(|step| StepView {
                    index: step.index(),
                    title: step.title(),
                    state: state.step_state(*step),
                })
                .collect(),
            fields: FieldsView {
                student: state.student.as_ref().map(|s| s.id),
                category: state.category.clone(),
                topic: state.topic.clone(),
                note: state.note.clone(),
                date: state.date,
                time: state.time,
                phone: state.phone.clone(),
                attachment: state.attachment.clone(),
            },
            validation_error: state.validation_error.map(ValidationErrorView::from),
            students: self
                .roster
                .students()
                .into_iter()
                .map(|s| StudentView {
                    id: s.id,
                    selectable: s.is_bookable(),
                    age_band: s.age_band.as_str(),
                    sessions_available: s.sessions_available,
                    display_name: s.display_name,
                })
                .collect(),
            existing_students: self.roster.existing_students(),
            available_categories: state
                .available_categories()
                .into_iter()
                .map(|name| CategoryView {
                    name,
                    description: category_description(name),
                })
                .collect(),
            available_topics,
            available_dates,
            available_times,
            phone_options: self.phone_options(),
            previous_coach: offer.map(|session| PreviousCoachView {
                opted_in: state.previous_coach.as_ref() == Some(&session),
                continuity_line: session.continuity_line(),
                coach_name: session.coach_name,
            }),
            summary: state.summary(),
            signals,
        }
    }
}
