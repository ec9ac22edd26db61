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

//! Observations the wizard exposes to its presentation shell.
//!
//! The shell consumes exactly three signals besides a full state read: the
//! step cursor, the set of completed steps, and the selected category. Every
//! accepted intent yields one [`TransitionRecord`] carrying the shell view
//! before and after, from which the changed signals are derived.

use coach_booking_domain::WizardStep;
use serde::Serialize;
use std::collections::BTreeSet;

/// Names the inbound intent that caused a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Intent {
    /// The intent name (e.g., "`SelectStudent`", "`Continue`").
    pub name: String,
    /// Optional additional details about the intent.
    pub details: Option<String>,
}

impl Intent {
    /// Creates a new Intent.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the intent
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The part of the wizard state the shell subscribes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellSnapshot {
    /// The step under the cursor.
    pub step: WizardStep,
    /// Steps rendered as collapsed summaries.
    pub completed: BTreeSet<WizardStep>,
    /// The selected category, if any.
    pub category: Option<String>,
}

impl ShellSnapshot {
    /// Creates a new `ShellSnapshot`.
    #[must_use]
    pub const fn new(
        step: WizardStep,
        completed: BTreeSet<WizardStep>,
        category: Option<String>,
    ) -> Self {
        Self {
            step,
            completed,
            category,
        }
    }
}

/// One observable change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum Signal {
    /// The step cursor moved.
    StepChanged {
        /// Previous cursor.
        from: WizardStep,
        /// New cursor.
        to: WizardStep,
    },
    /// The completed-step set changed.
    CompletedStepsChanged {
        /// The new set.
        completed: BTreeSet<WizardStep>,
    },
    /// The selected category changed.
    CategoryChanged {
        /// The new category, or `None` when cleared.
        category: Option<String>,
    },
}

/// Returns the signals that differ between two snapshots, in a fixed order:
/// step, completed steps, category.
#[must_use]
pub fn signals_between(before: &ShellSnapshot, after: &ShellSnapshot) -> Vec<Signal> {
    let mut signals: Vec<Signal> = Vec::new();
    if before.step != after.step {
        signals.push(Signal::StepChanged {
            from: before.step,
            to: after.step,
        });
    }
    if before.completed != after.completed {
        signals.push(Signal::CompletedStepsChanged {
            completed: after.completed.clone(),
        });
    }
    if before.category != after.category {
        signals.push(Signal::CategoryChanged {
            category: after.category.clone(),
        });
    }
    signals
}

/// An immutable record of one accepted intent.
///
/// Every accepted intent produces exactly one record, even when no signal
/// changed (e.g. editing the note).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    /// The intent that was applied.
    pub intent: Intent,
    /// Shell view before the intent.
    pub before: ShellSnapshot,
    /// Shell view after the intent.
    pub after: ShellSnapshot,
}

impl TransitionRecord {
    /// Creates a new `TransitionRecord`.
    ///
    /// # Arguments
    ///
    /// * `intent` - The intent that was applied
    /// * `before` - The shell view before the transition
    /// * `after` - The shell view after the transition
    #[must_use]
    pub const fn new(intent: Intent, before: ShellSnapshot, after: ShellSnapshot) -> Self {
        Self {
            intent,
            before,
            after,
        }
    }

    /// The signals this transition emits.
    #[must_use]
    pub fn signals(&self) -> Vec<Signal> {
        signals_between(&self.before, &self.after)
    }
}

#[cfg(test)]
mod tests;
