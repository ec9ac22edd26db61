// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reads events line by line and writes one JSON object per event.

use crate::event::Event;
use coach_booking_api::{BookingSession, WizardView};
use color_eyre::{Result, eyre::Context};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// One line of output.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Outcome {
    /// The event was applied, or was a validation failure carried in the view.
    View(Box<WizardView>),
    /// The event was refused or could not be read; the session is unchanged.
    Refused { line: usize, error: String },
}

/// Replays every event of `input` against `session`.
///
/// Blank lines are skipped. A line that does not parse, or an event the
/// session refuses, produces an error object and replay continues.
///
/// # Returns
///
/// The number of events that were refused.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn replay<R: BufRead, W: Write>(
    session: &mut BookingSession,
    input: R,
    mut output: W,
) -> Result<usize> {
    let mut refused: usize = 0;

    for (index, line) in input.lines().enumerate() {
        let line_number: usize = index + 1;
        let line: String = line.wrap_err("Failed to read event")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome: Outcome = match serde_json::from_str::<Event>(&line) {
            Ok(event) => {
                debug!(line = line_number, ?event, "Replaying event");
                match event.dispatch(session) {
                    Ok(view) => Outcome::View(Box::new(view)),
                    Err(e) => Outcome::Refused {
                        line: line_number,
                        error: e.to_string(),
                    },
                }
            }
            Err(e) => {
                warn!(line = line_number, error = %e, "Unreadable event");
                Outcome::Refused {
                    line: line_number,
                    error: format!("Unreadable event: {e}"),
                }
            }
        };

        if matches!(outcome, Outcome::Refused { .. }) {
            refused += 1;
        }
        serde_json::to_writer(&mut output, &outcome).wrap_err("Failed to write view")?;
        writeln!(output).wrap_err("Failed to write view")?;
    }

    output.flush().wrap_err("Failed to flush output")?;
    Ok(refused)
}
