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
#![allow(clippy::multiple_crate_versions)]

//! Drives a booking session from JSON-lines events on stdin.
//!
//! Each event produces one JSON object on stdout: the resulting view, or an
//! error object when the event is refused. Logs go to stderr.

mod event;
mod replay;

use chrono::NaiveDate;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use coach_booking::BookingConfig;
use coach_booking_api::BookingSession;
use coach_booking_domain::{AuxToggles, Scenario, ScenarioCatalogKey, scenario_catalog};
use color_eyre::{Result, eyre::Context};
use std::io::{self, Write};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// Coach booking harness - replays wizard events from stdin
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario to start in
    #[arg(short, long, default_value = "default")]
    scenario: Scenario,

    /// Scenario catalog offered by the host page (`default` or `onebh`)
    #[arg(short, long, default_value = "default")]
    catalog: ScenarioCatalogKey,

    /// Offer meeting a previously seen coach
    #[arg(long)]
    coach_continuity: bool,

    /// Book Teams calls instead of phone calls
    #[arg(long)]
    teams_calls: bool,

    /// Reference date (`YYYY-MM-DD`); defaults to the local date
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Print the scenarios of the selected catalog and exit
    #[arg(long)]
    list_scenarios: bool,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbose.log_level_filter().as_trace()
    }

    const fn config(&self) -> BookingConfig {
        BookingConfig::new(
            self.scenario,
            AuxToggles {
                coach_continuity: self.coach_continuity,
                teams_calls: self.teams_calls,
            },
        )
    }
}

fn list_scenarios(catalog: ScenarioCatalogKey) -> Result<()> {
    let mut stdout = io::stdout().lock();
    for definition in scenario_catalog(catalog) {
        serde_json::to_writer(&mut stdout, definition).wrap_err("Failed to write scenario")?;
        writeln!(stdout).wrap_err("Failed to write scenario")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // RUST_LOG wins over -v/-q.
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();

    if args.list_scenarios {
        return list_scenarios(args.catalog);
    }

    let today: NaiveDate = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut session: BookingSession = BookingSession::new(args.catalog, args.config(), today)
        .wrap_err("Failed to start booking session")?;

    let refused: usize = replay::replay(&mut session, io::stdin().lock(), io::stdout().lock())?;
    info!(
        events = session.history().len(),
        refused, "Replay finished"
    );
    Ok(())
}
