//! Hero pilot binary.
//!
//! Composition root that assembles:
//! 1. Configuration from the environment (and `.env`)
//! 2. The hero command book, parsed from routine lines
//! 3. A pilot driving the simulated character
//!
//! Commands run on a blocking thread while Ctrl-C clears the kill-switch, so
//! an interrupted run still releases every held key before exiting. Each run
//! is reported as JSON on stdout; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! pilot --instant "Move, x=0.2, y=0.4" "Adjust, 0.2, 0.4" Buff
//! RUST_LOG=debug pilot --routine farm.txt --passes 10
//! ```
mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use command_book::hero;
use pilot_core::{Clock, ManualClock, SystemClock};
use pilot_runtime::{KillSwitchFlag, Physics, Pilot, PilotConfig, RunReport};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PilotConfig::from_env().context("invalid pilot configuration")?;
    let book = hero::book(config.settings.clone());

    if cli.list {
        for name in book.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut routine = cli
        .routine_lines()?
        .iter()
        .map(|line| {
            book.parse_line(line)
                .with_context(|| format!("invalid routine line '{line}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    if routine.is_empty() {
        anyhow::bail!("nothing to run: pass routine lines or --routine <FILE>");
    }

    let clock: Arc<dyn Clock> = if cli.instant {
        Arc::new(ManualClock::new())
    } else {
        Arc::new(SystemClock::new())
    };
    let switch = Arc::new(KillSwitchFlag::default());
    let (pilot, _character) =
        Pilot::simulated(&config, Physics::default(), clock, Arc::clone(&switch))?;

    tracing::info!(
        commands = routine.len(),
        passes = cli.passes,
        start = %config.start,
        stage_fright = config.stage_fright,
        "starting pilot"
    );

    let interrupt = Arc::clone(&switch);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupt received, stopping after the current action");
            interrupt.disable();
        }
    });

    let passes = cli.passes;
    let reports = tokio::task::spawn_blocking(move || -> Vec<RunReport> {
        let mut reports = Vec::new();
        'passes: for pass in 0..passes {
            tracing::debug!(pass, "routine pass");
            for command in routine.iter_mut() {
                let report = pilot.run(command.as_mut());
                let interrupted = report.interrupted;
                reports.push(report);
                if interrupted {
                    break 'passes;
                }
            }
        }
        reports
    })
    .await
    .context("pilot thread panicked")?;

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
