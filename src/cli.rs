//! Command-line interface module for salvage.
//!
//! This module sequences a collection run:
//! - Destination resolution and pre-flight checks
//! - Scanning all search roots into a plan
//! - Confirmation
//! - Copying with progress reporting
//! - Final summary and run manifest

use crate::config::CollectConfig;
use crate::error::{CollectError, CollectResult};
use crate::exclusion::ExclusionSet;
use crate::output::OutputFormatter;
use crate::plan::CollectionPlan;
use crate::report::{CollectionReport, RunManifest, ScanSummary, format_duration};
use crate::scanner::Scanner;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Source of the two interactive inputs of a run.
pub trait Prompter {
    /// Asks for the destination folder. `None` means nothing was entered.
    fn destination(&mut self) -> CollectResult<Option<PathBuf>>;

    /// Asks whether the planned copy should go ahead.
    fn confirm(&mut self, summary: &ScanSummary, destination: &Path) -> CollectResult<bool>;
}

/// Prompts on the terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn destination(&mut self) -> CollectResult<Option<PathBuf>> {
        let answer: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Destination folder for recovered files")
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();
        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }

    fn confirm(&mut self, summary: &ScanSummary, destination: &Path) -> CollectResult<bool> {
        let prompt = format!(
            "Copy {} files ({}) to {}?",
            summary.total_files(),
            OutputFormatter::format_bytes(summary.total_bytes()),
            destination.display()
        );
        Ok(Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?)
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The user declined; nothing was copied.
    Cancelled,
    /// Dry run; nothing was created or copied.
    DryRun(ScanSummary),
    /// Files were copied.
    Completed {
        report: CollectionReport,
        elapsed: Duration,
        destination: PathBuf,
    },
}

/// Runs a collection with the given settings.
///
/// Pre-flight failures (no destination, destination not creatable, home
/// directory unknown) are returned as errors before anything is scanned.
/// Per-file failures are recorded in the returned report instead.
///
/// # Examples
///
/// ```no_run
/// use salvage::cli::{TerminalPrompter, run_cli};
/// use salvage::config::CollectConfig;
///
/// let config = CollectConfig::for_current_user().unwrap().with_destination("/media/backup");
/// match run_cli(&config, &mut TerminalPrompter) {
///     Ok(outcome) => println!("{:?}", outcome),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(config: &CollectConfig, prompter: &mut dyn Prompter) -> CollectResult<RunOutcome> {
    let destination = match &config.destination {
        Some(path) if !path.as_os_str().is_empty() => path.clone(),
        _ => prompter
            .destination()?
            .ok_or(CollectError::MissingDestination)?,
    };

    if config.skip_drive_check {
        debug!("--skip-drive-check given; drive checks are not performed");
    }
    if config.skip_verification {
        debug!("--skip-verification given; copies are not verified");
    }

    if config.dry_run {
        OutputFormatter::dry_run_notice("Scanning only, nothing will be copied.");
    } else {
        fs::create_dir_all(&destination).map_err(|source| {
            CollectError::DestinationCreateFailed {
                path: destination.clone(),
                source,
            }
        })?;
    }

    let plan = build_plan(config, &destination)?;
    let summary = plan.summary();
    OutputFormatter::summary_table("FILES FOUND", summary.totals());

    if config.dry_run {
        OutputFormatter::success("Dry run complete. No files were copied.");
        return Ok(RunOutcome::DryRun(summary));
    }

    if summary.is_empty() {
        OutputFormatter::info("No matching files found.");
        return Ok(RunOutcome::Completed {
            report: CollectionReport::new(),
            elapsed: Duration::ZERO,
            destination,
        });
    }

    if !config.assume_yes && !prompter.confirm(&summary, &destination)? {
        OutputFormatter::warning("Cancelled. No files were copied.");
        return Ok(RunOutcome::Cancelled);
    }

    let started_at = chrono::Utc::now();
    let started = Instant::now();
    let report = copy_plan(&plan, &destination);
    let elapsed = started.elapsed();

    print_report(&report, elapsed, &destination);

    if config.write_manifest {
        match RunManifest::new(started_at, elapsed, &destination, &report).save() {
            Ok(path) => OutputFormatter::plain(&format!("Manifest: {}", path.display())),
            Err(e) => {
                warn!(error = %e, "manifest not written");
                OutputFormatter::warning(&format!("Could not write manifest: {}", e));
            }
        }
    }

    Ok(RunOutcome::Completed {
        report,
        elapsed,
        destination,
    })
}

fn build_plan(config: &CollectConfig, destination: &Path) -> CollectResult<CollectionPlan> {
    for root in &config.search_roots {
        OutputFormatter::plain(&format!("  {:<10} {}", root.kind, root.path.display()));
    }

    let exclusions = ExclusionSet::standard();
    let scanner = Scanner::new(&exclusions)
        .with_max_depth(config.max_depth)
        .skipping(destination);

    let spinner = OutputFormatter::create_spinner("Scanning folders...");
    let plan = CollectionPlan::build(&config.search_roots, &config.categories, &scanner);
    spinner.finish_and_clear();
    plan
}

fn copy_plan(plan: &CollectionPlan, destination: &Path) -> CollectionReport {
    OutputFormatter::header("COPYING");
    let mut report = CollectionReport::new();
    let pb = OutputFormatter::create_progress_bar(plan.total_files() as u64);

    plan.execute(destination, &mut report, |batch, copied| {
        pb.inc(batch.files.len() as u64);
        pb.set_message(format!("{} {}", batch.root, batch.category));
        if copied < batch.files.len() {
            pb.println(format!(
                "  ⚠ {} {}: {} of {} copied",
                batch.root,
                batch.pattern,
                copied,
                batch.files.len()
            ));
        }
    });
    pb.finish_and_clear();
    report
}

fn print_report(report: &CollectionReport, elapsed: Duration, destination: &Path) {
    OutputFormatter::summary_table("FILES COPIED", &report.totals_by_category());

    if !report.failures().is_empty() {
        OutputFormatter::header("FAILED");
        for failure in report.failures() {
            OutputFormatter::error(&format!("{}: {}", failure.source.display(), failure.reason));
        }
    }

    OutputFormatter::header("SUMMARY");
    OutputFormatter::success(&format!("Files copied: {}", report.copied_count()));
    if report.failed_count() > 0 {
        OutputFormatter::warning(&format!("Files failed: {}", report.failed_count()));
    } else {
        OutputFormatter::plain("Files failed: 0");
    }
    OutputFormatter::plain(&format!("Duration:     {}", format_duration(elapsed)));
    OutputFormatter::plain(&format!("Destination:  {}", destination.display()));
}
