use clap::Parser;
use salvage::output::OutputFormatter;
use salvage::{CollectConfig, TerminalPrompter, run_cli};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Copy documents, pictures, videos and other user files into a categorized
/// recovery folder.
#[derive(Debug, Parser)]
#[command(name = "salvage", version, about)]
struct Args {
    /// Destination folder; prompted for when omitted
    destination: Option<PathBuf>,

    /// Accepted for compatibility; drive checks are not performed
    #[arg(long)]
    skip_drive_check: bool,

    /// Accepted for compatibility; copies are not verified
    #[arg(long)]
    skip_verification: bool,

    /// Copy without asking for confirmation
    #[arg(short = 'y', long)]
    yes: bool,

    /// Scan and summarize without copying anything
    #[arg(long)]
    dry_run: bool,

    /// Do not write collection_manifest.json at the destination
    #[arg(long)]
    no_manifest: bool,

    /// Deepest folder level to scan below each search root
    #[arg(long, default_value_t = salvage::scanner::MAX_SCAN_DEPTH)]
    max_depth: usize,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Welcome to salvage - collect your files before it's too late.");

    let mut config = match CollectConfig::for_current_user() {
        Ok(config) => config,
        Err(e) => {
            OutputFormatter::error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };
    config.destination = args.destination;
    config.max_depth = args.max_depth;
    config.assume_yes = args.yes;
    config.dry_run = args.dry_run;
    config.write_manifest = !args.no_manifest;
    config.skip_drive_check = args.skip_drive_check;
    config.skip_verification = args.skip_verification;

    match run_cli(&config, &mut TerminalPrompter) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            OutputFormatter::error(&format!("Error: {}", e));
            ExitCode::FAILURE
        }
    }
}
