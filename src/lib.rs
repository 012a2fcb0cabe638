//! salvage - Disaster-recovery file collection
//!
//! This library scans a user's well-known folders, selects files by category
//! patterns, skips cloud-sync, system and build folders, and copies the matches
//! into a categorized destination tree with a per-file success/failure report.

pub mod category;
pub mod cli;
pub mod config;
pub mod copier;
pub mod error;
pub mod exclusion;
pub mod output;
pub mod plan;
pub mod report;
pub mod roots;
pub mod scanner;

pub use category::Category;
pub use config::CollectConfig;
pub use copier::FileCollector;
pub use error::{CollectError, CollectResult};
pub use exclusion::ExclusionSet;
pub use plan::CollectionPlan;
pub use report::{CollectionReport, CopyRecord, FailureRecord, ScanSummary};
pub use roots::{RootKind, SearchRoot};
pub use scanner::{FilePattern, ScannedFile, Scanner};

pub use cli::{Prompter, RunOutcome, TerminalPrompter, run_cli};
