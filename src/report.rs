//! Copy/failure accumulators, per-category totals and the run manifest.

use crate::category::Category;
use crate::error::{CollectError, CollectResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name of the manifest written at the destination root.
pub const MANIFEST_FILE_NAME: &str = "collection_manifest.json";

/// A file that was copied into the destination tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyRecord {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub size: u64,
    pub category: Category,
}

/// A file whose copy attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    pub source: PathBuf,
    pub category: Category,
    pub reason: String,
}

/// File count and byte total for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub files: usize,
    pub bytes: u64,
}

impl CategoryTotals {
    fn add(&mut self, bytes: u64) {
        self.files += 1;
        self.bytes += bytes;
    }
}

/// Ordered, append-only record of every copy and failure in a run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CollectionReport {
    copies: Vec<CopyRecord>,
    failures: Vec<FailureRecord>,
}

impl CollectionReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_copy(&mut self, record: CopyRecord) {
        self.copies.push(record);
    }

    pub fn record_failure(&mut self, record: FailureRecord) {
        self.failures.push(record);
    }

    /// Appends every record of `other` after the records already present.
    pub fn merge(&mut self, other: CollectionReport) {
        self.copies.extend(other.copies);
        self.failures.extend(other.failures);
    }

    pub fn copies(&self) -> &[CopyRecord] {
        &self.copies
    }

    pub fn failures(&self) -> &[FailureRecord] {
        &self.failures
    }

    pub fn copied_count(&self) -> usize {
        self.copies.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }

    /// Total bytes written across all successful copies.
    pub fn copied_bytes(&self) -> u64 {
        self.copies.iter().map(|record| record.size).sum()
    }

    /// Successful copies grouped by category.
    pub fn totals_by_category(&self) -> BTreeMap<Category, CategoryTotals> {
        let mut totals: BTreeMap<Category, CategoryTotals> = BTreeMap::new();
        for record in &self.copies {
            totals.entry(record.category).or_default().add(record.size);
        }
        totals
    }
}

/// What a scan found, per category, before anything is copied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    totals: BTreeMap<Category, CategoryTotals>,
}

impl ScanSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one file of `bytes` bytes under `category`.
    pub fn add(&mut self, category: Category, bytes: u64) {
        self.totals.entry(category).or_default().add(bytes);
    }

    pub fn totals(&self) -> &BTreeMap<Category, CategoryTotals> {
        &self.totals
    }

    pub fn total_files(&self) -> usize {
        self.totals.values().map(|t| t.files).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.totals.values().map(|t| t.bytes).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_files() == 0
    }
}

/// Formats a duration as `H:MM:SS`; hours are not padded or capped.
///
/// # Examples
///
/// ```
/// use salvage::report::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(3725)), "1:02:05");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    format!(
        "{}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Persistent summary of one completed run, written as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest<'a> {
    pub started_at: String,
    pub finished_at: String,
    pub destination: &'a Path,
    pub elapsed: String,
    pub copied_files: usize,
    pub failed_files: usize,
    pub copied_bytes: u64,
    pub copies: &'a [CopyRecord],
    pub failures: &'a [FailureRecord],
}

impl<'a> RunManifest<'a> {
    /// Builds a manifest for `report`, stamped with the current time as the finish.
    pub fn new(
        started_at: chrono::DateTime<chrono::Utc>,
        elapsed: Duration,
        destination: &'a Path,
        report: &'a CollectionReport,
    ) -> Self {
        Self {
            started_at: started_at.to_rfc3339(),
            finished_at: chrono::Utc::now().to_rfc3339(),
            destination,
            elapsed: format_duration(elapsed),
            copied_files: report.copied_count(),
            failed_files: report.failed_count(),
            copied_bytes: report.copied_bytes(),
            copies: report.copies(),
            failures: report.failures(),
        }
    }

    /// Path the manifest is written to for a given destination root.
    pub fn file_path(destination: &Path) -> PathBuf {
        destination.join(MANIFEST_FILE_NAME)
    }

    /// Writes the manifest to `<destination>/collection_manifest.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self) -> CollectResult<PathBuf> {
        let path = Self::file_path(self.destination);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(|source| CollectError::ManifestWriteFailed {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
