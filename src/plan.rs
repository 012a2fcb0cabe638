//! One scan over every search root, category and pattern, and its execution.
//!
//! The plan is built once. The totals shown to the user before confirmation
//! are computed from the same scan that the copy phase then executes, so the
//! confirmed numbers and the copied files come from a single pass. Files that
//! vanish in between show up as failures.

use crate::category::Category;
use crate::copier::FileCollector;
use crate::error::CollectResult;
use crate::report::{CollectionReport, ScanSummary};
use crate::roots::{RootKind, SearchRoot};
use crate::scanner::{FilePattern, ScannedFile, Scanner};
use std::path::Path;
use tracing::info;

/// Files found for one (root, category, pattern) combination.
#[derive(Debug, Clone)]
pub struct PlannedBatch {
    pub root: RootKind,
    pub category: Category,
    pub pattern: String,
    pub files: Vec<ScannedFile>,
}

/// The full set of files a run will copy.
#[derive(Debug, Clone, Default)]
pub struct CollectionPlan {
    batches: Vec<PlannedBatch>,
}

impl CollectionPlan {
    /// Scans every root for every pattern of every category.
    ///
    /// Roots that do not exist are skipped. Batches with no files are not kept.
    ///
    /// # Errors
    ///
    /// Returns an error if a category pattern fails to compile.
    pub fn build(
        roots: &[SearchRoot],
        categories: &[Category],
        scanner: &Scanner<'_>,
    ) -> CollectResult<Self> {
        let mut compiled = Vec::with_capacity(categories.len());
        for category in categories {
            let patterns = category
                .patterns()
                .iter()
                .map(|raw| FilePattern::new(raw))
                .collect::<CollectResult<Vec<_>>>()?;
            compiled.push((*category, patterns));
        }

        let mut batches = Vec::new();
        for root in roots {
            if !root.path.exists() {
                info!(root = %root.kind, path = %root.path.display(), "search root not found, skipping");
                continue;
            }

            let before = batches.len();
            for (category, patterns) in &compiled {
                for pattern in patterns {
                    let files = scanner.scan(&root.path, pattern);
                    if files.is_empty() {
                        continue;
                    }
                    batches.push(PlannedBatch {
                        root: root.kind,
                        category: *category,
                        pattern: pattern.as_str().to_string(),
                        files,
                    });
                }
            }
            info!(
                root = %root.kind,
                path = %root.path.display(),
                batches = batches.len() - before,
                "scanned search root"
            );
        }

        Ok(Self { batches })
    }

    pub fn batches(&self) -> &[PlannedBatch] {
        &self.batches
    }

    /// Number of copies the plan will attempt.
    pub fn total_files(&self) -> usize {
        self.batches.iter().map(|b| b.files.len()).sum()
    }

    /// Per-category file counts and sizes, as measured by the scan.
    pub fn summary(&self) -> ScanSummary {
        let mut summary = ScanSummary::new();
        for batch in &self.batches {
            for file in &batch.files {
                summary.add(batch.category, file.size);
            }
        }
        summary
    }

    /// Copies every planned file into `destination`, in plan order.
    ///
    /// `on_batch` is called after each batch with the number of files copied
    /// from it. Returns the total number of files copied.
    pub fn execute<F>(
        &self,
        destination: &Path,
        report: &mut CollectionReport,
        mut on_batch: F,
    ) -> usize
    where
        F: FnMut(&PlannedBatch, usize),
    {
        let mut copied = 0;
        for batch in &self.batches {
            let batch_copied =
                FileCollector::copy_scanned(&batch.files, destination, batch.category, report);
            on_batch(batch, batch_copied);
            copied += batch_copied;
        }
        copied
    }
}
