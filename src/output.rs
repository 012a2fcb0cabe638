//! Output formatting and styling module.
//!
//! Provides a centralized interface for all CLI output, including colored
//! messages, progress bars and summary tables.

use crate::category::Category;
use crate::report::CategoryTotals;
use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::Duration;

/// Manages all CLI output with consistent styling and formatting.
///
/// This struct provides methods for:
/// - Success messages (green with ✓)
/// - Error messages (red with ✗)
/// - Warning messages (yellow with ⚠)
/// - Info messages (cyan)
/// - Progress bars and spinners
/// - Summary tables with per-category statistics
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints a success message in green with a checkmark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salvage::output::OutputFormatter;
    /// OutputFormatter::success("Collection complete!");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints an info message in cyan.
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a dry-run notice message.
    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Creates a progress bar for copying `total` files.
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        pb.set_style(style);
        pb
    }

    /// Creates a spinner shown while folders are being scanned.
    pub fn create_spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Formats a byte count for humans, e.g. `1.5 MB`.
    pub fn format_bytes(bytes: u64) -> String {
        ByteSize::b(bytes).to_string()
    }

    /// Prints a table of file counts and sizes per category.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use salvage::category::Category;
    /// use salvage::output::OutputFormatter;
    /// use salvage::report::CategoryTotals;
    /// use std::collections::BTreeMap;
    ///
    /// let mut totals = BTreeMap::new();
    /// totals.insert(Category::Documents, CategoryTotals { files: 15, bytes: 2048 });
    /// OutputFormatter::summary_table("FILES FOUND", &totals);
    /// ```
    pub fn summary_table(title: &str, totals: &BTreeMap<Category, CategoryTotals>) {
        Self::header(title);

        let width = totals
            .keys()
            .map(|category| category.dir_name().len())
            .max()
            .unwrap_or(0)
            .max(8); // At least "Category" width

        println!(
            "{:<width$} | {:>7} | {}",
            "Category".bold(),
            "Files".bold(),
            "Size".bold(),
            width = width
        );
        println!("{}", "-".repeat(width + 24));

        for (category, totals) in totals {
            println!(
                "{:<width$} | {:>7} | {}",
                category.dir_name(),
                totals.files.to_string().green(),
                Self::format_bytes(totals.bytes),
                width = width
            );
        }

        let files: usize = totals.values().map(|t| t.files).sum();
        let bytes: u64 = totals.values().map(|t| t.bytes).sum();
        println!("{}", "-".repeat(width + 24));
        println!(
            "{:<width$} | {:>7} | {}",
            "Total".bold(),
            files.to_string().green().bold(),
            Self::format_bytes(bytes),
            width = width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_mentions_unit() {
        assert!(OutputFormatter::format_bytes(0).ends_with('B'));
        let large = OutputFormatter::format_bytes(5_000_000);
        assert!(large.contains('M'), "unexpected rendering {large}");
    }

    #[test]
    fn test_progress_bar_length() {
        let pb = OutputFormatter::create_progress_bar(42);
        assert_eq!(pb.length(), Some(42));
    }
}
