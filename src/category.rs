//! File categories and the filename patterns that select them.
//!
//! Each category owns an ordered list of glob patterns. Categories overlap on
//! purpose: Excel workbooks are collected both as documents and as
//! spreadsheets, so a workbook lands in both destination folders.
//!
//! # Examples
//!
//! ```
//! use salvage::category::Category;
//!
//! assert_eq!(Category::Spreadsheets.dir_name(), "Spreadsheets");
//! assert!(Category::Documents.patterns().contains(&"*.xlsx"));
//! assert!(Category::Spreadsheets.patterns().contains(&"*.xlsx"));
//! ```
use serde::Serialize;
use std::fmt;

/// A named bucket of file patterns, one destination folder per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    /// Office documents, PDFs and plain text
    Documents,
    /// Photos and other raster or vector images
    Images,
    /// Video recordings and movies
    Videos,
    /// Workbooks and tabular data
    Spreadsheets,
    /// Music and voice recordings
    Audio,
    /// Compressed archives
    Archives,
}

impl Category {
    /// Every category, in collection order.
    pub const ALL: [Category; 6] = [
        Category::Documents,
        Category::Images,
        Category::Videos,
        Category::Spreadsheets,
        Category::Audio,
        Category::Archives,
    ];

    /// Returns the destination folder name for this category.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Documents => "Documents",
            Category::Images => "Images",
            Category::Videos => "Videos",
            Category::Spreadsheets => "Spreadsheets",
            Category::Audio => "Audio",
            Category::Archives => "Archives",
        }
    }

    /// Returns the filename patterns collected for this category.
    pub fn patterns(&self) -> &'static [&'static str] {
        match self {
            Category::Documents => &[
                "*.pdf", "*.doc", "*.docx", "*.txt", "*.rtf", "*.odt", "*.xls", "*.xlsx", "*.ppt",
                "*.pptx",
            ],
            Category::Images => &[
                "*.jpg", "*.jpeg", "*.png", "*.gif", "*.bmp", "*.tiff", "*.heic", "*.raw",
                "*.svg", "*.webp",
            ],
            Category::Videos => &[
                "*.mp4", "*.avi", "*.mkv", "*.mov", "*.wmv", "*.flv", "*.webm", "*.m4v",
            ],
            Category::Spreadsheets => &["*.xlsx", "*.xls", "*.csv", "*.ods"],
            Category::Audio => &["*.mp3", "*.wav", "*.flac", "*.aac", "*.m4a", "*.wma", "*.ogg"],
            Category::Archives => &["*.zip", "*.rar", "*.7z", "*.tar", "*.gz"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_category_dir_names() {
        assert_eq!(Category::Documents.dir_name(), "Documents");
        assert_eq!(Category::Images.dir_name(), "Images");
        assert_eq!(Category::Videos.dir_name(), "Videos");
        assert_eq!(Category::Spreadsheets.dir_name(), "Spreadsheets");
        assert_eq!(Category::Audio.dir_name(), "Audio");
        assert_eq!(Category::Archives.dir_name(), "Archives");
    }

    #[test]
    fn test_all_lists_each_category_once() {
        let unique: HashSet<_> = Category::ALL.iter().collect();
        assert_eq!(unique.len(), Category::ALL.len());
    }

    #[test]
    fn test_every_category_has_patterns() {
        for category in Category::ALL {
            assert!(!category.patterns().is_empty(), "{category} has no patterns");
            for pattern in category.patterns() {
                assert!(pattern.starts_with("*."), "unexpected pattern {pattern}");
            }
        }
    }

    #[test]
    fn test_workbooks_belong_to_two_categories() {
        let owners: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| c.patterns().contains(&"*.xlsx"))
            .collect();
        assert_eq!(owners, vec![Category::Documents, Category::Spreadsheets]);
    }

    #[test]
    fn test_display_uses_dir_name() {
        assert_eq!(Category::Audio.to_string(), "Audio");
    }
}
