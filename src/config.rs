//! Run settings.
//!
//! There is no configuration file. A [`CollectConfig`] is assembled from the
//! command line by `main`, with the search roots resolved from the current
//! user's well-known folders. Log verbosity is read from `RUST_LOG`.

use crate::category::Category;
use crate::error::CollectResult;
use crate::roots::SearchRoot;
use crate::scanner::MAX_SCAN_DEPTH;
use std::path::PathBuf;

/// Everything a collection run needs to know before it starts.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Destination root; prompted for when `None`.
    pub destination: Option<PathBuf>,
    /// Folders to scan, in order.
    pub search_roots: Vec<SearchRoot>,
    /// Categories to collect, in order.
    pub categories: Vec<Category>,
    /// Deepest directory level visited below each search root.
    pub max_depth: usize,
    /// Skip the confirmation prompt.
    pub assume_yes: bool,
    /// Scan and summarize only.
    pub dry_run: bool,
    /// Write `collection_manifest.json` at the destination after copying.
    pub write_manifest: bool,
    /// Reserved; accepted for compatibility and currently without effect.
    pub skip_drive_check: bool,
    /// Reserved; no verification is performed either way.
    pub skip_verification: bool,
}

impl CollectConfig {
    /// Creates a configuration that scans `search_roots` for every category.
    pub fn new(search_roots: Vec<SearchRoot>) -> Self {
        Self {
            destination: None,
            search_roots,
            categories: Category::ALL.to_vec(),
            max_depth: MAX_SCAN_DEPTH,
            assume_yes: false,
            dry_run: false,
            write_manifest: true,
            skip_drive_check: false,
            skip_verification: false,
        }
    }

    /// Creates a configuration for the current user's standard folders.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn for_current_user() -> CollectResult<Self> {
        Ok(Self::new(SearchRoot::resolve_standard()?))
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roots::RootKind;

    #[test]
    fn test_new_uses_defaults() {
        let config = CollectConfig::new(vec![SearchRoot::new(RootKind::Desktop, "/d")]);
        assert_eq!(config.categories, Category::ALL.to_vec());
        assert_eq!(config.max_depth, 3);
        assert!(config.write_manifest);
        assert!(!config.assume_yes);
        assert!(!config.dry_run);
        assert!(config.destination.is_none());
    }

    #[test]
    fn test_with_destination() {
        let config = CollectConfig::new(Vec::new()).with_destination("/backup");
        assert_eq!(config.destination, Some(PathBuf::from("/backup")));
    }
}
