//! Depth-bounded directory scanning.
//!
//! The scanner walks a search root with an explicit work stack, collecting
//! files whose names match a single glob pattern. Subdirectories rejected by
//! the [`ExclusionSet`] are never entered, and directories that cannot be
//! listed are treated as empty.

use crate::error::{CollectError, CollectResult};
use crate::exclusion::ExclusionSet;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Deepest directory level visited below a search root.
pub const MAX_SCAN_DEPTH: usize = 3;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled filename pattern such as `*.pdf`.
///
/// Patterns are matched against a file's base name only, ignoring case.
#[derive(Debug, Clone)]
pub struct FilePattern {
    raw: String,
    pattern: Pattern,
}

impl FilePattern {
    /// Compiles a glob pattern.
    ///
    /// # Errors
    ///
    /// Returns `CollectError::InvalidPattern` if the glob is malformed.
    pub fn new(raw: &str) -> CollectResult<Self> {
        let pattern = Pattern::new(raw).map_err(|source| CollectError::InvalidPattern {
            pattern: raw.to_string(),
            source,
        })?;
        Ok(Self {
            raw: raw.to_string(),
            pattern,
        })
    }

    /// Returns the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns true if `file_name` matches this pattern.
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches_with(file_name, MATCH_OPTIONS)
    }
}

/// A file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Full path of the file.
    pub path: PathBuf,
    /// Size in bytes at the time of the scan.
    pub size: u64,
}

/// Walks directory trees up to a fixed depth, honoring folder exclusions.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    exclusions: &'a ExclusionSet,
    max_depth: usize,
    skipped_dirs: Vec<PathBuf>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner limited to [`MAX_SCAN_DEPTH`].
    pub fn new(exclusions: &'a ExclusionSet) -> Self {
        Self {
            exclusions,
            max_depth: MAX_SCAN_DEPTH,
            skipped_dirs: Vec::new(),
        }
    }

    /// Overrides the depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Never descends into `dir`, e.g. the destination of a run.
    ///
    /// The directory is matched both as given and canonicalized, so a
    /// destination that does not exist yet is still recognized once created.
    pub fn skipping(mut self, dir: &Path) -> Self {
        if let Ok(canonical) = fs::canonicalize(dir) {
            self.skipped_dirs.push(canonical);
        }
        self.skipped_dirs.push(dir.to_path_buf());
        self
    }

    /// Returns the depth limit of this scanner.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns every file below `root` matching `pattern`.
    ///
    /// The root itself is depth 0. A missing or unreadable root yields an
    /// empty result. Ordering is unspecified.
    pub fn scan(&self, root: &Path, pattern: &FilePattern) -> Vec<ScannedFile> {
        self.scan_from_depth(root, pattern, 0)
    }

    /// Scans `root` as if it were already `depth` levels below a search root.
    ///
    /// Returns nothing when `depth` exceeds the depth limit.
    pub fn scan_from_depth(
        &self,
        root: &Path,
        pattern: &FilePattern,
        depth: usize,
    ) -> Vec<ScannedFile> {
        let mut found = Vec::new();
        if depth > self.max_depth {
            return found;
        }

        let mut pending = vec![(root.to_path_buf(), depth)];
        while let Some((dir, level)) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!(path = %dir.display(), error = %e, "cannot list directory");
                    continue;
                }
            };

            for entry in entries.flatten() {
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                let path = entry.path();

                if file_type.is_dir() {
                    if level < self.max_depth
                        && !self.exclusions.should_skip(&path)
                        && !self.is_skipped_dir(&path)
                    {
                        pending.push((path, level + 1));
                    }
                    continue;
                }

                let name = entry.file_name();
                if !pattern.matches(&name.to_string_lossy()) {
                    continue;
                }

                // Symlinks are followed for files only, never for directories.
                let Ok(metadata) = fs::metadata(&path) else {
                    continue;
                };
                if metadata.is_file() {
                    found.push(ScannedFile {
                        path,
                        size: metadata.len(),
                    });
                }
            }
        }

        found
    }

    fn is_skipped_dir(&self, dir: &Path) -> bool {
        if self.skipped_dirs.is_empty() {
            return false;
        }
        if self.skipped_dirs.iter().any(|skipped| skipped == dir) {
            debug!(path = %dir.display(), "skipping destination folder");
            return true;
        }
        let skipped = fs::canonicalize(dir)
            .map(|canonical| self.skipped_dirs.contains(&canonical))
            .unwrap_or(false);
        if skipped {
            debug!(path = %dir.display(), "skipping destination folder");
        }
        skipped
    }
}
