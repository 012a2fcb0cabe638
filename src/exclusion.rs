//! Folder exclusion rules for traversal.
//!
//! Directories are pruned from a scan when their leaf name contains any of a
//! fixed set of tokens (cloud-sync providers, operating-system folders, build
//! and package caches), or when their full path mentions one of the major
//! cloud-sync providers anywhere.
//!
//! Matching is by case-insensitive substring, not by path component. A folder
//! called `MyOneDriveNotes` or `Inbox` is therefore pruned as well.

use std::path::Path;
use tracing::debug;

/// Cloud-sync provider folders.
pub const CLOUD_FOLDERS: &[&str] = &[
    "OneDrive",
    "OneDrive - Personal",
    "OneDrive - Business",
    "Google Drive",
    "Dropbox",
    "iCloud",
    "SkyDrive",
    "box",
    "MicrosoftEdgeBackups",
];

/// Operating-system folders.
pub const SYSTEM_FOLDERS: &[&str] = &[
    "AppData",
    "RECYCLE.BIN",
    "Windows",
    "ProgramData",
    "Program Files",
    "ProgramFiles(x86)",
    "System32",
    "SysWOW64",
    "Boot",
    "Recovery",
];

/// Development, build and package-manager folders.
pub const BUILD_FOLDERS: &[&str] = &[
    ".git",
    "node_modules",
    ".cache",
    "Temp",
    "tmp",
    ".vscode",
    "__pycache__",
    ".nuget",
    ".m2",
    ".gradle",
    "packages",
    "vendor",
    ".dvc",
];

/// Markers that prune a directory when found anywhere in its full path.
pub const CLOUD_PATH_MARKERS: &[&str] = &["OneDrive", "Google Drive", "Dropbox"];

/// Read-only set of folder exclusion rules.
///
/// Tokens are lowercased once at construction so that every check is a plain
/// substring search.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    folder_tokens: Vec<(String, &'static str)>,
    path_markers: Vec<(String, &'static str)>,
}

impl ExclusionSet {
    /// Builds an exclusion set from explicit leaf-name tokens and full-path markers.
    pub fn new(folder_tokens: &[&'static str], path_markers: &[&'static str]) -> Self {
        let lower = |tokens: &[&'static str]| {
            tokens
                .iter()
                .map(|token| (token.to_lowercase(), *token))
                .collect::<Vec<_>>()
        };
        Self {
            folder_tokens: lower(folder_tokens),
            path_markers: lower(path_markers),
        }
    }

    /// Builds the standard exclusion set used for every collection run.
    pub fn standard() -> Self {
        let folder_tokens: Vec<&'static str> = CLOUD_FOLDERS
            .iter()
            .chain(SYSTEM_FOLDERS)
            .chain(BUILD_FOLDERS)
            .copied()
            .collect();
        Self::new(&folder_tokens, CLOUD_PATH_MARKERS)
    }

    /// Returns true if traversal should not descend into `folder_path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use salvage::exclusion::ExclusionSet;
    /// use std::path::Path;
    ///
    /// let exclusions = ExclusionSet::standard();
    /// assert!(exclusions.should_skip(Path::new("/home/ana/projects/node_modules")));
    /// assert!(exclusions.should_skip(Path::new("/home/ana/Dropbox/taxes")));
    /// assert!(!exclusions.should_skip(Path::new("/home/ana/Documents/taxes")));
    /// ```
    pub fn should_skip(&self, folder_path: &Path) -> bool {
        let skipped = self.matching_rule(folder_path);
        if let Some(rule) = skipped {
            debug!(path = %folder_path.display(), rule, "skipping excluded folder");
        }
        skipped.is_some()
    }

    /// Returns the rule that excludes `folder_path`, if any.
    ///
    /// Leaf-name tokens are checked before full-path markers.
    pub fn matching_rule(&self, folder_path: &Path) -> Option<&'static str> {
        let leaf = folder_path
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        if let Some((_, rule)) = self
            .folder_tokens
            .iter()
            .find(|(token, _)| leaf.contains(token.as_str()))
        {
            return Some(*rule);
        }

        let full_path = folder_path.to_string_lossy().to_lowercase();
        self.path_markers
            .iter()
            .find(|(marker, _)| full_path.contains(marker.as_str()))
            .map(|(_, rule)| *rule)
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_token_excludes_its_own_folder() {
        let exclusions = ExclusionSet::standard();
        for token in CLOUD_FOLDERS.iter().chain(SYSTEM_FOLDERS).chain(BUILD_FOLDERS) {
            let path = Path::new("/data").join(token);
            assert!(exclusions.should_skip(&path), "{token} should be skipped");
        }
    }

    #[test]
    fn test_leaf_match_is_case_insensitive() {
        let exclusions = ExclusionSet::standard();
        assert!(exclusions.should_skip(Path::new("/data/NODE_MODULES")));
        assert!(exclusions.should_skip(Path::new("/data/appdata")));
        assert!(exclusions.should_skip(Path::new("/data/icloud photos")));
    }

    #[test]
    fn test_leaf_match_is_substring_based() {
        let exclusions = ExclusionSet::standard();
        assert!(exclusions.should_skip(Path::new("/data/MyOneDriveNotes")));
        assert_eq!(
            exclusions.matching_rule(Path::new("/data/Inbox")),
            Some("box")
        );
        assert!(exclusions.should_skip(Path::new("/data/project.git")));
    }

    #[test]
    fn test_full_path_markers_skip_nested_folders() {
        let exclusions = ExclusionSet::standard();
        assert!(exclusions.should_skip(Path::new("/home/u/OneDrive/Work/Reports")));
        assert!(exclusions.should_skip(Path::new("/home/u/Google Drive/photos")));
        assert!(exclusions.should_skip(Path::new("/home/u/dropbox/scans")));
        assert_eq!(
            exclusions.matching_rule(Path::new("/home/u/Dropbox/scans")),
            Some("Dropbox")
        );
    }

    #[test]
    fn test_ordinary_folders_are_kept() {
        let exclusions = ExclusionSet::standard();
        assert!(!exclusions.should_skip(Path::new("/home/u/Documents")));
        assert!(!exclusions.should_skip(Path::new("/home/u/Pictures/Holiday 2023")));
        assert!(!exclusions.should_skip(Path::new("/home/u/Music/Jazz")));
        assert_eq!(exclusions.matching_rule(Path::new("/home/u/Desktop")), None);
    }

    #[test]
    fn test_path_without_leaf_only_checks_markers() {
        let exclusions = ExclusionSet::standard();
        assert!(!exclusions.should_skip(Path::new("/")));
    }

    #[test]
    fn test_custom_rules() {
        let exclusions = ExclusionSet::new(&["drafts"], &["archive"]);
        assert!(exclusions.should_skip(Path::new("/a/Old Drafts")));
        assert!(exclusions.should_skip(Path::new("/Archive/2020/letters")));
        assert!(!exclusions.should_skip(Path::new("/a/node_modules")));
    }
}
