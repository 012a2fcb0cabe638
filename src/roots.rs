//! Well-known user folders scanned during a collection run.

use crate::error::{CollectError, CollectResult};
use directories::UserDirs;
use std::fmt;
use std::path::{Path, PathBuf};

/// The kind of well-known folder a search root stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootKind {
    Documents,
    Pictures,
    Videos,
    Desktop,
    Downloads,
}

impl RootKind {
    /// Every root kind, in scan order.
    pub const ALL: [RootKind; 5] = [
        RootKind::Documents,
        RootKind::Pictures,
        RootKind::Videos,
        RootKind::Desktop,
        RootKind::Downloads,
    ];

    /// Folder name under the home directory used when the platform reports none.
    pub fn fallback_dir_name(&self) -> &'static str {
        match self {
            RootKind::Documents => "Documents",
            RootKind::Pictures => "Pictures",
            RootKind::Videos => "Videos",
            RootKind::Desktop => "Desktop",
            RootKind::Downloads => "Downloads",
        }
    }
}

impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fallback_dir_name())
    }
}

/// A folder scanned for files, fixed for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    pub kind: RootKind,
    pub path: PathBuf,
}

impl SearchRoot {
    pub fn new(kind: RootKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Resolves the five standard search roots for the current user.
    ///
    /// Downloads is always `<home>/Downloads`; the others come from the
    /// platform's user folders.
    ///
    /// # Errors
    ///
    /// Returns `CollectError::NoHomeDirectory` if no home directory is known.
    pub fn resolve_standard() -> CollectResult<Vec<SearchRoot>> {
        let user_dirs = UserDirs::new().ok_or(CollectError::NoHomeDirectory)?;
        let home = user_dirs.home_dir();

        Ok(RootKind::ALL
            .into_iter()
            .map(|kind| {
                let platform_dir = match kind {
                    RootKind::Documents => user_dirs.document_dir(),
                    RootKind::Pictures => user_dirs.picture_dir(),
                    RootKind::Videos => user_dirs.video_dir(),
                    RootKind::Desktop => user_dirs.desktop_dir(),
                    RootKind::Downloads => None,
                };
                Self::new(kind, resolve_dir(home, platform_dir, kind))
            })
            .collect())
    }
}

fn resolve_dir(home: &Path, platform_dir: Option<&Path>, kind: RootKind) -> PathBuf {
    platform_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| home.join(kind.fallback_dir_name()))
}
