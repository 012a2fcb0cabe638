//! Copying scanned files into category folders.
//!
//! Files are copied (never moved) into `<destination>/<category>/`, keeping
//! their base name. An existing file with the same name is overwritten, so two
//! sources that share a name leave only the last one copied. Failures are
//! recorded per file and never stop a batch.
use crate::category::Category;
use crate::error::{CollectError, CollectResult};
use crate::report::{CollectionReport, CopyRecord, FailureRecord};
use crate::scanner::{FilePattern, ScannedFile, Scanner};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Copies the files a [`Scanner`] finds into a categorized destination tree.
pub struct FileCollector<'a> {
    scanner: &'a Scanner<'a>,
}

impl<'a> FileCollector<'a> {
    pub fn new(scanner: &'a Scanner<'a>) -> Self {
        Self { scanner }
    }

    /// Scans `source_root` for `pattern` and copies every match into
    /// `<dest_root>/<category>/`.
    ///
    /// Returns the number of files copied by this call. A missing
    /// `source_root` copies nothing and leaves `report` untouched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use salvage::category::Category;
    /// use salvage::copier::FileCollector;
    /// use salvage::exclusion::ExclusionSet;
    /// use salvage::report::CollectionReport;
    /// use salvage::scanner::{FilePattern, Scanner};
    /// use std::path::Path;
    ///
    /// let exclusions = ExclusionSet::standard();
    /// let scanner = Scanner::new(&exclusions);
    /// let collector = FileCollector::new(&scanner);
    /// let mut report = CollectionReport::new();
    /// let pattern = FilePattern::new("*.pdf").unwrap();
    ///
    /// let copied = collector.copy_matching(
    ///     Path::new("/home/ana/Documents"),
    ///     Path::new("/media/backup"),
    ///     &pattern,
    ///     Category::Documents,
    ///     &mut report,
    /// );
    /// println!("Copied {} files", copied);
    /// ```
    pub fn copy_matching(
        &self,
        source_root: &Path,
        dest_root: &Path,
        pattern: &FilePattern,
        category: Category,
        report: &mut CollectionReport,
    ) -> usize {
        if !source_root.exists() {
            return 0;
        }
        let files = self.scanner.scan(source_root, pattern);
        Self::copy_scanned(&files, dest_root, category, report)
    }

    /// Copies already-scanned files into `<dest_root>/<category>/`.
    ///
    /// Each success appends a [`CopyRecord`] and each error a
    /// [`FailureRecord`] to `report`. Returns the number of successes.
    pub fn copy_scanned(
        files: &[ScannedFile],
        dest_root: &Path,
        category: Category,
        report: &mut CollectionReport,
    ) -> usize {
        let mut copied = 0;
        for file in files {
            match Self::copy_to_category(&file.path, dest_root, category) {
                Ok(record) => {
                    report.record_copy(record);
                    copied += 1;
                }
                Err(e) => {
                    warn!(source = %file.path.display(), %category, error = %e, "copy failed");
                    report.record_failure(FailureRecord {
                        source: file.path.clone(),
                        category,
                        reason: e.to_string(),
                    });
                }
            }
        }
        copied
    }

    /// Copies one file into `<dest_root>/<category>/`, creating the folder if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the category folder cannot be created, the source
    /// has no file name, the source already is the destination file, or the
    /// copy itself fails. A failed copy may leave a partial file at the
    /// destination.
    pub fn copy_to_category(
        source: &Path,
        dest_root: &Path,
        category: Category,
    ) -> CollectResult<CopyRecord> {
        let category_path = dest_root.join(category.dir_name());
        fs::create_dir_all(&category_path).map_err(|e| {
            CollectError::DirectoryCreationFailed {
                path: category_path.clone(),
                source: e,
            }
        })?;

        let file_name = source
            .file_name()
            .ok_or_else(|| CollectError::MissingFileName(source.to_path_buf()))?;
        let destination = category_path.join(file_name);

        if is_same_file(source, &destination) {
            return Err(CollectError::SameFile(destination));
        }

        let size = fs::copy(source, &destination).map_err(|e| CollectError::CopyFailed {
            source_path: source.to_path_buf(),
            destination: destination.clone(),
            source: e,
        })?;

        Ok(CopyRecord {
            source: source.to_path_buf(),
            destination,
            size,
            category,
        })
    }
}

/// `fs::copy` truncates its target before reading the source, so copying a
/// file onto itself empties it.
fn is_same_file(source: &Path, destination: &Path) -> bool {
    match (fs::canonicalize(source), fs::canonicalize(destination)) {
        (Ok(source), Ok(destination)) => source == destination,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclusion::ExclusionSet;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    #[test]
    fn test_copy_to_category_creates_directory() {
        let source_dir = TempDir::new().expect("Failed to create temp directory");
        let dest_dir = TempDir::new().expect("Failed to create temp directory");
        let source = write(source_dir.path(), "notes.txt", b"hello");

        let record = FileCollector::copy_to_category(&source, dest_dir.path(), Category::Documents)
            .expect("Failed to copy file");

        let expected = dest_dir.path().join("Documents").join("notes.txt");
        assert_eq!(record.destination, expected);
        assert_eq!(record.size, 5);
        assert_eq!(record.category, Category::Documents);
        assert_eq!(fs::read(&expected).unwrap(), b"hello");
        assert!(source.exists(), "source must be left in place");
    }

    #[test]
    fn test_copy_to_category_overwrites_existing_file() {
        let source_dir = TempDir::new().expect("Failed to create temp directory");
        let dest_dir = TempDir::new().expect("Failed to create temp directory");
        let source = write(source_dir.path(), "song.mp3", b"new");
        write(dest_dir.path(), "Audio/song.mp3", b"old contents");

        FileCollector::copy_to_category(&source, dest_dir.path(), Category::Audio)
            .expect("Failed to copy file");

        assert_eq!(
            fs::read(dest_dir.path().join("Audio/song.mp3")).unwrap(),
            b"new"
        );
    }

    #[test]
    fn test_copy_to_category_missing_source_fails() {
        let dest_dir = TempDir::new().expect("Failed to create temp directory");
        let result = FileCollector::copy_to_category(
            &dest_dir.path().join("gone.pdf"),
            dest_dir.path(),
            Category::Documents,
        );
        assert!(matches!(result, Err(CollectError::CopyFailed { .. })));
    }

    #[test]
    fn test_copy_onto_itself_fails_and_keeps_content() {
        let dest_dir = TempDir::new().expect("Failed to create temp directory");
        let earlier = write(dest_dir.path(), "Documents/report.pdf", b"0123456789");

        let mut report = CollectionReport::new();
        let files = vec![ScannedFile {
            path: earlier.clone(),
            size: 10,
        }];
        let copied =
            FileCollector::copy_scanned(&files, dest_dir.path(), Category::Documents, &mut report);

        assert_eq!(copied, 0);
        assert_eq!(report.copied_count(), 0);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(fs::read(&earlier).unwrap(), b"0123456789");

        let result = FileCollector::copy_to_category(&earlier, dest_dir.path(), Category::Documents);
        assert!(matches!(result, Err(CollectError::SameFile(_))));
    }

    #[test]
    fn test_copy_scanned_records_failures_and_continues() {
        let source_dir = TempDir::new().expect("Failed to create temp directory");
        let dest_dir = TempDir::new().expect("Failed to create temp directory");
        let present = write(source_dir.path(), "present.pdf", b"data");
        let files = vec![
            ScannedFile {
                path: source_dir.path().join("vanished.pdf"),
                size: 3,
            },
            ScannedFile {
                path: present,
                size: 4,
            },
        ];

        let mut report = CollectionReport::new();
        let copied =
            FileCollector::copy_scanned(&files, dest_dir.path(), Category::Documents, &mut report);

        assert_eq!(copied, 1);
        assert_eq!(report.copied_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!(report.failures()[0].source.ends_with("vanished.pdf"));
        assert!(dest_dir.path().join("Documents/present.pdf").exists());
    }

    #[test]
    fn test_copy_matching_missing_root_touches_nothing() {
        let dest_dir = TempDir::new().expect("Failed to create temp directory");
        let exclusions = ExclusionSet::standard();
        let scanner = Scanner::new(&exclusions);
        let collector = FileCollector::new(&scanner);
        let mut report = CollectionReport::new();

        let copied = collector.copy_matching(
            &dest_dir.path().join("no-such-root"),
            dest_dir.path(),
            &FilePattern::new("*.pdf").unwrap(),
            Category::Documents,
            &mut report,
        );

        assert_eq!(copied, 0);
        assert_eq!(report.copied_count(), 0);
        assert_eq!(report.failed_count(), 0);
        assert!(!dest_dir.path().join("Documents").exists());
    }
}
