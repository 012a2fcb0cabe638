//! Error types shared by the collection engine and the CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting files.
///
/// Only the pre-flight variants halt a run. Per-file variants are folded into
/// the [`CollectionReport`](crate::report::CollectionReport) as failures, and
/// manifest variants are reported as warnings after the copy has finished.
#[derive(Debug, Error)]
pub enum CollectError {
    /// No destination was given on the command line or at the prompt.
    #[error("No destination folder was provided")]
    MissingDestination,

    /// The destination root could not be created.
    #[error("Failed to create destination {}: {source}", path.display())]
    DestinationCreateFailed { path: PathBuf, source: io::Error },

    /// The user's home directory could not be determined.
    #[error("Unable to determine the home directory of the current user")]
    NoHomeDirectory,

    /// A category pattern is not a valid glob.
    #[error("Invalid file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// Reading from the terminal failed.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Failed to create a category directory under the destination.
    #[error("Failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    /// The source path has no file name component.
    #[error("File has no name component: {}", .0.display())]
    MissingFileName(PathBuf),

    /// The source already is the destination file; copying would truncate it.
    #[error("Source and destination are the same file: {}", .0.display())]
    SameFile(PathBuf),

    /// Copying a file into its category directory failed.
    #[error(
        "Failed to copy {} to {}: {source}",
        source_path.display(),
        destination.display()
    )]
    CopyFailed {
        source_path: PathBuf,
        destination: PathBuf,
        source: io::Error,
    },

    /// The run manifest could not be serialized.
    #[error("Failed to serialize run manifest: {0}")]
    ManifestSerialize(#[from] serde_json::Error),

    /// The run manifest could not be written.
    #[error("Failed to write run manifest {}: {source}", path.display())]
    ManifestWriteFailed { path: PathBuf, source: io::Error },
}

/// Result type for collection operations.
pub type CollectResult<T> = Result<T, CollectError>;
