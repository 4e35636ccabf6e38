use std::io;
use std::path::PathBuf;

/// Failures surfaced by the review workflow.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// The chosen directory is missing or cannot be listed.
    #[error("directory unavailable: {}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A file move during delete or restore failed.
    #[error("could not {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// No writable location for the staging directory.
    #[error("cannot create staging directory in {}: {source}", root.display())]
    StagingInit {
        root: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Removing the staging directory at session end failed.
    #[error("failed to delete dir {}: {source}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{name} is not in the staging area")]
    NotStaged { name: String },
    #[error("refusing to overwrite existing file {}", path.display())]
    DestinationOccupied { path: PathBuf },
}

impl ReviewError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ReviewError> = std::result::Result<T, E>;
