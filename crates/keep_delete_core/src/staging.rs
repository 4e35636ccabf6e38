//! Session-private holding directory for deleted files.
//!
//! Deleting an image moves it here instead of erasing it, so an undo can move
//! it back. The directory and everything left in it is removed by
//! [`StagingArea::dispose`] when the session ends. Should the process die
//! first, the next run sweeps the leftover by its name prefix.

use crate::error::{Result, ReviewError};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    /// Creates a uniquely named staging directory `<prefix><random>` in `root`.
    pub fn init_in(root: impl AsRef<Path>, prefix: &str) -> Result<Self> {
        let root = root.as_ref();
        let dir = tempfile::Builder::new()
            .prefix(prefix)
            .tempdir_in(root)
            .map_err(|source| ReviewError::StagingInit {
                root: root.to_path_buf(),
                source,
            })?;
        tracing::info!("staging area at {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path().join(name).is_file()
    }

    /// Moves `file` into the staging directory under its base name.
    pub fn stage(&self, file: &Path) -> Result<PathBuf> {
        let name = file.file_name().ok_or_else(|| {
            ReviewError::io(
                "stage",
                file,
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;
        let target = self.path().join(name);
        if target.exists() {
            return Err(ReviewError::DestinationOccupied { path: target });
        }
        move_file(file, &target).map_err(|source| ReviewError::io("stage", file, source))?;
        tracing::debug!("staged {} -> {}", file.display(), target.display());
        Ok(target)
    }

    /// Moves the staged file `name` back into `destination`.
    pub fn restore(&self, name: &str, destination: &Path) -> Result<PathBuf> {
        let staged = self.path().join(name);
        if !staged.is_file() {
            return Err(ReviewError::NotStaged {
                name: name.to_string(),
            });
        }
        let target = destination.join(name);
        if target.exists() {
            return Err(ReviewError::DestinationOccupied { path: target });
        }
        move_file(&staged, &target).map_err(|source| ReviewError::io("restore", &staged, source))?;
        tracing::debug!("restored {} -> {}", staged.display(), target.display());
        Ok(target)
    }

    /// Removes the staging directory with everything still in it.
    pub fn dispose(self) -> Result<()> {
        let path = self.path().to_path_buf();
        self.dir
            .close()
            .map_err(|source| ReviewError::Cleanup { path: path.clone(), source })?;
        tracing::info!("removed staging area {}", path.display());
        Ok(())
    }
}

/// Best-effort removal of directories in `root` named `<prefix>...`.
/// Returns how many were removed; failures are logged and skipped.
pub fn sweep_stale(root: impl AsRef<Path>, prefix: &str) -> usize {
    let root = root.as_ref();
    let mut removed = 0;
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("stale staging sweep in {}: {e}", root.display());
                continue;
            }
        };
        let matches_prefix = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with(prefix));
        if !matches_prefix || !entry.file_type().is_dir() {
            continue;
        }
        match fs::remove_dir_all(entry.path()) {
            Ok(()) => removed += 1,
            Err(e) => tracing::debug!("leaving {}: {e}", entry.path().display()),
        }
    }
    if removed > 0 {
        tracing::info!("swept {removed} stale staging directories");
    }
    removed
}

/// Rename, falling back to copy and remove across filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            copy_then_remove(from, to, |src, dst| fs::copy(src, dst))
        }
        Err(e) => Err(e),
    }
}

/// Copies `from` to `to` with its modification time, then removes `from`.
/// Any failure removes the partial `to` and leaves `from` in place.
fn copy_then_remove<C>(from: &Path, to: &Path, copy: C) -> io::Result<()>
where
    C: FnOnce(&Path, &Path) -> io::Result<u64>,
{
    let copied = copy(from, to).and_then(|_| {
        let modified = fs::metadata(from)?.modified()?;
        OpenOptions::new().write(true).open(to)?.set_modified(modified)
    });
    if let Err(e) = copied.and_then(|()| fs::remove_file(from)) {
        if let Err(cleanup) = fs::remove_file(to)
            && cleanup.kind() != io::ErrorKind::NotFound
        {
            tracing::warn!("could not remove partial copy {}: {cleanup}", to.display());
        }
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::fs::{self, File};
    use std::time::{Duration, SystemTime};
    use tempfile::tempdir;

    #[test]
    fn init_uses_prefix_inside_root() -> Result<()> {
        let root = tempdir()?;
        let staging = StagingArea::init_in(root.path(), "keep_delete_")?;
        assert!(staging.path().is_dir());
        assert_eq!(staging.path().parent(), Some(root.path()));
        let name = staging.path().file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("keep_delete_"));
        assert!(name.len() > "keep_delete_".len());
        Ok(())
    }

    #[test]
    fn init_fails_without_root() -> Result<()> {
        let root = tempdir()?;
        let err = StagingArea::init_in(root.path().join("missing"), "keep_delete_").unwrap_err();
        assert!(matches!(err, ReviewError::StagingInit { .. }));
        Ok(())
    }

    #[test]
    fn stage_and_restore_keep_content() -> Result<()> {
        let root = tempdir()?;
        let work = tempdir()?;
        let file = work.path().join("b.png");
        fs::write(&file, b"pixels")?;
        let staging = StagingArea::init_in(root.path(), "keep_delete_")?;

        let staged = staging.stage(&file)?;
        assert!(!file.exists());
        assert!(staging.contains("b.png"));
        assert_eq!(staged, staging.path().join("b.png"));

        let back = staging.restore("b.png", work.path())?;
        assert_eq!(back, file);
        assert_eq!(fs::read(&file)?, b"pixels");
        assert!(!staging.contains("b.png"));
        Ok(())
    }

    #[test]
    fn stage_missing_source_is_io_error() -> Result<()> {
        let root = tempdir()?;
        let work = tempdir()?;
        let staging = StagingArea::init_in(root.path(), "keep_delete_")?;
        let err = staging.stage(&work.path().join("nope.jpg")).unwrap_err();
        assert!(matches!(err, ReviewError::Io { op: "stage", .. }));
        Ok(())
    }

    #[test]
    fn restore_absent_file_is_not_staged() -> Result<()> {
        let root = tempdir()?;
        let work = tempdir()?;
        let staging = StagingArea::init_in(root.path(), "keep_delete_")?;
        let err = staging.restore("ghost.jpg", work.path()).unwrap_err();
        assert!(matches!(err, ReviewError::NotStaged { .. }));
        Ok(())
    }

    #[test]
    fn restore_never_overwrites() -> Result<()> {
        let root = tempdir()?;
        let work = tempdir()?;
        let file = work.path().join("a.jpg");
        fs::write(&file, b"old")?;
        let staging = StagingArea::init_in(root.path(), "keep_delete_")?;
        staging.stage(&file)?;
        fs::write(&file, b"new")?;

        let err = staging.restore("a.jpg", work.path()).unwrap_err();
        assert!(matches!(err, ReviewError::DestinationOccupied { .. }));
        assert_eq!(fs::read(&file)?, b"new");
        assert!(staging.contains("a.jpg"));
        Ok(())
    }

    #[test]
    fn dispose_removes_directory_and_contents() -> Result<()> {
        let root = tempdir()?;
        let work = tempdir()?;
        let file = work.path().join("a.jpg");
        File::create(&file)?;
        let staging = StagingArea::init_in(root.path(), "keep_delete_")?;
        staging.stage(&file)?;
        let path = staging.path().to_path_buf();

        staging.dispose()?;
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn sweep_removes_only_prefixed_directories() -> Result<()> {
        let root = tempdir()?;
        let stale = root.path().join("keep_delete_abc123");
        fs::create_dir(&stale)?;
        File::create(stale.join("left.jpg"))?;
        fs::create_dir(root.path().join("unrelated"))?;
        File::create(root.path().join("keep_delete_file"))?;

        assert_eq!(sweep_stale(root.path(), "keep_delete_"), 1);
        assert!(!stale.exists());
        assert!(root.path().join("unrelated").is_dir());
        assert!(root.path().join("keep_delete_file").is_file());
        Ok(())
    }

    #[test]
    fn copy_fallback_keeps_content_and_mtime() -> Result<()> {
        let work = tempdir()?;
        let from = work.path().join("photo.jpg");
        let to = work.path().join("moved.jpg");
        fs::write(&from, b"exif and pixels")?;
        let taken = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
        File::options().write(true).open(&from)?.set_modified(taken)?;

        copy_then_remove(&from, &to, |src, dst| fs::copy(src, dst))?;
        assert!(!from.exists());
        assert_eq!(fs::read(&to)?, b"exif and pixels");
        assert_eq!(fs::metadata(&to)?.modified()?, taken);
        Ok(())
    }

    #[test]
    fn failed_copy_leaves_no_partial_file() -> Result<()> {
        let work = tempdir()?;
        let from = work.path().join("big.jpg");
        let to = work.path().join("staged.jpg");
        fs::write(&from, vec![7u8; 4096])?;

        let disk_full = |_: &Path, dest: &Path| -> io::Result<u64> {
            fs::write(dest, [7u8; 1024])?;
            Err(io::Error::other("No space left on device"))
        };
        let err = copy_then_remove(&from, &to, disk_full).unwrap_err();
        assert_eq!(err.to_string(), "No space left on device");
        assert!(!to.exists());
        assert_eq!(fs::read(&from)?.len(), 4096);

        // A retry is not blocked by leftovers.
        copy_then_remove(&from, &to, |src, dst| fs::copy(src, dst))?;
        assert_eq!(fs::read(&to)?.len(), 4096);
        Ok(())
    }

    #[test]
    fn sweep_of_missing_root_is_harmless() -> Result<()> {
        let root = tempdir()?;
        assert_eq!(sweep_stale(root.path().join("missing"), "keep_delete_"), 0);
        Ok(())
    }
}
