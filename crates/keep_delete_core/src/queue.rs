//! Pending images, consumed from the front.

use crate::error::{Result, ReviewError};
use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Extensions accepted by [`is_supported_image`], compared against the last
/// four characters of the file name.
const ALLOWED_SUFFIXES: [&str; 2] = [".jpg", ".png"];

/// One image, identified by its file name inside the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// FIFO of images still awaiting a decision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageQueue {
    pending: VecDeque<ImageRef>,
}

impl ImageQueue {
    /// Lists the images of `dir`, or an empty queue when it cannot be read.
    pub fn discover(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        match Self::scan(dir) {
            Ok(queue) => queue,
            Err(err) => {
                tracing::warn!("{err}");
                Self::default()
            }
        }
    }

    /// Lists immediate children of `dir` whose name ends in `.jpg` or `.png`
    /// (any case). Order follows the directory listing.
    pub fn scan(dir: impl AsRef<Path>) -> Result<Self> {
        let root = dir.as_ref();
        if !root.is_dir() {
            return Err(ReviewError::DirectoryUnavailable {
                path: root.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "not a directory"),
            });
        }

        let mut pending = VecDeque::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) if e.depth() == 0 => {
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("directory walk failed"));
                    return Err(ReviewError::DirectoryUnavailable {
                        path: root.to_path_buf(),
                        source,
                    });
                }
                Err(e) => {
                    tracing::warn!("walkdir error: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                tracing::warn!("skipping image with non UTF-8 name: {}", path.display());
                continue;
            };
            if is_supported_image(name) {
                pending.push_back(ImageRef::new(name));
            }
        }

        tracing::debug!("discovered {} images in {}", pending.len(), root.display());
        Ok(Self { pending })
    }

    pub fn pop_front(&mut self) -> Option<ImageRef> {
        self.pending.pop_front()
    }

    pub fn push_front(&mut self, image: ImageRef) {
        self.pending.push_front(image);
    }

    pub fn front(&self) -> Option<&ImageRef> {
        self.pending.front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.pending.iter()
    }
}

impl FromIterator<ImageRef> for ImageQueue {
    fn from_iter<I: IntoIterator<Item = ImageRef>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

/// Matches on the last four bytes only, so `.jpeg` and names shorter than
/// four characters never qualify.
pub fn is_supported_image(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 4 {
        return false;
    }
    let tail = &bytes[bytes.len() - 4..];
    ALLOWED_SUFFIXES
        .iter()
        .any(|suffix| tail.eq_ignore_ascii_case(suffix.as_bytes()))
}
