//! Frame enumeration.
//!
//! A [`FrameSource`] yields the frame names in the order the ramp is laid
//! over them: ascending byte-wise order of the raw names, independent of
//! the order the operating system returns directory entries in.

use std::path::{Path, PathBuf};

use bitramp_common::{BitrampError, BitrampResult};

/// Something that can list frame names.
pub trait FrameSource {
    /// All frame names, sorted ascending.
    fn frame_names(&self) -> BitrampResult<Vec<String>>;
}

/// Frames are the entries of a directory on disk.
///
/// Every entry counts, including subdirectories and hidden files. Names that
/// are not valid UTF-8 have invalid bytes replaced with U+FFFD, so such a
/// printed path no longer names the file on disk, and two distinct raw names
/// may print identically. Sorting happens after the replacement.
#[derive(Debug, Clone)]
pub struct DirectoryListing {
    path: PathBuf,
}

impl DirectoryListing {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrameSource for DirectoryListing {
    fn frame_names(&self) -> BitrampResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.path)
            .map_err(|e| BitrampError::directory_access(&self.path, e))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| BitrampError::directory_access(&self.path, e))?;
            let name = entry.file_name();
            let name = match name.into_string() {
                Ok(name) => name,
                Err(raw) => {
                    let lossy = raw.to_string_lossy().into_owned();
                    tracing::warn!(name = %lossy, "Frame name is not valid UTF-8");
                    lossy
                }
            };
            names.push(name);
        }
        names.sort();

        tracing::debug!(
            path = %self.path.display(),
            count = names.len(),
            "Listed frames directory"
        );
        Ok(names)
    }
}

/// Frames held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticListing {
    names: Vec<String>,
}

impl StaticListing {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl FrameSource for StaticListing {
    fn frame_names(&self) -> BitrampResult<Vec<String>> {
        let mut names = self.names.clone();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_listing_sorts() {
        let listing = StaticListing::new(["c.png", "a.png", "b.png"]);
        assert_eq!(
            listing.frame_names().unwrap(),
            vec!["a.png", "b.png", "c.png"]
        );
    }

    #[test]
    fn test_sort_is_bytewise_not_numeric() {
        let listing = StaticListing::new(["frame10.png", "frame9.png", "Frame1.png"]);
        assert_eq!(
            listing.frame_names().unwrap(),
            vec!["Frame1.png", "frame10.png", "frame9.png"]
        );
    }

    #[test]
    fn test_missing_directory_is_access_error() {
        let listing = DirectoryListing::new("/nonexistent/bitramp/frames");
        match listing.frame_names() {
            Err(BitrampError::DirectoryAccess { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/bitramp/frames"));
            }
            other => panic!("expected DirectoryAccess, got {other:?}"),
        }
    }
}
