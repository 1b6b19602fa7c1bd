use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::{Entry, EntryKind};
use crate::error::SimpairError;

/// A provider of entries to rank.
///
/// Implement this to make simpair compare anything listable — directories,
/// archives, in-memory collections, database rows, or any other flat
/// collection of named items.
///
/// # Object Safety
///
/// `Source` is object-safe. The builder stores sources as `Box<dyn Source>`.
///
/// # Error Handling
///
/// Listing is all-or-nothing: the engine needs the complete collection
/// before it can enumerate pairs, so any failure to produce it is fatal to
/// the run. Return `Err` rather than a partial list.
///
/// # Ordering
///
/// Any iteration order is acceptable. Pairs with equal distances are
/// reported in the order the listing implies, so a deterministic source
/// yields deterministic output.
///
/// # Example
///
/// ```rust
/// use simpair::{Source, Entry, EntryKind, SimpairError};
///
/// struct NameSource(Vec<&'static str>);
///
/// impl Source for NameSource {
///     fn list(&self) -> Result<Vec<Entry>, SimpairError> {
///         Ok(self.0.iter().map(|name| Entry {
///             path: name.into(),
///             name: name.to_string(),
///             kind: EntryKind::File,
///             size: 0,
///         }).collect())
///     }
/// }
/// ```
pub trait Source {
    /// Produce the complete collection of entries to compare.
    fn list(&self) -> Result<Vec<Entry>, SimpairError>;
}

// ---------------------------------------------------------------------------
// Built-in source (simpair ships this as a convenience)
// ---------------------------------------------------------------------------

/// Lists the immediate children of one directory — flat, non-recursive.
///
/// Entry names that are not valid Unicode are converted lossily; the
/// original bytes are still available through [`Entry::path`].
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source over `root`. The path is not touched until
    /// [`list`](Source::list) runs.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Source for DirSource {
    fn list(&self) -> Result<Vec<Entry>, SimpairError> {
        if self.root.exists() && !self.root.is_dir() {
            return Err(SimpairError::NotADirectory(self.root.clone()));
        }

        let mut entries = Vec::new();
        for dent in fs::read_dir(&self.root).map_err(|e| map_io_error(&self.root, e))? {
            let dent = dent.map_err(|e| map_io_error(&self.root, e))?;
            let meta = dent.metadata().map_err(|e| map_io_error(&dent.path(), e))?;

            let kind = if meta.is_dir() {
                EntryKind::Dir
            } else if meta.file_type().is_symlink() {
                EntryKind::Symlink
            } else if meta.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };

            entries.push(Entry {
                path: dent.path(),
                name: dent.file_name().to_string_lossy().into_owned(),
                kind,
                size: meta.len(),
            });
        }

        Ok(entries)
    }
}

fn map_io_error(path: &Path, err: std::io::Error) -> SimpairError {
    match err.kind() {
        std::io::ErrorKind::NotFound => SimpairError::NotFound(path.to_path_buf()),
        std::io::ErrorKind::PermissionDenied => SimpairError::PermissionDenied(path.to_path_buf()),
        _ => SimpairError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}
