use std::path::PathBuf;

/// A single item produced by a [`Source`](crate::traits::Source) when listing
/// a collection.
///
/// Intentionally generic — not tied to a real filesystem. `name`, `kind` and
/// `size` are neutral enough to represent directory entries, archive members,
/// or the records of any custom `Source`. Ranking only ever looks at these
/// three fields; `path` is carried through for the caller's presentation.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Full path to the entry.
    pub path: PathBuf,

    /// The entry's name — the string that gets normalized and compared.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,

    /// Size in bytes. Reported verbatim in the ranked output; never
    /// influences distances.
    pub size: u64,
}

impl Entry {
    /// Whether this entry is a directory. The pair ranker's extension policy
    /// branches on this.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// The kind of a listed entry.
///
/// Kept generic so simpair can represent non-filesystem sources cleanly.
/// Filesystem sources map `DirEntry` file types to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}
