use std::path::PathBuf;

/// Where a state store keeps its records.
#[non_exhaustive] // future-proofing for options like network storage
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// Records are held in memory and lost when the store is dropped.
    InMemory,
    /// Records are persisted on disk.
    OnDisk {
        /// The path to the store. This is permitted to be a path to a network file system, if
        /// desired.
        path: PathBuf,
    },
}

impl<T> From<T> for Location
where
    T: Into<PathBuf>,
{
    fn from(path: T) -> Self {
        Self::OnDisk { path: path.into() }
    }
}
