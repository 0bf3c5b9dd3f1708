//! State stores backed by concrete databases.
//!
//! Every backend implements [`StateStore`](crate::StateStore) over a single two-column table (or
//! its equivalent) mapping byte-string keys to byte-string values, and is opened from a
//! [`Location`] through [`DatabaseBackend`].

mod arc;
#[cfg(feature = "duckdb")]
mod duckdb;
mod memory;
#[cfg(feature = "rocksdb")]
mod rocksdb;
#[cfg(feature = "sqlite")]
mod sqlite;

mod sealed {
    pub trait Sealed {}
    impl<T: Sealed> Sealed for std::sync::Arc<T> {}
    impl Sealed for super::memory::Memory {}
    #[cfg(feature = "duckdb")]
    impl Sealed for super::duckdb::DuckDb {}
    #[cfg(feature = "rocksdb")]
    impl Sealed for super::rocksdb::RocksDb {}
    #[cfg(feature = "sqlite")]
    impl Sealed for super::sqlite::Sqlite {}
}

#[cfg(feature = "duckdb")]
pub use self::duckdb::DuckDb;
pub use self::memory::{Memory, MemoryError};
#[cfg(feature = "rocksdb")]
pub use self::rocksdb::RocksDb;
#[cfg(feature = "sqlite")]
pub use self::sqlite::Sqlite;
use crate::Location;

/// A state store that can be opened at a [`Location`].
pub trait DatabaseBackend: sealed::Sealed + Sized {
    /// The error returned when the store cannot be opened.
    type Error;

    /// Open the store at `location`, creating and initializing it if it does not yet exist.
    fn at_location(location: Location) -> Result<Self, Self::Error>;

    /// Where the store keeps its records.
    fn location(&self) -> &Location;

    /// Open an in-memory store.
    #[inline]
    fn in_memory() -> Result<Self, Self::Error> {
        Self::at_location(Location::InMemory)
    }

    /// Open a store at the given path on disk.
    #[inline]
    fn at_path<P>(path: P) -> Result<Self, Self::Error>
    where
        P: Into<std::path::PathBuf>,
    {
        Self::at_location(Location::OnDisk { path: path.into() })
    }
}
