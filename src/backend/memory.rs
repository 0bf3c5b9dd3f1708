use crate::backend::DatabaseBackend;
use crate::{Location, StateStore};
use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

static IN_MEMORY: Location = Location::InMemory;

/// A state store held entirely in memory.
///
/// Records are lost when the store is dropped. Only [`Location::InMemory`] is accepted.
#[derive(Debug, Default)]
pub struct Memory {
    records: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

/// The memory backend was asked to open an on-disk location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryError {
    location: Location,
}

impl std::error::Error for MemoryError {}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Location::OnDisk { path } => write!(
                f,
                "the memory backend cannot open an on-disk store at {}",
                path.display()
            ),
            Location::InMemory => f.write_str("the memory backend cannot open this location"),
        }
    }
}

impl Memory {
    /// An empty store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of records held.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no record has been written.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DatabaseBackend for Memory {
    type Error = MemoryError;

    fn at_location(location: Location) -> Result<Self, Self::Error> {
        match location {
            Location::InMemory => Ok(Self::new()),
            location => Err(MemoryError { location }),
        }
    }

    fn location(&self) -> &Location {
        &IN_MEMORY
    }
}

impl StateStore for Memory {
    type Error = MemoryError;

    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error> {
        let _previous = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(self
            .records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }
}
