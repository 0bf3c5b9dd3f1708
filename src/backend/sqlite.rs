use crate::backend::DatabaseBackend;
use crate::tracing_shim::debug;
use crate::{Location, StateStore};
use rusqlite::{Connection, OptionalExtension as _};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A backend utilizing SQLite.
///
/// A single connection is held for the lifetime of the store, so an in-memory store keeps its
/// records across calls.
#[derive(Debug)]
pub struct Sqlite {
    location: Location,
    connection: Mutex<Connection>,
}

impl Sqlite {
    fn connection(&self) -> MutexGuard<'_, Connection> {
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DatabaseBackend for Sqlite {
    type Error = rusqlite::Error;

    fn at_location(location: Location) -> Result<Self, Self::Error> {
        let connection = match &location {
            Location::InMemory => Connection::open_in_memory(),
            Location::OnDisk { path } => Connection::open(path),
        }?;
        let _res = connection.execute(
            "CREATE TABLE IF NOT EXISTS state (key BLOB PRIMARY KEY, value BLOB NOT NULL)",
            [],
        )?;
        debug!(?location, "opened SQLite state store");

        Ok(Self {
            location,
            connection: Mutex::new(connection),
        })
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

impl StateStore for Sqlite {
    type Error = rusqlite::Error;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), name = "sqlite_write"))]
    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error> {
        let _rows = self.connection().execute(
            "REPLACE INTO state (key, value) VALUES (?1, ?2)",
            (key, value),
        )?;
        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), name = "sqlite_read"))]
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        self.connection()
            .query_row("SELECT value FROM state WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
    }
}
