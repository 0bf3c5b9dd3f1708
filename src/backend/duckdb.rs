use crate::backend::DatabaseBackend;
use crate::tracing_shim::debug;
use crate::{Location, StateStore};
use duckdb::{params, Connection, OptionalExt as _};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A backend utilizing DuckDB.
#[derive(Debug)]
pub struct DuckDb {
    location: Location,
    connection: Mutex<Connection>,
}

impl DuckDb {
    fn connection(&self) -> MutexGuard<'_, Connection> {
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl DatabaseBackend for DuckDb {
    type Error = duckdb::Error;

    fn at_location(location: Location) -> Result<Self, Self::Error> {
        let connection = match &location {
            Location::InMemory => Connection::open_in_memory(),
            Location::OnDisk { path } => Connection::open(path),
        }?;
        connection.execute_batch(
            "CREATE TABLE IF NOT EXISTS state (key BLOB PRIMARY KEY, value BLOB NOT NULL);",
        )?;
        debug!(?location, "opened DuckDB state store");

        Ok(Self {
            location,
            connection: Mutex::new(connection),
        })
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

impl StateStore for DuckDb {
    type Error = duckdb::Error;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), name = "duckdb_write"))]
    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error> {
        let _rows = self.connection().execute(
            "INSERT OR REPLACE INTO state (key, value) VALUES (?, ?)",
            params![key, value],
        )?;
        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), name = "duckdb_read"))]
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        self.connection()
            .query_row("SELECT value FROM state WHERE key = ?", params![key], |row| {
                row.get(0)
            })
            .optional()
    }
}
