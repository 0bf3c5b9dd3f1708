use crate::backend::DatabaseBackend;
use crate::tracing_shim::debug;
use crate::{Location, StateStore};
use rocksdb::{Env, Options, TransactionDB, TransactionDBOptions};
use std::fmt;

/// Path handed to RocksDB for in-memory stores. Nothing is written there.
const IN_MEMORY_PATH: &str = "timestamping-in-memory";

/// A backend utilizing RocksDB.
///
/// [`Location::InMemory`] is served by RocksDB's in-memory environment.
pub struct RocksDb {
    location: Location,
    db: TransactionDB,
}

impl fmt::Debug for RocksDb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RocksDb")
            .field("location", &self.location)
            .finish_non_exhaustive()
    }
}

impl DatabaseBackend for RocksDb {
    type Error = rocksdb::Error;

    fn at_location(location: Location) -> Result<Self, Self::Error> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let txn_opts = TransactionDBOptions::default();

        let db = match &location {
            Location::InMemory => {
                opts.set_env(&Env::mem_env()?);
                TransactionDB::open(&opts, &txn_opts, IN_MEMORY_PATH)
            }
            Location::OnDisk { path } => TransactionDB::open(&opts, &txn_opts, path),
        }?;
        debug!(?location, "opened RocksDB state store");

        Ok(Self { location, db })
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

impl StateStore for RocksDb {
    type Error = rocksdb::Error;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), name = "rocksdb_write"))]
    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error> {
        self.db.put(key, value)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), name = "rocksdb_read"))]
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        self.db.get(key)
    }
}
