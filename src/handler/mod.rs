//! The request handler.

mod operation;

pub use self::operation::{Operation, OperationKind};
use crate::timestamp::{self, FixedTimestamp, TimestampSource};
use crate::tracing_shim::{debug, error};
use crate::{Error, Response, StateStore};

/// The payload returned for any operation the handler does not recognize.
pub const UNSUPPORTED_OPERATION: &[u8] = b"Unsupported operation";

/// Dispatches invocations against a [`StateStore`].
///
/// The handler holds no mutable state of its own; everything observable lives in the store. It
/// can be shared between threads and invoked concurrently, relying on the store for the atomicity
/// of each individual read and write.
#[must_use]
#[derive(Debug)]
pub struct Handler<Store, Clock = FixedTimestamp> {
    store: Store,
    clock: Clock,
}

impl<Store> Handler<Store>
where
    Store: StateStore,
{
    /// A handler that records [`timestamp::DEFAULT_TIMESTAMP`] on every `put`.
    #[inline]
    pub fn new(store: Store) -> Self {
        Self::with_timestamp_source(store, FixedTimestamp::default())
    }
}

impl<Store, Clock> Handler<Store, Clock>
where
    Store: StateStore,
    Clock: TimestampSource,
{
    /// A handler that records timestamps obtained from `clock`.
    #[inline]
    pub const fn with_timestamp_source(store: Store, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// The store this handler operates on.
    #[inline]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// Prepare the handler for its first invocation.
    ///
    /// There is nothing to prepare: this always succeeds with an empty payload and leaves the
    /// store untouched.
    #[inline]
    pub fn init(&self) -> Response {
        Response::success(Vec::new())
    }

    /// Handle a single invocation of `function` with `args`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn invoke(&self, function: &str, args: &[String]) -> Response {
        debug!(function, ?args, "invoking function");
        match Operation::parse(function, args) {
            Ok(operation) => self.dispatch(operation).into(),
            Err(err) => err.into(),
        }
    }

    /// Carry out a validated operation, returning the success payload.
    fn dispatch(&self, operation: Operation<'_>) -> Result<Vec<u8>, Error> {
        match operation {
            Operation::Put { key } => self.put(key),
            Operation::Get { key } => self.get(key),
            // Unknown operations are answered, not rejected.
            Operation::Unsupported { .. } => Ok(UNSUPPORTED_OPERATION.to_vec()),
        }
    }

    fn put(&self, key: &str) -> Result<Vec<u8>, Error> {
        let value = timestamp::encode(self.clock.next_timestamp());
        if let Err(err) = self.store.write(key.as_bytes(), &value) {
            error!(key, %err, "error putting state");
            return Err(Error::StoreWrite(err.to_string()));
        }
        Ok(value.to_vec())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, Error> {
        match self.store.read(key.as_bytes()) {
            Ok(value) => {
                // An absent record is reported as an empty payload.
                let value = value.unwrap_or_default();
                debug!(key, len = value.len(), "response length");
                Ok(value)
            }
            Err(err) => {
                error!(key, %err, "error getting state");
                Err(Error::StoreRead(err.to_string()))
            }
        }
    }
}
