use std::sync::Arc;

/// The key-value layer the handler reads and writes through.
///
/// Keys are arbitrary byte strings and values carry no enforced schema. Each call is expected to
/// be atomic on its own; the handler adds no locking or transactions on top.
pub trait StateStore: Send + Sync {
    /// The error reported by the store. Its `Display` text is surfaced to callers verbatim.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Record `value` under `key`, replacing any previous value.
    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error>;

    /// Obtain the value recorded under `key`.
    ///
    /// A key with no record is not an error: `Ok(None)` is returned.
    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error>;
}

impl<Store> StateStore for Arc<Store>
where
    Store: StateStore + ?Sized,
{
    type Error = Store::Error;

    fn write(&self, key: &[u8], value: &[u8]) -> Result<(), Self::Error> {
        self.as_ref().write(key, value)
    }

    fn read(&self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        self.as_ref().read(key)
    }
}
