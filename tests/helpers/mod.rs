#![allow(dead_code)] // not every test binary uses every helper

use std::fmt;
use timestamping::StateStore;

/// The encoding of the default timestamp, `1494321113`.
pub(crate) const ENCODED_DEFAULT: [u8; 8] = [0, 0, 0, 0, 89, 25, 140, 153];

pub(crate) fn args<const N: usize>(args: [&str; N]) -> Vec<String> {
    args.into_iter().map(str::to_owned).collect()
}

#[derive(Debug)]
pub(crate) struct ReadOnly;

impl std::error::Error for ReadOnly {}

impl fmt::Display for ReadOnly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ledger is read-only")
    }
}

/// A store that rejects writes and has no records.
#[derive(Debug)]
pub(crate) struct ReadOnlyStore;

impl StateStore for ReadOnlyStore {
    type Error = ReadOnly;

    fn write(&self, _key: &[u8], _value: &[u8]) -> Result<(), Self::Error> {
        Err(ReadOnly)
    }

    fn read(&self, _key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        Ok(None)
    }
}
