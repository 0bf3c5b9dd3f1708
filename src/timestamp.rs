//! Timestamps recorded by `put`.
//!
//! A timestamp is stored as its 8-byte big-endian encoding. Which timestamp is stored is decided by
//! a [`TimestampSource`]; none of the sources read a wall clock.

use std::sync::atomic::{AtomicU64, Ordering};

/// The timestamp recorded by [`FixedTimestamp::default`], in seconds since the Unix epoch.
pub const DEFAULT_TIMESTAMP: u64 = 1_494_321_113;

/// The length of an encoded timestamp.
pub const ENCODED_LEN: usize = 8;

/// Supplies the timestamp recorded by each `put`.
pub trait TimestampSource: Send + Sync {
    /// The timestamp for the next write.
    fn next_timestamp(&self) -> u64;
}

impl<T> TimestampSource for Box<T>
where
    T: TimestampSource + ?Sized,
{
    fn next_timestamp(&self) -> u64 {
        self.as_ref().next_timestamp()
    }
}

/// Always yields the same timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestamp(pub u64);

impl Default for FixedTimestamp {
    fn default() -> Self {
        Self(DEFAULT_TIMESTAMP)
    }
}

impl TimestampSource for FixedTimestamp {
    fn next_timestamp(&self) -> u64 {
        self.0
    }
}

/// A logical clock: yields its base, then increases by one for every write.
///
/// Values are unique and strictly increasing across all threads sharing the source.
#[derive(Debug)]
pub struct LogicalTimestamp {
    next: AtomicU64,
}

impl LogicalTimestamp {
    /// A logical clock whose first timestamp is `base`.
    #[inline]
    #[must_use]
    pub const fn starting_at(base: u64) -> Self {
        Self {
            next: AtomicU64::new(base),
        }
    }
}

impl Default for LogicalTimestamp {
    fn default() -> Self {
        Self::starting_at(DEFAULT_TIMESTAMP)
    }
}

impl TimestampSource for LogicalTimestamp {
    fn next_timestamp(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Encode a timestamp as 8 big-endian bytes.
#[inline]
#[must_use]
pub const fn encode(timestamp: u64) -> [u8; ENCODED_LEN] {
    timestamp.to_be_bytes()
}

/// Decode a value written by `put`. Returns `None` if `bytes` is not exactly 8 bytes long.
#[inline]
#[must_use]
pub fn decode(bytes: &[u8]) -> Option<u64> {
    let bytes: [u8; ENCODED_LEN] = bytes.try_into().ok()?;
    Some(u64::from_be_bytes(bytes))
}
