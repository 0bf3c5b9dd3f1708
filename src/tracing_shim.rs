//! Logging through `tracing` when the `tracing` feature is enabled, and no-op stand-ins otherwise.
//!
//! Import logging macros from here rather than from `tracing` so that call sites need no `#[cfg]`.
//! The `#[instrument]` attribute is the exception and is written as
//! `#[cfg_attr(feature = "tracing", tracing::instrument)]`.

#![allow(unused_imports, unused_macros, dead_code)]

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, error, info_span};
#[cfg(feature = "tracing")]
pub(crate) use tracing_futures::Instrument;

#[cfg(not(feature = "tracing"))]
macro_rules! event {
    ($($x:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! event_span {
    ($($x:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {event as debug, event as error, event_span as info_span};

/// Attaching a span to a future is a no-op without `tracing`.
#[cfg(not(feature = "tracing"))]
pub(crate) trait Instrument: Sized {
    fn instrument(self, span: ()) -> Self {
        let () = span;
        self
    }
}

#[cfg(not(feature = "tracing"))]
impl<T> Instrument for T {}
