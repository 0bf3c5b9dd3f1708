//! A ledger-state handler that records fixed-width timestamps under keys.
//!
//! The [`Handler`] receives an operation name and its arguments, dispatches to `put`, `get` or an
//! unsupported-operation sentinel, and reports a [`Response`]. State lives in a [`StateStore`];
//! several backends are provided in [`backend`]. The handler can be served over gRPC with
//! [`server::ChaincodeServer`] or driven in-process through [`transitive`].

pub mod backend;
mod error;
mod handler;
mod location;
pub mod proto;
mod response;
pub mod server;
mod state;
pub mod timestamp;
mod tracing_shim;
pub mod transitive;

/// The result of a gRPC call.
pub type RpcResponse<T> = Result<tonic::Response<T>, tonic::Status>;

pub use self::error::Error;
pub use self::handler::{Handler, Operation, OperationKind, UNSUPPORTED_OPERATION};
pub use self::location::Location;
pub use self::response::Response;
pub use self::state::StateStore;
