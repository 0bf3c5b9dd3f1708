use crate::handler::OperationKind;
use std::fmt;

/// A failure while handling an invocation.
///
/// The `Display` text of each variant is the message reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation was invoked without its required key argument.
    InvalidArguments(OperationKind),
    /// The state store rejected a write. Holds the store's error text.
    StoreWrite(String),
    /// The state store could not be read. Holds the store's error text.
    StoreRead(String),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArguments(OperationKind::Put) => {
                f.write_str("put operation must include one arguments")
            }
            Self::InvalidArguments(OperationKind::Get) => {
                f.write_str("get operation must include one argument, a key")
            }
            Self::StoreWrite(err) => {
                write!(f, "put operation failed. Error updating state: {err}")
            }
            Self::StoreRead(err) => {
                write!(f, "get operation failed. Error accessing state: {err}")
            }
        }
    }
}
