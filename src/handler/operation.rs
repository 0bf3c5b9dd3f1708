use crate::Error;
use std::fmt;

/// The operations the handler recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Record a timestamp under a key.
    Put,
    /// Retrieve the value recorded under a key.
    Get,
}

impl OperationKind {
    /// The name an invocation uses to select this operation.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Put => "put",
            Self::Get => "get",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated invocation.
///
/// Unknown operation names are not an error: they parse to [`Operation::Unsupported`], which the
/// handler answers with a successful sentinel payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// Record a timestamp under `key`.
    Put {
        /// The key to write.
        key: &'a str,
    },
    /// Read the value under `key`.
    Get {
        /// The key to read.
        key: &'a str,
    },
    /// Any other operation name, including the empty string.
    Unsupported {
        /// The name that was invoked.
        name: &'a str,
    },
}

impl<'a> Operation<'a> {
    /// Validate an operation name and its positional arguments.
    ///
    /// `put` and `get` both take their key from the first argument and fail with
    /// [`Error::InvalidArguments`] when there is none. Any further arguments are ignored.
    pub fn parse(name: &'a str, args: &'a [String]) -> Result<Self, Error> {
        let kind = match name {
            "put" => OperationKind::Put,
            "get" => OperationKind::Get,
            _ => return Ok(Self::Unsupported { name }),
        };
        let Some(key) = args.first().map(String::as_str) else {
            return Err(Error::InvalidArguments(kind));
        };

        Ok(match kind {
            OperationKind::Put => Self::Put { key },
            OperationKind::Get => Self::Get { key },
        })
    }

    /// The recognized operation, if any.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Option<OperationKind> {
        match self {
            Self::Put { .. } => Some(OperationKind::Put),
            Self::Get { .. } => Some(OperationKind::Get),
            Self::Unsupported { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(args: &[&str]) -> Vec<String> {
        args.iter().map(|&arg| arg.to_owned()).collect()
    }

    #[test]
    fn test_parse_put() {
        let args = args(&["foo"]);
        assert_eq!(
            Operation::parse("put", &args),
            Ok(Operation::Put { key: "foo" })
        );
    }

    #[test]
    fn test_parse_put_ignores_extra_arguments() {
        let args = args(&["foo", "bar", "baz"]);
        assert_eq!(
            Operation::parse("put", &args),
            Ok(Operation::Put { key: "foo" })
        );
    }

    #[test]
    fn test_parse_get() {
        let args = args(&["foo"]);
        assert_eq!(
            Operation::parse("get", &args),
            Ok(Operation::Get { key: "foo" })
        );
    }

    #[test]
    fn test_parse_missing_key() {
        assert_eq!(
            Operation::parse("put", &[]),
            Err(Error::InvalidArguments(OperationKind::Put))
        );
        assert_eq!(
            Operation::parse("get", &[]),
            Err(Error::InvalidArguments(OperationKind::Get))
        );
    }

    #[test]
    fn test_parse_empty_key_is_present() {
        let args = args(&[""]);
        assert_eq!(Operation::parse("get", &args), Ok(Operation::Get { key: "" }));
    }

    #[test]
    fn test_parse_unsupported() {
        let args = args(&["foo"]);
        for name in ["delete", "", "PUT", "Get", " put"] {
            let op = Operation::parse(name, &args);
            assert_eq!(op, Ok(Operation::Unsupported { name }));
            assert_eq!(op.ok().and_then(|op| op.kind()), None);
        }
        // Unknown operations need no arguments.
        assert_eq!(
            Operation::parse("delete", &[]),
            Ok(Operation::Unsupported { name: "delete" })
        );
    }
}
