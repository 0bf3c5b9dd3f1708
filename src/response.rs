use crate::Error;

/// The outcome of a single invocation.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The invocation succeeded. The payload may be empty.
    Success {
        /// The bytes returned to the caller.
        payload: Vec<u8>,
    },
    /// The invocation failed.
    Failure {
        /// A human-readable description of the failure.
        message: String,
    },
}

impl Response {
    /// Status code reported for a successful invocation.
    pub const OK: i32 = 200;
    /// Status code reported for a failed invocation.
    pub const ERROR: i32 = 500;

    /// A successful response carrying `payload`.
    #[inline]
    pub fn success(payload: impl Into<Vec<u8>>) -> Self {
        Self::Success {
            payload: payload.into(),
        }
    }

    /// A failed response carrying `message`.
    #[inline]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    /// Whether the invocation succeeded.
    #[inline]
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The status code of the response, [`Response::OK`] or [`Response::ERROR`].
    #[inline]
    #[must_use]
    pub const fn status(&self) -> i32 {
        match self {
            Self::Success { .. } => Self::OK,
            Self::Failure { .. } => Self::ERROR,
        }
    }

    /// The payload of a successful response. Failures have none.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Self::Success { payload } => Some(payload),
            Self::Failure { .. } => None,
        }
    }

    /// The message of a failed response. Successes have none.
    #[inline]
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

impl From<Error> for Response {
    fn from(err: Error) -> Self {
        Self::failure(err.to_string())
    }
}

impl From<Result<Vec<u8>, Error>> for Response {
    fn from(result: Result<Vec<u8>, Error>) -> Self {
        match result {
            Ok(payload) => Self::success(payload),
            Err(err) => err.into(),
        }
    }
}
