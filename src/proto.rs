//! Messages and service definitions for the `timestamping.Chaincode` gRPC service.

use crate::Response as HandlerResponse;

/// Service code generated by `tonic-build` from `build.rs`.
mod service {
    #![allow(
        missing_docs,
        unreachable_pub,
        unused_qualifications,
        unused_results,
        clippy::all,
        clippy::nursery,
        clippy::missing_docs_in_private_items
    )]

    include!(concat!(env!("OUT_DIR"), "/timestamping.Chaincode.rs"));
}

pub use self::service::chaincode_client::ChaincodeClient;
pub use self::service::chaincode_server::{Chaincode, ChaincodeServer};

/// Request for `Init`. Carries nothing.
#[derive(Clone, Copy, PartialEq, Eq, prost::Message)]
pub struct InitRequest {}

/// Request for `Invoke`.
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct InvokeRequest {
    /// The operation to perform.
    #[prost(string, tag = "1")]
    pub function: String,
    /// The positional arguments of the operation.
    #[prost(string, repeated, tag = "2")]
    pub args: Vec<String>,
}

impl InvokeRequest {
    /// A request invoking `function` with `args`.
    pub fn new<F, A>(function: F, args: A) -> Self
    where
        F: Into<String>,
        A: IntoIterator<Item: Into<String>>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// The outcome of `Init` or `Invoke`.
///
/// A failed invocation is still a successful RPC: `status` is 500 and `message` explains why.
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct Response {
    /// 200 on success, 500 on failure.
    #[prost(int32, tag = "1")]
    pub status: i32,
    /// The failure message. Empty on success.
    #[prost(string, tag = "2")]
    pub message: String,
    /// The payload. Empty on failure.
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

impl From<HandlerResponse> for Response {
    fn from(response: HandlerResponse) -> Self {
        let status = response.status();
        match response {
            HandlerResponse::Success { payload } => Self {
                status,
                message: String::new(),
                payload,
            },
            HandlerResponse::Failure { message } => Self {
                status,
                message,
                payload: Vec::new(),
            },
        }
    }
}

impl From<Response> for HandlerResponse {
    fn from(Response { status, message, payload }: Response) -> Self {
        if status == Self::OK {
            Self::success(payload)
        } else {
            Self::failure(message)
        }
    }
}
