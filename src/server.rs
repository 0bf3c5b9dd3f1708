//! Serving a [`Handler`] over gRPC.

pub use crate::proto::ChaincodeServer;
use crate::proto::{self, Chaincode};
use crate::timestamp::{FixedTimestamp, TimestampSource};
use crate::tracing_shim::{info_span, Instrument as _};
use crate::{Handler, RpcResponse, StateStore};
use std::sync::Arc;
use tonic::{Request, Status};

/// Exposes a [`Handler`] as the `timestamping.Chaincode` service.
///
/// Handler failures are returned as a [`proto::Response`] with status 500, not as a gRPC error. A
/// `Status` is only returned when the invocation could not be run at all.
#[must_use]
#[derive(Debug)]
pub struct ChaincodeService<Store, Clock = FixedTimestamp> {
    handler: Arc<Handler<Store, Clock>>,
}

impl<Store, Clock> Clone for ChaincodeService<Store, Clock> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<Store, Clock> ChaincodeService<Store, Clock>
where
    Store: StateStore + 'static,
    Clock: TimestampSource + 'static,
{
    /// Serve `handler`.
    #[inline]
    pub fn new(handler: Handler<Store, Clock>) -> Self {
        Self::from_shared(Arc::new(handler))
    }

    /// Serve a handler that is also used elsewhere.
    #[inline]
    pub const fn from_shared(handler: Arc<Handler<Store, Clock>>) -> Self {
        Self { handler }
    }

    /// The handler being served.
    #[inline]
    pub fn handler(&self) -> &Handler<Store, Clock> {
        &self.handler
    }

    /// Wrap the service in a tonic server.
    #[inline]
    pub fn into_server(self) -> ChaincodeServer<Self> {
        ChaincodeServer::new(self)
    }
}

#[tonic::async_trait]
impl<Store, Clock> Chaincode for ChaincodeService<Store, Clock>
where
    Store: StateStore + 'static,
    Clock: TimestampSource + 'static,
{
    async fn init(&self, _request: Request<proto::InitRequest>) -> RpcResponse<proto::Response> {
        Ok(tonic::Response::new(self.handler.init().into()))
    }

    async fn invoke(
        &self,
        request: Request<proto::InvokeRequest>,
    ) -> RpcResponse<proto::Response> {
        let proto::InvokeRequest { function, args } = request.into_inner();
        let span = info_span!("invoke", %function);
        let handler = Arc::clone(&self.handler);

        // Store calls block, so they are kept off the async workers.
        let response = tokio::task::spawn_blocking(move || handler.invoke(&function, &args))
            .instrument(span)
            .await
            .map_err(|err| Status::internal(format!("invocation did not complete: {err}")))?;

        Ok(tonic::Response::new(response.into()))
    }
}
