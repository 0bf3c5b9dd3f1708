//! Clients connected to a server running in the same process.
//!
//! The server and client are joined by an in-memory duplex pipe, so no socket is opened. This is
//! used by the command-line interface and is convenient for tests.

use crate::proto::ChaincodeClient;
use crate::server::ChaincodeService;
use crate::timestamp::TimestampSource;
use crate::{Handler, StateStore};
use hyper_util::rt::TokioIo;
use std::ops::{Deref, DerefMut};
use tonic::transport::{Channel, Endpoint, Server};

const DUPLEX_SIZE: usize = 1024;

/// A client whose server runs on a background task of the current runtime.
///
/// The server stops once the client and all of its clones are dropped.
#[derive(Debug)]
pub struct Transitive<T> {
    client: T,
}

impl<T> Transitive<T> {
    /// Discard the wrapper, keeping the client.
    #[inline]
    pub fn into_inner(self) -> T {
        self.client
    }
}

impl<T> Deref for Transitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl<T> DerefMut for Transitive<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.client
    }
}

/// Serve `handler` in-process and return a client connected to it.
pub async fn chaincode_client<Store, Clock>(
    handler: Handler<Store, Clock>,
) -> Result<Transitive<ChaincodeClient<Channel>>, tonic::transport::Error>
where
    Store: StateStore + 'static,
    Clock: TimestampSource + 'static,
{
    let (client, server) = tokio::io::duplex(DUPLEX_SIZE);

    let _join_handle = tokio::spawn(async move {
        Server::builder()
            .add_service(ChaincodeService::new(handler).into_server())
            .serve_with_incoming(tokio_stream::once(Ok::<_, std::io::Error>(server)))
            .await
    });

    let mut client = Some(client);
    // The address is never dialed; the connector hands over the pipe instead.
    let channel = Endpoint::try_from("http://[::]:50051")?
        .connect_with_connector(tower::service_fn(move |_| {
            let client = client.take();
            async move {
                match client {
                    Some(client) => Ok(TokioIo::new(client)),
                    None => Err(std::io::Error::other("client already taken")),
                }
            }
        }))
        .await?;

    Ok(Transitive {
        client: ChaincodeClient::new(channel),
    })
}
