//! A command-line interface for serving and invoking the timestamping handler.
//!
//! For usage, run `cargo run --features binary -- --help`.

mod cli;

use crate::cli::{Args, Backend, Command, InitArgs, InvokeArgs, RunArgs, StoreArgs, TimestampMode};
use clap::Parser as _;
use std::process::ExitCode;
#[cfg(feature = "duckdb")]
use timestamping::backend::DuckDb;
#[cfg(feature = "rocksdb")]
use timestamping::backend::RocksDb;
#[cfg(feature = "sqlite")]
use timestamping::backend::Sqlite;
use timestamping::backend::{DatabaseBackend, Memory};
use timestamping::proto::{ChaincodeClient, InitRequest, InvokeRequest};
use timestamping::server::ChaincodeService;
use timestamping::timestamp::{self, FixedTimestamp, LogicalTimestamp, TimestampSource};
use timestamping::{transitive, Handler, Response, StateStore};
use tokio::io::{self, AsyncWriteExt as _};
use tonic::transport::{Channel, Server};
use tracing_subscriber::EnvFilter;

/// The timestamp source selected on the command line.
type Clock = Box<dyn TimestampSource>;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let Args {
        backend,
        timestamp,
        timestamp_base,
        command,
    } = Args::parse();

    let clock: Clock = match timestamp {
        TimestampMode::Fixed => Box::new(FixedTimestamp(timestamp_base)),
        TimestampMode::Logical => Box::new(LogicalTimestamp::starting_at(timestamp_base)),
    };

    let future = async {
        match backend {
            Backend::Memory => execute::<Memory>(command.in_memory(), clock).await,
            #[cfg(feature = "sqlite")]
            Backend::Sqlite => execute::<Sqlite>(command, clock).await,
            #[cfg(feature = "duckdb")]
            Backend::DuckDb => execute::<DuckDb>(command, clock).await,
            #[cfg(feature = "rocksdb")]
            Backend::RocksDb => execute::<RocksDb>(command, clock).await,
        }
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(future)
}

/// Carry out `command` against a store of type `Backend`.
async fn execute<Backend>(
    command: Command,
    clock: Clock,
) -> Result<ExitCode, Box<dyn std::error::Error>>
where
    Backend: DatabaseBackend<Error: std::error::Error + 'static> + StateStore + 'static,
{
    match command {
        Command::Run(args) => run::<Backend>(args, clock).await,
        Command::Init(InitArgs { store, remote }) => {
            let mut client = client::<Backend>(&store, remote, clock).await?;
            let response = client.init(InitRequest {}).await?.into_inner();
            report(response.into(), false).await
        }
        Command::Invoke(InvokeArgs {
            store,
            remote,
            decode,
            function,
            args,
        }) => {
            let mut client = client::<Backend>(&store, remote, clock).await?;
            let response = client
                .invoke(InvokeRequest { function, args })
                .await?
                .into_inner();
            report(response.into(), decode).await
        }
    }
}

/// Open the store described by `store` and wrap it in a handler.
fn open<Backend>(
    store: &StoreArgs,
    clock: Clock,
) -> Result<Handler<Backend, Clock>, Box<dyn std::error::Error>>
where
    Backend: DatabaseBackend<Error: std::error::Error + 'static> + StateStore,
{
    let store = Backend::at_location(store.location())?;
    Ok(Handler::with_timestamp_source(store, clock))
}

/// Serve the handler over gRPC. This function will block until the server is shut down.
async fn run<Backend>(
    RunArgs { store, addr }: RunArgs,
    clock: Clock,
) -> Result<ExitCode, Box<dyn std::error::Error>>
where
    Backend: DatabaseBackend<Error: std::error::Error + 'static> + StateStore + 'static,
{
    let handler = open::<Backend>(&store, clock)?;
    tracing::info!(%addr, location = ?handler.store().location(), "serving chaincode");

    Server::builder()
        .add_service(ChaincodeService::new(handler).into_server())
        .serve(addr)
        .await?;

    Ok(ExitCode::SUCCESS)
}

/// Connect to the server at `remote`, or to a handler served in-process if there is none.
async fn client<Backend>(
    store: &StoreArgs,
    remote: Option<String>,
    clock: Clock,
) -> Result<ChaincodeClient<Channel>, Box<dyn std::error::Error>>
where
    Backend: DatabaseBackend<Error: std::error::Error + 'static> + StateStore + 'static,
{
    match remote {
        Some(remote) => Ok(ChaincodeClient::connect(remote).await?),
        None => {
            let handler = open::<Backend>(store, clock)?;
            Ok(transitive::chaincode_client(handler).await?.into_inner())
        }
    }
}

/// Write the outcome of an invocation.
///
/// # stdout
///
/// The payload of a successful response, unmodified. With `decode`, an 8-byte payload is instead
/// written as the decimal timestamp it encodes, followed by a newline.
///
/// # stderr
///
/// The message of a failed response, followed by a newline.
async fn report(response: Response, decode: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match response {
        Response::Success { payload } => {
            let mut stdout = io::stdout();
            match decode.then(|| timestamp::decode(&payload)).flatten() {
                Some(timestamp) => stdout.write_all(format!("{timestamp}\n").as_bytes()).await?,
                None => stdout.write_all(&payload).await?,
            }
            stdout.flush().await?;
            Ok(ExitCode::SUCCESS)
        }
        Response::Failure { message } => {
            let mut stderr = io::stderr();
            stderr.write_all(message.as_bytes()).await?;
            stderr.write_all(b"\n").await?;
            stderr.flush().await?;
            Ok(ExitCode::FAILURE)
        }
    }
}
