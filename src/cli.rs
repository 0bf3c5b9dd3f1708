//! Command-line interface for the timestamping handler.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use timestamping::timestamp::DEFAULT_TIMESTAMP;
use timestamping::Location;

/// The backend holding the state.
///
/// Note that the backend must be enabled at compile time for it to be used.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum Backend {
    /// State held in memory and lost on exit.
    Memory,
    #[cfg(feature = "sqlite")]
    #[allow(clippy::missing_docs_in_private_items)]
    Sqlite,
    #[cfg(feature = "duckdb")]
    #[value(name = "duckdb")]
    #[allow(clippy::missing_docs_in_private_items)]
    DuckDb,
    #[cfg(feature = "rocksdb")]
    #[value(name = "rocksdb")]
    #[allow(clippy::missing_docs_in_private_items)]
    RocksDb,
}

impl Default for Backend {
    #[allow(unreachable_code)] // simpler than more complex cfgs
    fn default() -> Self {
        #[cfg(feature = "sqlite")]
        return Self::Sqlite;
        #[cfg(feature = "rocksdb")]
        return Self::RocksDb;
        #[cfg(feature = "duckdb")]
        return Self::DuckDb;

        Self::Memory
    }
}

/// Which timestamp `put` records.
#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub(crate) enum TimestampMode {
    /// Record the same timestamp on every write.
    #[default]
    Fixed,
    /// Record a counter that starts at the base and increases with every write.
    #[value(alias = "counter")]
    Logical,
}

/// Command-line arguments for the timestamping handler.
#[derive(Debug, Parser)]
#[command(version, propagate_version = true)]
pub(crate) struct Args {
    /// The backend holding the state.
    #[arg(value_enum, short, long, default_value_t = Backend::default())]
    pub(crate) backend: Backend,
    /// Which timestamp `put` records.
    #[arg(value_enum, short, long, default_value_t)]
    pub(crate) timestamp: TimestampMode,
    /// The first (or only) timestamp recorded, in seconds since the Unix epoch.
    #[arg(long, default_value_t = DEFAULT_TIMESTAMP)]
    pub(crate) timestamp_base: u64,
    /// The operation to perform.
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// What operation to perform.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Serve the handler over gRPC.
    ///
    /// The server listens on the given address until it is stopped.
    #[clap(alias = "serve")]
    Run(RunArgs),
    /// Initialize the handler.
    Init(InitArgs),
    /// Invoke an operation on the handler.
    ///
    /// On success the payload is written to stdout. On failure the message is written to stderr
    /// and the process exits with a failure status code.
    #[clap(alias = "call")]
    Invoke(InvokeArgs),
}

impl Command {
    /// The same command, with its state kept in memory.
    pub(crate) fn in_memory(mut self) -> Self {
        match &mut self {
            Self::Run(RunArgs { store, .. })
            | Self::Init(InitArgs { store, .. })
            | Self::Invoke(InvokeArgs { store, .. }) => store.in_memory = true,
        }
        self
    }
}

/// Where the state is kept.
#[derive(Debug, Clone, ClapArgs)]
pub(crate) struct StoreArgs {
    /// The location of the state store.
    #[arg(short, long, default_value = "state.db")]
    pub(crate) store: PathBuf,
    /// Keep the state in memory instead of at `--store`.
    #[arg(long, conflicts_with = "store")]
    pub(crate) in_memory: bool,
}

impl StoreArgs {
    /// The location selected by the arguments.
    pub(crate) fn location(&self) -> Location {
        if self.in_memory {
            Location::InMemory
        } else {
            Location::OnDisk {
                path: self.store.clone(),
            }
        }
    }
}

/// Serve the handler over gRPC.
#[derive(Debug, Parser)]
pub(crate) struct RunArgs {
    #[command(flatten)]
    #[allow(clippy::missing_docs_in_private_items)]
    pub(crate) store: StoreArgs,
    /// The address to listen on.
    #[clap(default_value = "[::1]:50051")]
    pub(crate) addr: SocketAddr,
}

/// Initialize the handler.
#[derive(Debug, Parser)]
pub(crate) struct InitArgs {
    #[command(flatten)]
    #[allow(clippy::missing_docs_in_private_items)]
    pub(crate) store: StoreArgs,
    /// Send the request to a running server instead of handling it in-process.
    #[arg(short, long)]
    pub(crate) remote: Option<String>,
}

/// Invoke an operation on the handler.
#[derive(Debug, Parser)]
pub(crate) struct InvokeArgs {
    #[command(flatten)]
    #[allow(clippy::missing_docs_in_private_items)]
    pub(crate) store: StoreArgs,
    /// Send the request to a running server instead of handling it in-process.
    #[arg(short, long)]
    pub(crate) remote: Option<String>,
    /// Print an 8-byte payload as the decimal timestamp it encodes.
    #[arg(short, long)]
    pub(crate) decode: bool,
    /// The operation to invoke, such as `put` or `get`.
    pub(crate) function: String,
    /// The arguments of the operation. The first is the key.
    #[arg(allow_hyphen_values = true)]
    pub(crate) args: Vec<String>,
}
