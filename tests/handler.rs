mod helpers;

use crate::helpers::{args, ReadOnlyStore, ENCODED_DEFAULT};
use std::sync::Arc;
use timestamping::backend::{DatabaseBackend as _, Memory};
use timestamping::timestamp::{self, FixedTimestamp};
use timestamping::{Handler, Response, StateStore as _, UNSUPPORTED_OPERATION};

#[test]
fn test_put_returns_encoded_timestamp() {
    let handler = Handler::new(Memory::new());
    assert_eq!(
        handler.invoke("put", &args(["foo"])),
        Response::success(ENCODED_DEFAULT)
    );
}

#[test]
fn test_get_after_put() {
    let handler = Handler::new(Memory::new());
    let _put = handler.invoke("put", &args(["foo"]));
    let get = handler.invoke("get", &args(["foo"]));
    assert_eq!(get, Response::success(ENCODED_DEFAULT));
    assert_eq!(
        get.payload().and_then(timestamp::decode),
        Some(timestamp::DEFAULT_TIMESTAMP)
    );
}

#[test]
fn test_missing_arguments() {
    let handler = Handler::new(Memory::new());
    assert_eq!(
        handler.invoke("put", &[]).message(),
        Some("put operation must include one arguments")
    );
    assert_eq!(
        handler.invoke("get", &[]).message(),
        Some("get operation must include one argument, a key")
    );
}

#[test]
fn test_unknown_key_is_not_an_error() {
    let response = Handler::new(Memory::new()).invoke("get", &args(["unknown-key"]));
    assert!(response.is_success());
    assert_eq!(response.payload(), Some(&[][..]));
}

#[test]
fn test_unsupported_operation_is_not_an_error() {
    let handler = Handler::new(Memory::new());
    let response = handler.invoke("delete", &args(["foo"]));
    assert_eq!(response.status(), Response::OK);
    assert_eq!(response.payload(), Some(UNSUPPORTED_OPERATION));
}

#[test]
fn test_write_failure() {
    let handler = Handler::new(ReadOnlyStore);
    let response = handler.invoke("put", &args(["foo"]));
    assert_eq!(response.status(), Response::ERROR);
    assert_eq!(
        response.message(),
        Some("put operation failed. Error updating state: ledger is read-only")
    );

    // Reads still work.
    assert_eq!(
        handler.invoke("get", &args(["foo"])),
        Response::success(Vec::new())
    );
}

#[test]
fn test_shared_store() -> Result<(), timestamping::backend::MemoryError> {
    let store = Arc::<Memory>::in_memory()?;
    let writer = Handler::with_timestamp_source(Arc::clone(&store), FixedTimestamp(42));
    let reader = Handler::new(Arc::clone(&store));

    let _put = writer.invoke("put", &args(["shared"]));
    assert_eq!(
        reader.invoke("get", &args(["shared"])),
        Response::success(42_u64.to_be_bytes())
    );
    assert_eq!(store.len(), 1);
    Ok(())
}

#[test]
fn test_init_leaves_store_untouched() -> Result<(), timestamping::backend::MemoryError> {
    let handler = Handler::new(Memory::in_memory()?);
    assert_eq!(handler.init(), Response::success(Vec::new()));
    assert!(handler.store().is_empty());
    assert_eq!(handler.store().read(b"")?, None);
    Ok(())
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use anyhow::Result;
    use serial_test::serial;
    use std::path::PathBuf;
    use std::sync::LazyLock;
    use timestamping::backend::{DatabaseBackend as _, Sqlite};

    static STATE_STORE_PATH: LazyLock<PathBuf> =
        LazyLock::new(|| PathBuf::from("state_store.test.db"));

    #[test]
    #[serial]
    fn test_put_get_on_disk() -> Result<()> {
        let handler = Handler::new(Sqlite::at_path(STATE_STORE_PATH.clone())?);
        assert_eq!(
            handler.invoke("put", &args(["key_put_get"])),
            Response::success(ENCODED_DEFAULT)
        );
        assert_eq!(
            handler.invoke("get", &args(["key_put_get"])),
            Response::success(ENCODED_DEFAULT)
        );
        Ok(())
    }

    #[test]
    #[serial]
    fn test_persists_across_handlers() -> Result<()> {
        {
            let handler = Handler::with_timestamp_source(
                Sqlite::at_path(STATE_STORE_PATH.clone())?,
                FixedTimestamp(7),
            );
            let _put = handler.invoke("put", &args(["key_persist"]));
        }

        let handler = Handler::new(Sqlite::at_path(STATE_STORE_PATH.clone())?);
        assert_eq!(
            handler.invoke("get", &args(["key_persist"])),
            Response::success(7_u64.to_be_bytes())
        );
        Ok(())
    }

    #[test]
    fn test_unknown_key_in_memory() -> Result<()> {
        let handler = Handler::new(Sqlite::in_memory()?);
        assert_eq!(
            handler.invoke("get", &args(["unknown-key"])),
            Response::success(Vec::new())
        );
        Ok(())
    }
}
