mod helpers;

use crate::helpers::{args, ENCODED_DEFAULT};
use anyhow::Result;
use timestamping::backend::Memory;
use timestamping::proto::{InitRequest, InvokeRequest};
use timestamping::timestamp::LogicalTimestamp;
use timestamping::transitive::chaincode_client;
use timestamping::{Handler, Response};

#[tokio::test]
async fn test_init() -> Result<()> {
    let mut client = chaincode_client(Handler::new(Memory::new())).await?;

    let response = client.init(InitRequest {}).await?.into_inner();
    assert_eq!(Response::from(response), Response::success(Vec::new()));

    Ok(())
}

#[tokio::test]
async fn test_put_get() -> Result<()> {
    let mut client = chaincode_client(Handler::new(Memory::new())).await?;

    let put = client
        .invoke(InvokeRequest::new("put", ["foo"]))
        .await?
        .into_inner();
    assert_eq!(put.status, Response::OK);
    assert_eq!(put.payload, ENCODED_DEFAULT);

    let get = client
        .invoke(InvokeRequest::new("get", ["foo"]))
        .await?
        .into_inner();
    assert_eq!(get.payload, ENCODED_DEFAULT);

    Ok(())
}

#[tokio::test]
async fn test_failure_is_a_response() -> Result<()> {
    let mut client = chaincode_client(Handler::new(Memory::new())).await?;

    let response = client
        .invoke(InvokeRequest {
            function: "put".to_owned(),
            args: Vec::new(),
        })
        .await?
        .into_inner();
    assert_eq!(response.status, Response::ERROR);
    assert_eq!(response.message, "put operation must include one arguments");
    assert!(response.payload.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_unsupported_operation() -> Result<()> {
    let mut client = chaincode_client(Handler::new(Memory::new())).await?;

    let response = client
        .invoke(InvokeRequest {
            function: "delete".to_owned(),
            args: args(["foo"]),
        })
        .await?
        .into_inner();
    assert_eq!(
        Response::from(response),
        Response::success(b"Unsupported operation".to_vec())
    );

    Ok(())
}

#[tokio::test]
async fn test_get_unknown_key() -> Result<()> {
    let mut client = chaincode_client(Handler::new(Memory::new())).await?;

    let response = client
        .invoke(InvokeRequest::new("get", ["unknown-key"]))
        .await?
        .into_inner();
    assert_eq!(response.status, Response::OK);
    assert!(response.payload.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_concurrent_clients() -> Result<()> {
    let handler = Handler::with_timestamp_source(Memory::new(), LogicalTimestamp::starting_at(0));
    let client = chaincode_client(handler).await?.into_inner();

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            let mut client = client.clone();
            tokio::spawn(async move {
                client
                    .invoke(InvokeRequest::new("put", [format!("key-{i}")]))
                    .await
                    .map(tonic::Response::into_inner)
            })
        })
        .collect();

    let mut timestamps = Vec::new();
    for task in tasks {
        let response = task.await??;
        assert_eq!(response.status, Response::OK);
        timestamps.push(u64::from_be_bytes(response.payload.as_slice().try_into()?));
    }
    timestamps.sort_unstable();
    assert_eq!(timestamps, (0..16).collect::<Vec<_>>());

    Ok(())
}
