use tonic_build::manual::{Builder, Method, Service};

/// Build a unary method on the chaincode service. Messages are hand-written `prost` structs in
/// `src/proto.rs`, so no `.proto` file (and no `protoc`) is involved.
fn unary(name: &str, route_name: &str, input_type: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route_name)
        .input_type(input_type)
        .output_type("crate::proto::Response")
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    let chaincode = Service::builder()
        .name("Chaincode")
        .package("timestamping")
        .method(unary("init", "Init", "crate::proto::InitRequest"))
        .method(unary("invoke", "Invoke", "crate::proto::InvokeRequest"))
        .build();

    Builder::new().compile(&[chaincode]);
}
