//! Generated gRPC bindings for the Hamdel service contracts.

pub mod user {
    tonic::include_proto!("user");
}
