//! Cross-cutting service plumbing shared by the Hamdel services:
//! health endpoints, request-id middleware, tracing setup, and small
//! serde / sea-orm helpers.

pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
