//! Community chat service: rooms, challenges, messages, challenge answers,
//! moods, and content suggestions.
//!
//! Every endpoint sits behind the bearer gate in [`access`]; callers are
//! resolved against the auth service over gRPC on each request.

pub mod access;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod router;
pub mod state;
pub mod usecase;
