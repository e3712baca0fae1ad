//! Auth types shared across Hamdel services.
//!
//! Provides JWT validation, the `Bearer` header extractor and the admin
//! session cookie builder.

pub mod bearer;
pub mod cookie;
pub mod token;
