//! Test utilities for Hamdel services.
//!
//! Mints real JWTs (valid, expired, wrong-kind) so token paths can be tested
//! without a running auth service. Import in `#[cfg(test)]` blocks and
//! dev-dependencies only, never in production code.

pub mod token;
