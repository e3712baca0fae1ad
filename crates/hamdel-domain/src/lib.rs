//! Domain types shared across all Hamdel services.
//!
//! Pure data types with no framework dependencies: closed enums with their
//! wire strings, and pagination.

pub mod content;
pub mod mood;
pub mod pagination;
pub mod room;
