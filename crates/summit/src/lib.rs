//! The shared library for the Health & Safety Summit backend.
//!
//! This library provides the data structures, error types, typed identifiers,
//! logging setup and registration schema validation used by the server crate.

pub mod data;
pub mod errors;
pub mod id;
pub mod log;
pub mod validate;

pub use bson;
pub use serde;
pub use serde_json;
pub use tracing;
