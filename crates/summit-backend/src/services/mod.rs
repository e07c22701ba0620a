//! Document store adapters.
//!
//! This module provides the [`DocumentStore`] abstraction over named
//! collections of semi-structured documents, with a MongoDB implementation
//! for production and an in-memory implementation suitable for development
//! and testing.

pub mod documents;
pub mod mongo;

pub use documents::*;
pub use mongo::MongoStore;
