//! Storage module for uploaded documents
//!
//! Provides a directory-backed content store for CV uploads.

mod local_store;

pub use local_store::LocalFileStore;
