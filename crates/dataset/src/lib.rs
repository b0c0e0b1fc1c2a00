//! # Kpiboard Dataset Crate
//!
//! This crate is the boundary between the four CSV tables on disk and the
//! typed, in-memory `Snapshot` the rest of the application works on.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Adapter:** All file and CSV handling lives here. Later stages only
//!   ever see typed records.
//! - **Validate at the Boundary:** Missing columns, untyped cells, duplicate
//!   identities and negative amounts are rejected when the snapshot is built,
//!   not discovered halfway through an aggregation.
//! - **Immutable Snapshot:** A `Snapshot` cannot be changed after construction. It is
//!   built once per session and passed by reference.
//!
//! ## Public API
//!
//! - `load_snapshot` / `write_snapshot`: read and write a dataset directory.
//! - `generate`: builds a synthetic dataset for demos and tests.
//! - `Snapshot`: the validated tables.
//! - `DatasetError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod error;
pub mod generator;
pub mod loader;
pub mod schema;
pub mod snapshot;
pub mod writer;

// Re-export the key components to create a clean, public-facing API.
pub use error::DatasetError;
pub use generator::generate;
pub use loader::load_snapshot;
pub use snapshot::{Snapshot, SnapshotSummary};
pub use writer::write_snapshot;
