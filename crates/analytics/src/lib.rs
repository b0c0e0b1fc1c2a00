//! # Kpiboard Analytics Engine
//!
//! This crate turns the raw input tables into the per-event `AnalysisRecord`
//! set that every dashboard view is computed from.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files or
//!   configuration. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `AnalyticsEngine` takes borrowed tables and returns
//!   freshly built records. Nothing it is given is mutated.
//!
//! ## Public API
//!
//! - `left_join`: the hash join of events to payouts and influencers.
//! - `attach_metrics`: the per-record ROI/ROAS calculation.
//! - `AnalyticsEngine`: runs both stages and logs referential gaps.
//! - `AnalysisRecord`: the joined, metric-augmented record.
//! - `AnalyticsError`: the specific error types that can be returned from this crate.

pub mod engine;
pub mod error;
pub mod join;
pub mod metrics;
pub mod record;

#[cfg(test)]
mod test_support;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use join::left_join;
pub use metrics::attach_metrics;
pub use record::{AnalysisRecord, JoinedRecord};
