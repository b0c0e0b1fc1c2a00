//! # Kpiboard Core Types
//!
//! Layer 0 of the workspace: the typed records of the four input tables and
//! the numeric model shared by every later stage.
//!
//! ## Public API
//!
//! - `Influencer`, `Post`, `ConversionEvent`, `Payout`: one struct per input table.
//! - `Category`, `Gender`, `Platform`, `Campaign`, `Product`, `PayoutBasis`: the closed
//!   label sets of the input tables.
//! - `Ratio`: a division result that can carry the outcomes of dividing by zero.
//! - `fields`: lenient codecs for timestamp and decimal cells.

pub mod enums;
pub mod error;
pub mod fields;
pub mod ratio;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{Campaign, Category, Gender, PayoutBasis, Platform, Product};
pub use error::CoreError;
pub use ratio::Ratio;
pub use structs::{ConversionEvent, Influencer, InfluencerId, Payout, Post};
