use core_types::InfluencerId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsError {
    /// A lookup side of the join must hold at most one row per identity,
    /// otherwise an event would fan out into several records.
    #[error("Join key {id} appears more than once in the {table} table")]
    DuplicateKey { table: &'static str, id: InfluencerId },
}
