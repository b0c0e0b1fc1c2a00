use crate::error::DatasetError;
use crate::schema::{INFLUENCERS, PAYOUTS, POSTS, TRACKING};
use core_types::{ConversionEvent, Influencer, InfluencerId, Payout, Post};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;

/// The four input tables, validated and frozen for one session.
///
/// A snapshot is built once and handed to every stage by reference; there is
/// no way to mutate it after construction.
#[derive(Debug, Clone)]
pub struct Snapshot {
    influencers: Vec<Influencer>,
    posts: Vec<Post>,
    events: Vec<ConversionEvent>,
    payouts: Vec<Payout>,
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub influencers: usize,
    pub posts: usize,
    pub events: usize,
    pub payouts: usize,
    /// Events whose influencer is missing from the influencer table.
    pub unresolved_events: usize,
}

impl Snapshot {
    /// Validates the tables and freezes them.
    ///
    /// Rejects duplicate identities, events with no orders and negative
    /// currency amounts. References to unknown influencers are tolerated and
    /// logged; the join handles them as gaps.
    pub fn new(
        influencers: Vec<Influencer>,
        posts: Vec<Post>,
        events: Vec<ConversionEvent>,
        payouts: Vec<Payout>,
    ) -> Result<Self, DatasetError> {
        // --- 1. Unique identities ---
        ensure_unique(INFLUENCERS.name, "influencer_id", influencers.iter().map(|i| i.influencer_id))?;
        ensure_unique(PAYOUTS.name, "influencer_id", payouts.iter().map(|p| p.influencer_id))?;
        ensure_unique(POSTS.name, "post_id", posts.iter().map(|p| p.post_id))?;
        ensure_unique(TRACKING.name, "tracking_id", events.iter().map(|e| e.tracking_id))?;

        // --- 2. Value ranges ---
        if let Some(event) = events.iter().find(|e| e.orders == 0) {
            return Err(integrity(
                TRACKING.name,
                format!("event {} has zero orders", event.tracking_id),
            ));
        }
        if let Some(event) = events.iter().find(|e| e.revenue < Decimal::ZERO) {
            return Err(integrity(
                TRACKING.name,
                format!("event {} has negative revenue {}", event.tracking_id, event.revenue),
            ));
        }
        if let Some(payout) = payouts
            .iter()
            .find(|p| p.rate < Decimal::ZERO || p.total_payout < Decimal::ZERO)
        {
            return Err(integrity(
                PAYOUTS.name,
                format!("payout for influencer {} has a negative amount", payout.influencer_id),
            ));
        }

        let snapshot = Self {
            influencers,
            posts,
            events,
            payouts,
        };

        // --- 3. Referential gaps (recoverable) ---
        let unresolved = snapshot.unresolved_events();
        if unresolved > 0 {
            tracing::warn!(
                unresolved,
                "Conversion events reference influencers missing from the influencer table."
            );
        }

        Ok(snapshot)
    }

    pub fn influencers(&self) -> &[Influencer] {
        &self.influencers
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn events(&self) -> &[ConversionEvent] {
        &self.events
    }

    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }

    /// Number of posts published by `influencer`.
    pub fn post_count(&self, influencer: InfluencerId) -> usize {
        self.posts.iter().filter(|p| p.influencer_id == influencer).count()
    }

    pub fn unresolved_events(&self) -> usize {
        let known: HashSet<InfluencerId> =
            self.influencers.iter().map(|i| i.influencer_id).collect();
        self.events
            .iter()
            .filter(|e| !known.contains(&e.influencer_id))
            .count()
    }

    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            influencers: self.influencers.len(),
            posts: self.posts.len(),
            events: self.events.len(),
            payouts: self.payouts.len(),
            unresolved_events: self.unresolved_events(),
        }
    }
}

fn ensure_unique<K, I>(table: &'static str, column: &str, keys: I) -> Result<(), DatasetError>
where
    K: Eq + Hash + std::fmt::Display,
    I: IntoIterator<Item = K>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if seen.contains(&key) {
            return Err(integrity(table, format!("duplicate {column} {key}")));
        }
        seen.insert(key);
    }
    Ok(())
}

fn integrity(table: &'static str, message: String) -> DatasetError {
    DatasetError::Integrity { table, message }
}
