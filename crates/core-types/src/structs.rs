use crate::enums::{Campaign, Category, Gender, PayoutBasis, Platform, Product};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identity shared by an influencer, their posts, their conversion events
/// and their payout. Every join in the system is keyed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfluencerId(pub u64);

impl fmt::Display for InfluencerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A creator under contract. One record per identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Influencer {
    pub influencer_id: InfluencerId,
    pub name: String,
    pub category: Category,
    pub gender: Gender,
    pub follower_count: u64,
    /// The influencer's primary platform.
    pub platform: Platform,
}

/// A single published piece of content. Kept for raw display only; revenue
/// attribution is event-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: u64,
    pub influencer_id: InfluencerId,
    pub platform: Platform,
    #[serde(with = "crate::fields::timestamp")]
    pub date: NaiveDateTime,
    pub url: String,
    pub caption: String,
    pub reach: u64,
    pub likes: u64,
    pub comments: u64,
}

/// An attributed conversion, the primary fact table. Revenue and orders live here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionEvent {
    pub tracking_id: u64,
    /// The platform that referred the conversion.
    pub source: Platform,
    pub campaign: Campaign,
    pub influencer_id: InfluencerId,
    /// Opaque end-user identifier.
    pub user_id: String,
    pub product: Product,
    #[serde(with = "crate::fields::timestamp")]
    pub date: NaiveDateTime,
    pub orders: u32,
    #[serde(with = "crate::fields::decimal")]
    pub revenue: Decimal,
}

/// What an influencer was paid. One record per influencer.
///
/// `total_payout` was computed once when the payout was generated
/// (`rate * orders` for the order basis, `rate * post count` for the post basis)
/// and is authoritative; nothing downstream recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub influencer_id: InfluencerId,
    pub basis: PayoutBasis,
    #[serde(with = "crate::fields::decimal")]
    pub rate: Decimal,
    /// Orders the payout was computed from; zero for the post basis.
    pub orders: u64,
    #[serde(with = "crate::fields::decimal")]
    pub total_payout: Decimal,
}
