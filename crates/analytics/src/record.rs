use core_types::{
    Campaign, Category, ConversionEvent, Influencer, Payout, Platform, Product, Ratio,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// A conversion event with its payout and influencer broadcast onto it.
///
/// Either side may be missing when the event references an identity the
/// payout or influencer table does not contain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedRecord {
    pub event: ConversionEvent,
    pub payout: Option<Payout>,
    pub influencer: Option<Influencer>,
}

/// The joined, metric-augmented per-event record that every filter and
/// aggregation works on.
///
/// `roi` and `roas` are `None` when the event has no payout. When the payout
/// exists but is zero they hold whatever the division produced (an infinity
/// or `Undefined`), never a substitute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub event: ConversionEvent,
    pub payout: Option<Payout>,
    pub influencer: Option<Influencer>,
    pub roi: Option<Ratio>,
    pub roas: Option<Ratio>,
}

impl AnalysisRecord {
    pub fn revenue(&self) -> Decimal {
        self.event.revenue
    }

    pub fn total_payout(&self) -> Option<Decimal> {
        self.payout.as_ref().map(|p| p.total_payout)
    }

    pub fn campaign(&self) -> Campaign {
        self.event.campaign
    }

    pub fn product(&self) -> Product {
        self.event.product
    }

    /// The influencer's primary platform, the `platform` dimension of the record.
    pub fn platform(&self) -> Option<Platform> {
        self.influencer.as_ref().map(|i| i.platform)
    }

    pub fn name(&self) -> Option<&str> {
        self.influencer.as_ref().map(|i| i.name.as_str())
    }

    pub fn category(&self) -> Option<Category> {
        self.influencer.as_ref().map(|i| i.category)
    }

    pub fn follower_count(&self) -> Option<u64> {
        self.influencer.as_ref().map(|i| i.follower_count)
    }
}
