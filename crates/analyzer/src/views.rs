//! The aggregate views of the dashboard.
//!
//! Every function takes the filtered records and builds a fresh result.
//! Grouped views accumulate in key order and are then stably sorted by
//! descending revenue, so equal revenues keep ascending key order.

use crate::error::AnalyzerError;
use analytics::AnalysisRecord;
use configuration::TOP_N_RANGE;
use core_types::{Category, InfluencerId, Platform, Ratio};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Records whose per-record ROI is below this are flagged as low efficiency.
pub const LOW_ROI_THRESHOLD: Decimal = Decimal::ONE;

/// Portfolio totals and the guarded portfolio ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortfolioKpis {
    pub total_revenue: Decimal,
    pub total_spend: Decimal,
    /// `(revenue - spend) / spend`, or zero when spend is not positive.
    pub roi: Decimal,
    /// `revenue / spend`, or zero when spend is not positive.
    pub roas: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfluencerRevenue {
    pub name: String,
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRevenue {
    pub category: Category,
    pub revenue: Decimal,
}

/// One flagged conversion event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowEfficiencyRow {
    pub tracking_id: u64,
    pub name: Option<String>,
    pub roi: Ratio,
    pub revenue: Decimal,
    pub total_payout: Option<Decimal>,
}

/// A point of the follower-count versus revenue scatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachPoint {
    pub name: String,
    pub platform: Platform,
    pub follower_count: u64,
    pub revenue: Decimal,
}

/// The size of the top-N influencer view, always within `TOP_N_RANGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopN(usize);

impl TopN {
    pub const DEFAULT: TopN = TopN(10);

    pub fn new(value: usize) -> Result<Self, AnalyzerError> {
        if TOP_N_RANGE.contains(&value) {
            Ok(TopN(value))
        } else {
            Err(AnalyzerError::InvalidTopN {
                value,
                min: *TOP_N_RANGE.start(),
                max: *TOP_N_RANGE.end(),
            })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn add(total: Decimal, value: Decimal, what: &'static str) -> Result<Decimal, AnalyzerError> {
    total.checked_add(value).ok_or(AnalyzerError::Overflow(what))
}

/// Total revenue and spend with the portfolio ratios.
///
/// Every event of an influencer carries the same payout row, so spend counts
/// each influencer's payout once, however many of their events survive the
/// filter. Records without a payout add nothing to spend. Unlike the
/// per-record metrics, a non-positive spend yields zero ratios so the
/// headline figures are always finite.
pub fn portfolio_kpis(records: &[&AnalysisRecord]) -> Result<PortfolioKpis, AnalyzerError> {
    let mut total_revenue = Decimal::ZERO;
    let mut total_spend = Decimal::ZERO;
    let mut paid: BTreeSet<InfluencerId> = BTreeSet::new();
    for record in records {
        total_revenue = add(total_revenue, record.revenue(), "total revenue")?;
        if let Some(payout) = &record.payout {
            if paid.insert(payout.influencer_id) {
                total_spend = add(total_spend, payout.total_payout, "total spend")?;
            }
        }
    }

    let (roi, roas) = if total_spend <= Decimal::ZERO {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let net = total_revenue
            .checked_sub(total_spend)
            .ok_or(AnalyzerError::Overflow("portfolio ROI"))?;
        (
            net.checked_div(total_spend)
                .ok_or(AnalyzerError::Overflow("portfolio ROI"))?,
            total_revenue
                .checked_div(total_spend)
                .ok_or(AnalyzerError::Overflow("portfolio ROAS"))?,
        )
    };

    Ok(PortfolioKpis {
        total_revenue,
        total_spend,
        roi,
        roas,
    })
}

/// Sums revenue per key, skipping records the key function cannot place.
fn revenue_by<'a, K, F>(
    records: &[&'a AnalysisRecord],
    key: F,
) -> Result<Vec<(K, Decimal)>, AnalyzerError>
where
    K: Ord,
    F: Fn(&'a AnalysisRecord) -> Option<K>,
{
    let mut groups: BTreeMap<K, Decimal> = BTreeMap::new();
    for &record in records {
        let Some(k) = key(record) else { continue };
        let slot = groups.entry(k).or_insert(Decimal::ZERO);
        *slot = add(*slot, record.revenue(), "grouped revenue")?;
    }

    let mut rows: Vec<(K, Decimal)> = groups.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(rows)
}

/// Revenue per influencer display name, largest first.
pub fn revenue_by_influencer(
    records: &[&AnalysisRecord],
) -> Result<Vec<InfluencerRevenue>, AnalyzerError> {
    Ok(revenue_by(records, |r| r.name())?
        .into_iter()
        .map(|(name, revenue)| InfluencerRevenue {
            name: name.to_string(),
            revenue,
        })
        .collect())
}

/// Revenue per content category, largest first.
pub fn revenue_by_category(
    records: &[&AnalysisRecord],
) -> Result<Vec<CategoryRevenue>, AnalyzerError> {
    Ok(revenue_by(records, |r| r.category())?
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue { category, revenue })
        .collect())
}

/// The first `n` rows of the influencer ranking.
pub fn top_influencers(by_influencer: &[InfluencerRevenue], n: TopN) -> Vec<InfluencerRevenue> {
    by_influencer.iter().take(n.get()).cloned().collect()
}

/// The category with the most revenue, or `None` when nothing was grouped.
pub fn top_category(by_category: &[CategoryRevenue]) -> Option<Category> {
    by_category.first().map(|row| row.category)
}

fn is_low_roi(record: &AnalysisRecord) -> bool {
    record.roi.is_some_and(|roi| roi.is_below(LOW_ROI_THRESHOLD))
}

/// Every record whose per-record ROI is below one, worst first.
///
/// This works on the unguarded per-record ROI. A zero payout gives positive
/// infinity or `Undefined`, neither of which is below one, so those records
/// are not flagged; a negative infinity would be flagged and sorted first.
/// Records without a payout have no ROI and are never flagged.
pub fn low_efficiency(records: &[&AnalysisRecord]) -> Vec<LowEfficiencyRow> {
    let mut rows: Vec<LowEfficiencyRow> = records
        .iter()
        .filter(|r| is_low_roi(r))
        .filter_map(|r| {
            Some(LowEfficiencyRow {
                tracking_id: r.event.tracking_id,
                name: r.name().map(str::to_string),
                roi: r.roi?,
                revenue: r.revenue(),
                total_payout: r.total_payout(),
            })
        })
        .collect();

    // Every flagged ROI is ordered, so the fallback never decides anything.
    rows.sort_by(|a, b| a.roi.partial_cmp(&b.roi).unwrap_or(std::cmp::Ordering::Equal));
    rows
}

/// How many records `low_efficiency` would flag.
pub fn low_roi_count(records: &[&AnalysisRecord]) -> usize {
    records.iter().filter(|r| is_low_roi(r)).count()
}

/// Follower count against revenue for every record with a known influencer.
pub fn reach_points(records: &[&AnalysisRecord]) -> Vec<ReachPoint> {
    records
        .iter()
        .filter_map(|r| {
            let influencer = r.influencer.as_ref()?;
            Some(ReachPoint {
                name: influencer.name.clone(),
                platform: influencer.platform,
                follower_count: influencer.follower_count,
                revenue: r.revenue(),
            })
        })
        .collect()
}
