use crate::error::AnalyticsError;
use crate::join::left_join;
use crate::metrics::attach_metrics;
use crate::record::AnalysisRecord;
use core_types::{ConversionEvent, Influencer, Payout};

/// A stateless calculator that turns the input tables into `AnalysisRecord`s.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point: join, then derive the per-record metrics.
    ///
    /// # Arguments
    ///
    /// * `events` - The conversion events, the fact table. One output record per row.
    /// * `payouts` - At most one payout per influencer.
    /// * `influencers` - At most one row per influencer.
    ///
    /// # Returns
    ///
    /// A `Result` containing the records, in event order, or an `AnalyticsError`
    /// when a lookup table holds a duplicate identity.
    pub fn analyse(
        &self,
        events: &[ConversionEvent],
        payouts: &[Payout],
        influencers: &[Influencer],
    ) -> Result<Vec<AnalysisRecord>, AnalyticsError> {
        let joined = left_join(events, payouts, influencers)?;

        let missing_payout = joined.iter().filter(|r| r.payout.is_none()).count();
        let missing_influencer = joined.iter().filter(|r| r.influencer.is_none()).count();
        if missing_payout > 0 || missing_influencer > 0 {
            tracing::warn!(
                missing_payout,
                missing_influencer,
                "Some events reference influencers absent from the lookup tables."
            );
        }

        let records = attach_metrics(&joined);

        let non_finite = records
            .iter()
            .filter(|r| r.roi.is_some_and(|roi| !roi.is_finite()))
            .count();
        if non_finite > 0 {
            tracing::warn!(
                non_finite,
                "Records with a zero payout carry non-finite ROI/ROAS values."
            );
        }

        tracing::info!(records = records.len(), "Joined and scored conversion events.");
        Ok(records)
    }
}
