//! # Kpiboard Analyzer
//!
//! The filter and aggregation layer: given the scored records and a filter
//! selection, it builds every view the dashboard presents.
//!
//! ## Public API
//!
//! - `Analyzer`: runs filter then aggregation and returns a `DashboardReport`.
//! - `FilterCriteria`: the allowed values per dimension and the filter itself.
//! - `views`: the individual aggregations, usable on their own.
//! - `AnalyzerError`: the specific error types that can be returned from this crate.

use crate::error::AnalyzerError;
use analytics::AnalysisRecord;
use configuration::FilterSettings;

pub mod error;
pub mod filter;
pub mod report;
pub mod views;

#[cfg(test)]
mod test_support;

pub use filter::FilterCriteria;
pub use report::{DashboardReport, Insights};
pub use views::{
    CategoryRevenue, InfluencerRevenue, LOW_ROI_THRESHOLD, LowEfficiencyRow, PortfolioKpis,
    ReachPoint, TopN,
};

/// The main analysis engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Analyzer {
    top_n: TopN,
}

impl Analyzer {
    pub fn new(top_n: TopN) -> Self {
        Self { top_n }
    }

    /// Resolves `selection` against the values present in `records`, then runs
    /// `run` with the resulting criteria.
    pub fn run_with_selection<'a>(
        &self,
        records: &'a [AnalysisRecord],
        selection: &FilterSettings,
    ) -> Result<DashboardReport<'a>, AnalyzerError> {
        let options = FilterCriteria::present_in(records);
        let criteria = FilterCriteria::select(&options, selection);
        self.build(records, options, criteria)
    }

    /// Filters `records` and computes every view over the survivors.
    ///
    /// An empty survivor set is not an error: sums come out as zero and every
    /// grouped view is empty.
    pub fn run<'a>(
        &self,
        records: &'a [AnalysisRecord],
        criteria: &FilterCriteria,
    ) -> Result<DashboardReport<'a>, AnalyzerError> {
        let options = FilterCriteria::present_in(records);
        self.build(records, options, criteria.clone())
    }

    fn build<'a>(
        &self,
        records: &'a [AnalysisRecord],
        options: FilterCriteria,
        criteria: FilterCriteria,
    ) -> Result<DashboardReport<'a>, AnalyzerError> {
        // 1. Filter
        let filtered = criteria.apply(records);
        tracing::info!(
            total = records.len(),
            matched = filtered.len(),
            "Applied dashboard filters."
        );

        // 2. Aggregate
        let kpis = views::portfolio_kpis(&filtered)?;
        let revenue_by_influencer = views::revenue_by_influencer(&filtered)?;
        let revenue_by_category = views::revenue_by_category(&filtered)?;
        let top_influencers = views::top_influencers(&revenue_by_influencer, self.top_n);
        let low_efficiency = views::low_efficiency(&filtered);
        let reach = views::reach_points(&filtered);
        let insights = Insights {
            top_category: views::top_category(&revenue_by_category),
            low_roi_count: views::low_roi_count(&filtered),
        };

        tracing::debug!(
            influencers = revenue_by_influencer.len(),
            categories = revenue_by_category.len(),
            low_efficiency = low_efficiency.len(),
            "Built dashboard views."
        );

        Ok(DashboardReport {
            options,
            criteria,
            records: filtered,
            kpis,
            revenue_by_influencer,
            revenue_by_category,
            top_n: self.top_n,
            top_influencers,
            low_efficiency,
            reach,
            insights,
        })
    }
}
