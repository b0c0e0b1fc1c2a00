use crate::filter::FilterCriteria;
use crate::views::{
    CategoryRevenue, InfluencerRevenue, LOW_ROI_THRESHOLD, LowEfficiencyRow, PortfolioKpis,
    ReachPoint, TopN,
};
use analytics::AnalysisRecord;
use core_types::Category;
use serde::Serialize;

/// Everything the dashboard shows for one filter selection.
///
/// The report borrows the filtered records from the full record set rather
/// than copying them.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport<'a> {
    /// The options each filter dimension offered.
    pub options: FilterCriteria,
    /// The selection that produced this report.
    pub criteria: FilterCriteria,
    pub records: Vec<&'a AnalysisRecord>,
    pub kpis: PortfolioKpis,
    pub revenue_by_influencer: Vec<InfluencerRevenue>,
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub top_n: TopN,
    pub top_influencers: Vec<InfluencerRevenue>,
    pub low_efficiency: Vec<LowEfficiencyRow>,
    pub reach: Vec<ReachPoint>,
    pub insights: Insights,
}

/// The scalars behind the narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub top_category: Option<Category>,
    pub low_roi_count: usize,
}

impl Insights {
    /// Human-readable sentences for the insights panel.
    pub fn narrative(&self) -> Vec<String> {
        let top_category = match self.top_category {
            Some(category) => format!("Top category by revenue: {category}."),
            None => "Top category by revenue: no data.".to_string(),
        };
        let low_roi = match self.low_roi_count {
            1 => format!("1 conversion event has ROI below {LOW_ROI_THRESHOLD}."),
            n => format!("{n} conversion events have ROI below {LOW_ROI_THRESHOLD}."),
        };
        vec![top_category, low_roi]
    }
}
