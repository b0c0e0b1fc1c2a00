use analytics::AnalysisRecord;
use configuration::FilterSettings;
use core_types::{Campaign, Platform, Product};
use serde::Serialize;
use std::collections::BTreeSet;

/// The allowed values of each filter dimension.
///
/// A record passes when its platform, campaign and product are each in their
/// set. An empty set lets nothing through; it never means "no filter".
///
/// A record without a matched influencer has no platform. It passes the
/// platform dimension only while `unknown_platform` is set, which is the case
/// when that dimension is left unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub platforms: BTreeSet<Platform>,
    pub unknown_platform: bool,
    pub campaigns: BTreeSet<Campaign>,
    pub products: BTreeSet<Product>,
}

impl FilterCriteria {
    /// Every value that occurs in `records`, i.e. the options a user can pick from.
    ///
    /// Records without a matched influencer add the unknown platform option.
    pub fn present_in(records: &[AnalysisRecord]) -> Self {
        Self {
            platforms: records.iter().filter_map(|r| r.platform()).collect(),
            unknown_platform: records.iter().any(|r| r.platform().is_none()),
            campaigns: records.iter().map(|r| r.campaign()).collect(),
            products: records.iter().map(|r| r.product()).collect(),
        }
    }

    /// Narrows `options` to a user selection. A dimension left as `None` keeps
    /// every option. An explicit platform list names known platforms only, so
    /// it drops the unknown one.
    pub fn select(options: &FilterCriteria, selection: &FilterSettings) -> Self {
        fn pick<T: Ord + Copy>(options: &BTreeSet<T>, chosen: &Option<Vec<T>>) -> BTreeSet<T> {
            match chosen {
                Some(values) => values.iter().copied().collect(),
                None => options.clone(),
            }
        }

        Self {
            platforms: pick(&options.platforms, &selection.platforms),
            unknown_platform: options.unknown_platform && selection.platforms.is_none(),
            campaigns: pick(&options.campaigns, &selection.campaigns),
            products: pick(&options.products, &selection.products),
        }
    }

    pub fn matches(&self, record: &AnalysisRecord) -> bool {
        let platform = match record.platform() {
            Some(p) => self.platforms.contains(&p),
            None => self.unknown_platform,
        };
        platform
            && self.campaigns.contains(&record.campaign())
            && self.products.contains(&record.product())
    }

    /// The passing records, in input order. The input is not touched.
    pub fn apply<'a>(&self, records: &'a [AnalysisRecord]) -> Vec<&'a AnalysisRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}
