use analytics::AnalysisRecord;
use analytics::metrics::compute;
use chrono::NaiveDate;
use core_types::{
    Campaign, Category, ConversionEvent, Gender, Influencer, InfluencerId, Payout, PayoutBasis,
    Platform, Product,
};
use rust_decimal::Decimal;

/// Builds one `AnalysisRecord` the way the analytics stage would.
pub struct RecordBuilder {
    event: ConversionEvent,
    influencer: Option<Influencer>,
    total_payout: Option<Decimal>,
}

impl RecordBuilder {
    pub fn new(tracking_id: u64, revenue: Decimal) -> Self {
        Self {
            event: ConversionEvent {
                tracking_id,
                source: Platform::Instagram,
                campaign: Campaign::SummerSale,
                influencer_id: InfluencerId(1),
                user_id: format!("user-{tracking_id}"),
                product: Product::Vitamins,
                date: NaiveDate::from_ymd_opt(2024, 4, 1)
                    .and_then(|d| d.and_hms_opt(10, 0, 0))
                    .unwrap(),
                orders: 1,
                revenue,
            },
            influencer: Some(Influencer {
                influencer_id: InfluencerId(1),
                name: "Creator 1".to_string(),
                category: Category::Fitness,
                gender: Gender::Female,
                follower_count: 25_000,
                platform: Platform::Instagram,
            }),
            total_payout: Some(Decimal::from(50)),
        }
    }

    pub fn influencer(mut self, id: u64, name: &str) -> Self {
        self.event.influencer_id = InfluencerId(id);
        if let Some(influencer) = self.influencer.as_mut() {
            influencer.influencer_id = InfluencerId(id);
            influencer.name = name.to_string();
        }
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        if let Some(influencer) = self.influencer.as_mut() {
            influencer.category = category;
        }
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        if let Some(influencer) = self.influencer.as_mut() {
            influencer.platform = platform;
        }
        self
    }

    pub fn campaign(mut self, campaign: Campaign) -> Self {
        self.event.campaign = campaign;
        self
    }

    pub fn product(mut self, product: Product) -> Self {
        self.event.product = product;
        self
    }

    pub fn payout(mut self, total_payout: Decimal) -> Self {
        self.total_payout = Some(total_payout);
        self
    }

    pub fn without_payout(mut self) -> Self {
        self.total_payout = None;
        self
    }

    pub fn without_influencer(mut self) -> Self {
        self.influencer = None;
        self
    }

    pub fn build(self) -> AnalysisRecord {
        let payout = self.total_payout.map(|total_payout| Payout {
            influencer_id: self.event.influencer_id,
            basis: PayoutBasis::Order,
            rate: Decimal::TEN,
            orders: 1,
            total_payout,
        });
        let metrics = payout
            .as_ref()
            .map(|p| compute(self.event.revenue, p.total_payout));

        AnalysisRecord {
            event: self.event,
            payout,
            influencer: self.influencer,
            roi: metrics.map(|(roi, _)| roi),
            roas: metrics.map(|(_, roas)| roas),
        }
    }
}

pub fn record(tracking_id: u64, revenue: Decimal) -> AnalysisRecord {
    RecordBuilder::new(tracking_id, revenue).build()
}
