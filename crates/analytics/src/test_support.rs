use chrono::NaiveDate;
use core_types::{
    Campaign, Category, ConversionEvent, Gender, Influencer, InfluencerId, Payout, PayoutBasis,
    Platform, Product,
};
use rust_decimal::Decimal;

pub fn event(tracking_id: u64, influencer: u64, revenue: Decimal) -> ConversionEvent {
    ConversionEvent {
        tracking_id,
        source: Platform::Instagram,
        campaign: Campaign::SummerSale,
        influencer_id: InfluencerId(influencer),
        user_id: format!("user-{tracking_id}"),
        product: Product::Vitamins,
        date: NaiveDate::from_ymd_opt(2024, 6, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap(),
        orders: 1,
        revenue,
    }
}

pub fn payout(influencer: u64, total_payout: Decimal) -> Payout {
    Payout {
        influencer_id: InfluencerId(influencer),
        basis: PayoutBasis::Order,
        rate: Decimal::TEN,
        orders: 3,
        total_payout,
    }
}

pub fn influencer(id: u64, name: &str) -> Influencer {
    Influencer {
        influencer_id: InfluencerId(id),
        name: name.to_string(),
        category: Category::Fitness,
        gender: Gender::Female,
        follower_count: 120_000,
        platform: Platform::YouTube,
    }
}
