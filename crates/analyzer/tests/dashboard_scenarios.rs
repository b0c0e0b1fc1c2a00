//! End-to-end checks of join → metrics → filter → aggregate on hand-built tables.

use analytics::{AnalysisRecord, AnalyticsEngine};
use analyzer::{Analyzer, FilterCriteria, TopN};
use chrono::NaiveDate;
use configuration::FilterSettings;
use core_types::{
    Campaign, Category, ConversionEvent, Gender, Influencer, InfluencerId, Payout, PayoutBasis,
    Platform, Product, Ratio,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn influencer(id: u64, name: &str, category: Category, platform: Platform) -> Influencer {
    Influencer {
        influencer_id: InfluencerId(id),
        name: name.to_string(),
        category,
        gender: Gender::Male,
        follower_count: 40_000 + id * 1_000,
        platform,
    }
}

fn event(tracking_id: u64, influencer: u64, revenue: Decimal) -> ConversionEvent {
    ConversionEvent {
        tracking_id,
        source: Platform::Instagram,
        campaign: Campaign::SummerSale,
        influencer_id: InfluencerId(influencer),
        user_id: format!("u{tracking_id}"),
        product: Product::ProteinPowder,
        date: NaiveDate::from_ymd_opt(2024, 8, 15)
            .and_then(|d| d.and_hms_opt(18, 0, 0))
            .unwrap(),
        orders: 1,
        revenue,
    }
}

fn payout(influencer: u64, basis: PayoutBasis, rate: Decimal, orders: u64, total: Decimal) -> Payout {
    Payout {
        influencer_id: InfluencerId(influencer),
        basis,
        rate,
        orders,
        total_payout: total,
    }
}

fn analyse(
    events: &[ConversionEvent],
    payouts: &[Payout],
    influencers: &[Influencer],
) -> Vec<AnalysisRecord> {
    AnalyticsEngine::new()
        .analyse(events, payouts, influencers)
        .unwrap()
}

#[test]
fn join_is_complete_and_faithful() {
    let influencers = vec![
        influencer(1, "Asha", Category::Fitness, Platform::Instagram),
        influencer(2, "Ben", Category::Beauty, Platform::YouTube),
    ];
    let payouts = vec![payout(1, PayoutBasis::Order, dec!(10), 2, dec!(20))];
    let events = vec![
        event(1, 1, dec!(50)),
        event(2, 2, dec!(60)),
        event(3, 3, dec!(70)),
        event(4, 1, dec!(80)),
    ];

    let records = analyse(&events, &payouts, &influencers);

    assert_eq!(records.len(), events.len());
    for source in &events {
        let matching: Vec<&AnalysisRecord> = records
            .iter()
            .filter(|r| r.event.tracking_id == source.tracking_id)
            .collect();
        assert_eq!(matching.len(), 1);
        let record = matching[0];

        let expected_influencer = influencers
            .iter()
            .find(|i| i.influencer_id == source.influencer_id);
        let expected_payout = payouts
            .iter()
            .find(|p| p.influencer_id == source.influencer_id);
        assert_eq!(record.influencer.as_ref(), expected_influencer);
        assert_eq!(record.payout.as_ref(), expected_payout);
    }
}

#[test]
fn per_record_metrics_follow_the_formulas() {
    let influencers = vec![influencer(1, "Asha", Category::Fitness, Platform::Instagram)];
    let payouts = vec![payout(1, PayoutBasis::Post, dec!(25), 0, dec!(75))];
    let events = vec![event(1, 1, dec!(0)), event(2, 1, dec!(75)), event(3, 1, dec!(412.35))];

    for record in analyse(&events, &payouts, &influencers) {
        let revenue = record.revenue();
        let spend = record.total_payout().unwrap();
        assert_eq!(record.roi, Some(Ratio::Finite((revenue - spend) / spend)));
        assert_eq!(record.roas, Some(Ratio::Finite(revenue / spend)));
    }
}

#[test]
fn portfolio_ratios_are_guarded_when_spend_is_zero() {
    let influencers = vec![influencer(1, "Asha", Category::Fitness, Platform::Instagram)];
    let payouts = vec![payout(1, PayoutBasis::Post, dec!(100), 0, Decimal::ZERO)];
    let events = vec![event(1, 1, dec!(120))];

    let records = analyse(&events, &payouts, &influencers);
    assert!(matches!(records[0].roi, Some(Ratio::PositiveInfinity)));

    let report = Analyzer::default()
        .run_with_selection(&records, &FilterSettings::default())
        .unwrap();

    assert_eq!(report.kpis.total_spend, Decimal::ZERO);
    assert_eq!(report.kpis.roi, Decimal::ZERO);
    assert_eq!(report.kpis.roas, Decimal::ZERO);
    assert!(report.low_efficiency.is_empty());
}

#[test]
fn filtered_records_satisfy_every_dimension() {
    let influencers = vec![
        influencer(1, "Asha", Category::Fitness, Platform::Instagram),
        influencer(2, "Ben", Category::Beauty, Platform::YouTube),
        influencer(3, "Cleo", Category::Fashion, Platform::Twitter),
    ];
    let payouts = vec![
        payout(1, PayoutBasis::Order, dec!(5), 1, dec!(5)),
        payout(2, PayoutBasis::Order, dec!(5), 1, dec!(5)),
        payout(3, PayoutBasis::Order, dec!(5), 1, dec!(5)),
    ];
    let mut events = Vec::new();
    let mut id = 0;
    for influencer_id in 1..=3 {
        for campaign in Campaign::ALL {
            for product in Product::ALL {
                id += 1;
                let mut e = event(id, influencer_id, dec!(10));
                e.campaign = *campaign;
                e.product = *product;
                events.push(e);
            }
        }
    }
    let records = analyse(&events, &payouts, &influencers);

    let selections = [
        FilterSettings {
            platforms: Some(vec![Platform::YouTube]),
            campaigns: Some(vec![Campaign::NewLaunch, Campaign::WinterSpecial]),
            products: Some(vec![Product::GymWear]),
        },
        FilterSettings {
            platforms: None,
            campaigns: Some(vec![Campaign::SummerSale]),
            products: None,
        },
    ];
    for selection in &selections {
        let report = Analyzer::default()
            .run_with_selection(&records, selection)
            .unwrap();
        assert!(!report.records.is_empty());
        for record in &report.records {
            assert!(report.criteria.platforms.contains(&record.platform().unwrap()));
            assert!(report.criteria.campaigns.contains(&record.campaign()));
            assert!(report.criteria.products.contains(&record.product()));
        }
    }

    let nothing = FilterSettings {
        platforms: Some(vec![]),
        ..FilterSettings::default()
    };
    let report = Analyzer::default().run_with_selection(&records, &nothing).unwrap();
    assert!(report.records.is_empty());
}

#[test]
fn top_n_is_bounded_and_sorted() {
    let influencers: Vec<Influencer> = (1..=7)
        .map(|i| influencer(i, &format!("Creator {i}"), Category::Lifestyle, Platform::Instagram))
        .collect();
    let events: Vec<ConversionEvent> = (1..=7)
        .flat_map(|i| [event(i * 10, i, Decimal::from(i * 7)), event(i * 10 + 1, i, dec!(3))])
        .collect();
    let records = analyse(&events, &[], &influencers);
    let criteria = FilterCriteria::present_in(&records);

    for n in 5..=20 {
        let report = Analyzer::new(TopN::new(n).unwrap()).run(&records, &criteria).unwrap();

        assert_eq!(report.top_influencers.len(), n.min(7));
        assert!(
            report
                .top_influencers
                .windows(2)
                .all(|pair| pair[0].revenue >= pair[1].revenue)
        );
        assert_eq!(report.top_influencers[0].name, "Creator 7");
    }
}

#[test]
fn single_influencer_scenario() {
    let influencers = vec![influencer(1, "A", Category::Fitness, Platform::Instagram)];
    let payouts = vec![payout(1, PayoutBasis::Order, dec!(10), 3, dec!(30))];
    let events = vec![event(1, 1, dec!(100)), event(2, 1, dec!(200)), event(3, 1, dec!(300))];

    let records = analyse(&events, &payouts, &influencers);
    let report = Analyzer::default()
        .run_with_selection(&records, &FilterSettings::default())
        .unwrap();

    assert_eq!(report.kpis.total_revenue, dec!(600));
    assert_eq!(report.kpis.total_spend, dec!(30));
    assert_eq!(report.kpis.roi, dec!(19));
    assert_eq!(report.kpis.roas, dec!(20));

    let rois: Vec<Ratio> = records.iter().filter_map(|r| r.roi).collect();
    assert_eq!(rois[0], Ratio::divide(dec!(70), dec!(30)));
    assert_eq!(rois[1], Ratio::divide(dec!(170), dec!(30)));
    assert_eq!(rois[2], Ratio::Finite(dec!(9)));
    assert!(report.low_efficiency.is_empty());
    assert_eq!(report.insights.low_roi_count, 0);
    assert_eq!(report.insights.top_category, Some(Category::Fitness));
}

#[test]
fn low_efficiency_scenario() {
    let influencers = vec![
        influencer(1, "A", Category::Fitness, Platform::Instagram),
        influencer(2, "B", Category::Beauty, Platform::Instagram),
    ];
    let payouts = vec![
        payout(1, PayoutBasis::Order, dec!(10), 3, dec!(30)),
        payout(2, PayoutBasis::Post, dec!(50), 0, dec!(50)),
    ];
    let events = vec![
        event(1, 1, dec!(100)),
        event(2, 1, dec!(45)),
        event(3, 2, dec!(10)),
    ];

    let records = analyse(&events, &payouts, &influencers);
    let report = Analyzer::default()
        .run_with_selection(&records, &FilterSettings::default())
        .unwrap();

    let flagged: Vec<(u64, Ratio)> = report
        .low_efficiency
        .iter()
        .map(|row| (row.tracking_id, row.roi))
        .collect();
    assert_eq!(
        flagged,
        vec![(3, Ratio::Finite(dec!(-0.8))), (2, Ratio::Finite(dec!(0.5)))]
    );
    assert_eq!(report.low_efficiency[0].name.as_deref(), Some("B"));
    assert_eq!(report.low_efficiency[0].total_payout, Some(dec!(50)));
    assert_eq!(report.insights.low_roi_count, 2);
}

#[test]
fn report_serializes_non_finite_metrics_as_text() {
    let influencers = vec![influencer(1, "A", Category::Fitness, Platform::Instagram)];
    let payouts = vec![payout(1, PayoutBasis::Post, dec!(10), 0, Decimal::ZERO)];
    let events = vec![event(1, 1, Decimal::ZERO)];

    let records = analyse(&events, &payouts, &influencers);
    let report = Analyzer::default()
        .run_with_selection(&records, &FilterSettings::default())
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["records"][0]["roi"], "NaN");
    assert_eq!(json["insights"]["top_category"], "Fitness");
    assert_eq!(json["top_n"], 10);
}

#[test]
fn events_of_unknown_influencers_count_under_the_default_selection() {
    let influencers = vec![influencer(1, "A", Category::Fitness, Platform::Instagram)];
    let payouts = vec![
        payout(1, PayoutBasis::Order, dec!(10), 1, dec!(10)),
        payout(2, PayoutBasis::Post, dec!(40), 0, dec!(40)),
    ];
    let events = vec![event(1, 1, dec!(100)), event(2, 2, dec!(50))];
    let records = analyse(&events, &payouts, &influencers);

    let report = Analyzer::default()
        .run_with_selection(&records, &FilterSettings::default())
        .unwrap();

    assert_eq!(report.records.len(), 2);
    assert_eq!(report.kpis.total_revenue, dec!(150));
    assert_eq!(report.kpis.total_spend, dec!(50));
    assert_eq!(report.kpis.roas, dec!(3));
    assert_eq!(report.revenue_by_influencer.len(), 1);
    assert_eq!(report.revenue_by_influencer[0].revenue, dec!(100));

    let instagram_only = FilterSettings {
        platforms: Some(vec![Platform::Instagram]),
        ..FilterSettings::default()
    };
    let report = Analyzer::default()
        .run_with_selection(&records, &instagram_only)
        .unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.kpis.total_revenue, dec!(100));
    assert_eq!(report.kpis.total_spend, dec!(10));
}

#[test]
fn spend_follows_the_influencers_left_after_filtering() {
    let influencers = vec![
        influencer(1, "A", Category::Fitness, Platform::Instagram),
        influencer(2, "B", Category::Beauty, Platform::YouTube),
    ];
    let payouts = vec![
        payout(1, PayoutBasis::Order, dec!(10), 3, dec!(30)),
        payout(2, PayoutBasis::Post, dec!(70), 0, dec!(70)),
    ];
    let mut events = vec![
        event(1, 1, dec!(100)),
        event(2, 1, dec!(200)),
        event(3, 1, dec!(300)),
        event(4, 2, dec!(80)),
    ];
    events[2].campaign = Campaign::NewLaunch;
    let records = analyse(&events, &payouts, &influencers);

    let all = Analyzer::default()
        .run_with_selection(&records, &FilterSettings::default())
        .unwrap();
    assert_eq!(all.kpis.total_spend, dec!(100));

    let summer_on_instagram = FilterSettings {
        platforms: Some(vec![Platform::Instagram]),
        campaigns: Some(vec![Campaign::SummerSale]),
        products: None,
    };
    let report = Analyzer::default()
        .run_with_selection(&records, &summer_on_instagram)
        .unwrap();
    assert_eq!(report.records.len(), 2);
    assert_eq!(report.kpis.total_revenue, dec!(300));
    assert_eq!(report.kpis.total_spend, dec!(30));
    assert_eq!(report.kpis.roi, dec!(9));
}
