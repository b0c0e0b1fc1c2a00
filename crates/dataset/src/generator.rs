use crate::error::DatasetError;
use crate::snapshot::Snapshot;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use configuration::GeneratorSettings;
use core_types::{
    Campaign, Category, ConversionEvent, Gender, Influencer, InfluencerId, Payout, PayoutBasis,
    Platform, Post, Product,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashMap;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Maya", "Liam", "Priya", "Noah", "Zoe", "Kabir", "Elena", "Omar", "Isha", "Lucas",
    "Hana", "Rohan", "Clara", "Mateo", "Anika", "Theo", "Sara", "Vikram", "Nora",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Walker", "Iyer", "Garcia", "Kapoor", "Nguyen", "Mehta", "Rossi", "Khan", "Silva",
    "Patel", "Fischer", "Reddy", "Moreau", "Das", "Okafor",
];

const CAPTION_WORDS: &[&str] = &[
    "energy", "morning", "routine", "protein", "strength", "recovery", "daily", "glow", "balance",
    "training", "fuel", "wellness", "mindful", "goals", "progress", "fresh", "habit", "focus",
];

/// Builds a synthetic dataset with the shape and value ranges of real campaign exports.
///
/// `anchor` is "now": every timestamp falls between January 1st of its year
/// and the anchor itself. With a `seed` in `settings` the output is fully
/// reproducible.
pub fn generate(settings: &GeneratorSettings, anchor: NaiveDateTime) -> Result<Snapshot, DatasetError> {
    if settings.influencers == 0 {
        return Err(DatasetError::Generation(
            "at least one influencer is required".to_string(),
        ));
    }

    let rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut generator = Generator::new(rng, anchor);

    let influencers = generator.influencers(settings.influencers);
    let posts = generator.posts(&influencers, settings.posts);
    let events = generator.events(&influencers, settings.events);
    let payouts = generator.payouts(&influencers, &posts, &events);

    tracing::info!(
        influencers = influencers.len(),
        posts = posts.len(),
        events = events.len(),
        "Generated synthetic dataset."
    );
    Snapshot::new(influencers, posts, events, payouts)
}

struct Generator {
    rng: StdRng,
    window_start: NaiveDateTime,
    window_secs: i64,
}

impl Generator {
    fn new(rng: StdRng, anchor: NaiveDateTime) -> Self {
        let window_start = NaiveDate::from_ymd_opt(anchor.year(), 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or(anchor);
        let window_secs = (anchor - window_start).num_seconds().max(1);
        Self {
            rng,
            window_start,
            window_secs,
        }
    }

    fn pick<T: Copy>(&mut self, values: &[T]) -> T {
        values[self.rng.gen_range(0..values.len())]
    }

    fn timestamp(&mut self) -> NaiveDateTime {
        self.window_start + Duration::seconds(self.rng.gen_range(0..=self.window_secs))
    }

    fn cents(&mut self, low: i64, high: i64) -> Decimal {
        Decimal::new(self.rng.gen_range(low..=high), 2)
    }

    fn influencers(&mut self, count: usize) -> Vec<Influencer> {
        (1..=count as u64)
            .map(|id| {
                let name = format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES));
                Influencer {
                    influencer_id: InfluencerId(id),
                    name,
                    category: self.pick(Category::ALL),
                    gender: self.pick(Gender::ALL),
                    follower_count: self.rng.gen_range(10_000..=1_000_000),
                    platform: self.pick(Platform::ALL),
                }
            })
            .collect()
    }

    fn posts(&mut self, influencers: &[Influencer], count: usize) -> Vec<Post> {
        let ids: Vec<InfluencerId> = influencers.iter().map(|i| i.influencer_id).collect();
        (1..=count as u64)
            .map(|post_id| {
                let platform = self.pick(Platform::ALL);
                Post {
                    post_id,
                    influencer_id: self.pick(&ids),
                    platform,
                    date: self.timestamp(),
                    url: format!(
                        "https://www.{}.com/p/{post_id:06}",
                        platform.as_str().to_lowercase()
                    ),
                    caption: self.caption(),
                    reach: self.rng.gen_range(1_000..=50_000),
                    likes: self.rng.gen_range(100..=5_000),
                    comments: self.rng.gen_range(10..=500),
                }
            })
            .collect()
    }

    fn caption(&mut self) -> String {
        let length = self.rng.gen_range(6..=18);
        let words: Vec<&str> = (0..length).map(|_| self.pick(CAPTION_WORDS)).collect();
        let mut caption = words.join(" ");
        if let Some(first) = caption.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        caption.push('.');
        caption
    }

    fn events(&mut self, influencers: &[Influencer], count: usize) -> Vec<ConversionEvent> {
        let ids: Vec<InfluencerId> = influencers.iter().map(|i| i.influencer_id).collect();
        (1..=count as u64)
            .map(|tracking_id| ConversionEvent {
                tracking_id,
                source: self.pick(Platform::ALL),
                campaign: self.pick(Campaign::ALL),
                influencer_id: self.pick(&ids),
                user_id: uuid::Builder::from_random_bytes(self.rng.r#gen()).into_uuid().to_string(),
                product: self.pick(Product::ALL),
                date: self.timestamp(),
                orders: self.rng.gen_range(1..=5),
                revenue: self.cents(2_000, 50_000),
            })
            .collect()
    }

    /// One payout per influencer, with `total_payout` fixed at generation time.
    fn payouts(
        &mut self,
        influencers: &[Influencer],
        posts: &[Post],
        events: &[ConversionEvent],
    ) -> Vec<Payout> {
        let mut post_counts: HashMap<InfluencerId, u64> = HashMap::new();
        for post in posts {
            *post_counts.entry(post.influencer_id).or_insert(0) += 1;
        }
        let mut order_counts: HashMap<InfluencerId, u64> = HashMap::new();
        for event in events {
            *order_counts.entry(event.influencer_id).or_insert(0) += u64::from(event.orders);
        }

        influencers
            .iter()
            .map(|influencer| {
                let id = influencer.influencer_id;
                let basis = self.pick(PayoutBasis::ALL);
                let (rate, orders, units) = match basis {
                    PayoutBasis::Post => {
                        let rate = self.cents(5_000, 50_000);
                        (rate, 0, post_counts.get(&id).copied().unwrap_or(0))
                    }
                    PayoutBasis::Order => {
                        let rate = self.cents(500, 2_000);
                        let orders = order_counts.get(&id).copied().unwrap_or(0);
                        (rate, orders, orders)
                    }
                };
                Payout {
                    influencer_id: id,
                    basis,
                    rate,
                    orders,
                    total_payout: rate * Decimal::from(units),
                }
            })
            .collect()
    }
}
