/// Describes one input table: its name in messages, its file and its required columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    pub name: &'static str,
    pub file_name: &'static str,
    pub columns: &'static [&'static str],
}

pub const INFLUENCERS: TableSchema = TableSchema {
    name: "influencer",
    file_name: "influencers.csv",
    columns: &[
        "influencer_id",
        "name",
        "category",
        "gender",
        "follower_count",
        "platform",
    ],
};

pub const POSTS: TableSchema = TableSchema {
    name: "post",
    file_name: "posts.csv",
    columns: &[
        "post_id",
        "influencer_id",
        "platform",
        "date",
        "url",
        "caption",
        "reach",
        "likes",
        "comments",
    ],
};

pub const TRACKING: TableSchema = TableSchema {
    name: "tracking",
    file_name: "tracking_data.csv",
    columns: &[
        "tracking_id",
        "source",
        "campaign",
        "influencer_id",
        "user_id",
        "product",
        "date",
        "orders",
        "revenue",
    ],
};

pub const PAYOUTS: TableSchema = TableSchema {
    name: "payout",
    file_name: "payouts.csv",
    columns: &["influencer_id", "basis", "rate", "orders", "total_payout"],
};

impl TableSchema {
    /// The first required column absent from `headers`, if any.
    pub fn missing_column(&self, headers: &[&str]) -> Option<&'static str> {
        self.columns
            .iter()
            .copied()
            .find(|column| !headers.contains(column))
    }
}
