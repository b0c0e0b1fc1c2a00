use core_types::{Campaign, Platform, Product};
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional; a missing section takes its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataSettings,
    pub dashboard: DashboardSettings,
    pub filters: FilterSettings,
    pub generator: GeneratorSettings,
    pub logging: LoggingSettings,
}

/// Where the four input tables live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding `influencers.csv`, `posts.csv`, `tracking_data.csv` and `payouts.csv`.
    pub directory: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
        }
    }
}

/// How the dashboard report is presented.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// How many influencers the top-N view keeps. Must lie in 5..=20.
    pub top_n: usize,
    pub format: OutputFormat,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            format: OutputFormat::Table,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Pre-selected filter values.
///
/// `None` allows every value present in the data. `Some(vec![])` allows
/// nothing, so the dashboard comes out empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    pub platforms: Option<Vec<Platform>>,
    pub campaigns: Option<Vec<Campaign>>,
    pub products: Option<Vec<Product>>,
}

/// Sizes of the synthetic datasets.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    pub influencers: usize,
    pub posts: usize,
    pub events: usize,
    /// Fixes the random sequence when set.
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            influencers: 50,
            posts: 200,
            events: 1000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// An `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
