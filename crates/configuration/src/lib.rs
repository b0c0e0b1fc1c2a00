use crate::error::ConfigError;
use std::ops::RangeInclusive;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    Config, DashboardSettings, DataSettings, FilterSettings, GeneratorSettings, LoggingSettings,
    OutputFormat,
};

/// The allowed sizes of the top-N influencer view.
pub const TOP_N_RANGE: RangeInclusive<usize> = 5..=20;

/// Environment variables with this prefix override file values,
/// e.g. `KPIBOARD__DASHBOARD__TOP_N=15`.
pub const ENV_PREFIX: &str = "KPIBOARD";

/// Loads the application configuration.
///
/// With an explicit `path` the file must exist. Without one, `config.toml` in
/// the working directory is read if present. Environment variables are layered
/// on top, and the result is validated before it is returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config").required(false),
    };
    load_from(file, environment())
}

/// Filter lists are comma-separated in the environment,
/// e.g. `KPIBOARD__FILTERS__PLATFORMS=Instagram,YouTube`. An empty list can
/// only be written in the file.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("filters.platforms")
        .with_list_parse_key("filters.campaigns")
        .with_list_parse_key("filters.products")
}

fn load_from<S>(file: S, env: config::Environment) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Checks the cross-field rules serde cannot express.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if !TOP_N_RANGE.contains(&config.dashboard.top_n) {
        return Err(ConfigError::ValidationError(format!(
            "dashboard.top_n must be between {} and {}, got {}",
            TOP_N_RANGE.start(),
            TOP_N_RANGE.end(),
            config.dashboard.top_n
        )));
    }

    let generator = &config.generator;
    for (name, value) in [
        ("influencers", generator.influencers),
        ("posts", generator.posts),
        ("events", generator.events),
    ] {
        if value == 0 {
            return Err(ConfigError::ValidationError(format!(
                "generator.{name} must be greater than 0"
            )));
        }
    }

    Ok(())
}
