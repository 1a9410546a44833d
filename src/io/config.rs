use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::rocket::ParametersBuilder;
use crate::sim::SimConfig;

/// Optional TOML configuration.
///
/// ```toml
/// [rocket]
/// exhaust_velocity = 2500.0
/// burn_time = 40.0
///
/// [sim]
/// dt = 0.05
/// ```
///
/// Missing tables and fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub rocket: ParametersBuilder,
    pub sim: SimConfig,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }
}
