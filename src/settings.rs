use std::time::Duration;

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::pipeline::enrich::EnrichOptions;

const ENV_PREFIX: &str = "EXPO";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Registration feed: an http(s) URL or a local JSON file.
    pub url: String,
    pub timeout_secs: u64,
    pub normalize_links: bool,
}

impl Settings {
    /// Defaults, then `config/default.*`, `config/local.*`, then `EXPO_*`
    /// environment variables.
    pub fn load() -> Result<Self> {
        let config = defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to load configuration")?;
        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Command-line flags win over every configured layer.
    pub fn apply_overrides(&mut self, source: Option<String>, keep_raw_links: bool) {
        if let Some(source) = source {
            self.url = source;
        }
        if keep_raw_links {
            self.normalize_links = false;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn enrich_options(&self) -> EnrichOptions {
        EnrichOptions {
            normalize_links: self.normalize_links,
        }
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("url", "")?
        .set_default("timeout_secs", 30_i64)?
        .set_default("normalize_links", true)?)
}
