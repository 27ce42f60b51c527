use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

const ENV_PREFIX: &str = "WIKI_WEBSITES";
pub const DEFAULT_OUTPUT: &str = "company_websites.csv";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Where the results CSV is written. Overwritten if present.
    pub output: PathBuf,
    /// Sent with every request; Wikipedia refuses clients without one.
    pub user_agent: String,
}

impl Settings {
    /// Defaults overlaid with `WIKI_WEBSITES_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("output", DEFAULT_OUTPUT)?
            .set_default("user_agent", default_user_agent())?
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
