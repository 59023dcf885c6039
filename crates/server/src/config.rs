use std::env;
use std::path::Path;

use anyhow::{Context, anyhow};
use serde::Deserialize;
type Result<T> = anyhow::Result<T>;

const DEFAULT_CONFIG_PATH: &str = "trivia.toml";

#[derive(Debug, Deserialize, Default)]
struct RawServerConfig {
    database_url: Option<String>,
    bind_addr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
}

impl ServerConfig {
    /// Reads `TRIVIA_CONFIG` (or `trivia.toml` when present), then lets
    /// `DATABASE_URL` and `BIND_ADDR` from the environment override it.
    pub fn load() -> Result<Self> {
        let raw = match env::var("TRIVIA_CONFIG") {
            Ok(path) => RawServerConfig::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                RawServerConfig::from_file(DEFAULT_CONFIG_PATH)?
            }
            Err(_) => RawServerConfig::default(),
        };

        Self::resolve(
            raw,
            env::var("DATABASE_URL").ok(),
            env::var("BIND_ADDR").ok(),
        )
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        Self::resolve(RawServerConfig::from_str(s)?, None, None)
    }

    fn resolve(
        raw: RawServerConfig,
        database_url: Option<String>,
        bind_addr: Option<String>,
    ) -> Result<Self> {
        let database_url = database_url
            .or(raw.database_url)
            .ok_or_else(|| anyhow!("DATABASE_URL is not set"))?;

        Ok(Self {
            database_url,
            bind_addr: bind_addr.or(raw.bind_addr).unwrap_or_else(default_bind_addr),
        })
    }
}

impl RawServerConfig {
    fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize server config")
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:5000".to_string()
}
