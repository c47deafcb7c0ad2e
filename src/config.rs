use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub listing: ListingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListingSettings {
    /// Keep the first histogram bucket even when edge rounding pushed its
    /// start before the window minimum.
    #[serde(default = "default_ignore_early_buckets")]
    pub ignore_early_buckets: bool,
    /// Also keep a final bucket whose end overruns the window maximum.
    #[serde(default)]
    pub include_trailing_partial: bool,
    /// Request-size guard: maximum number of items per listing request.
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            ignore_early_buckets: default_ignore_early_buckets(),
            include_trailing_partial: false,
            max_items: default_max_items(),
        }
    }
}

fn default_ignore_early_buckets() -> bool {
    true
}

fn default_max_items() -> usize {
    10_000
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            self.listing.max_items > 0,
            "listing.max_items must be > 0, got {}",
            self.listing.max_items
        );
        Ok(())
    }
}
