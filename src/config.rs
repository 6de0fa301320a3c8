use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// File looked up in the working directory at start-up.
pub const CONFIG_FILE: &str = "dashboard.json";

/// Dashboard settings.  Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Tabular source for the Home screen (`.csv` or `.parquet`).
    pub table_source: PathBuf,
    /// Benchmark log for the Price screen.
    pub log_source: PathBuf,
    /// Initial window size in points.
    pub window_size: [f32; 2],
    /// Legend name of the Price chart series.
    pub price_series_label: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            table_source: PathBuf::from("data.csv"),
            log_source: PathBuf::from("benchmark.log"),
            window_size: [1200.0, 800.0],
            price_series_label: "Yearly Cost Saving over default build on ARM".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Like [`DashboardConfig::load`], falling back to defaults.  A missing
    /// file is silent; an unreadable one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("haco-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_file("partial.json", r#"{ "table_source": "stats.parquet" }"#);
        let config = DashboardConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.table_source, PathBuf::from("stats.parquet"));
        assert_eq!(config.log_source, PathBuf::from("benchmark.log"));
        assert_eq!(config.window_size, [1200.0, 800.0]);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("haco-no-such-config.json");
        assert_eq!(DashboardConfig::load_or_default(&path), DashboardConfig::default());
        assert!(DashboardConfig::load(&path).is_err());
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let path = temp_file("broken.json", "{ not json");
        let config = DashboardConfig::load_or_default(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(config, DashboardConfig::default());
    }
}
