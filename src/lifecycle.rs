//! Process setup for the command-line front end.

use std::path::PathBuf;

use crate::config::SeoConfig;
use crate::error::Result;
use crate::service::SeoAnalyzer;

/// Environment variable naming a TOML config file
pub const CONFIG_ENV: &str = "AUTOSEO_CONFIG";

/// Initialize logging with tracing_subscriber. Logs go to stderr so stdout stays JSON.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("autoseo=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .compact()
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the analyzer from an explicit config path, or the built-in defaults.
pub fn build_analyzer(config_path: Option<&PathBuf>) -> Result<SeoAnalyzer> {
    let config = match config_path {
        Some(path) => {
            tracing::info!("Using SEO config {}", path.display());
            SeoConfig::load(path)?
        }
        None => SeoConfig::default(),
    };
    SeoAnalyzer::new(config)
}
