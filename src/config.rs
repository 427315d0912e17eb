//! Tunable SEO policy.
//!
//! A `SeoConfig` is an immutable value: build it once (usually `SeoConfig::default()` or
//! from a TOML file) and hand it to [`crate::service::SeoAnalyzer`]. Keys missing from a
//! TOML file fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

use crate::error::{AppError, Result};

pub const DEFAULT_BRAND_NAME: &str = "RepairPro Parts";
pub const DEFAULT_BASE_URL: &str = "https://www.repairproparts.com";
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 60;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 160;
pub const DEFAULT_MIN_KEYWORD_DENSITY: f64 = 1.0;
pub const DEFAULT_MAX_KEYWORD_DENSITY: f64 = 3.0;

const DEFAULT_INDUSTRY: &[&str] = &[
    "mobile repair",
    "phone repair",
    "screen replacement",
    "battery replacement",
    "repair parts",
    "repair tools",
    "iphone",
    "samsung",
    "smartphone",
    "lcd",
    "oled",
    "display",
    "digitizer",
    "charging port",
];

const DEFAULT_TARGET_KEYWORDS: &[&str] = &[
    "repair",
    "replacement",
    "parts",
    "screen",
    "battery",
    "guide",
    "fix",
    "tool",
];

/// Acceptable keyword density, in percent of total words.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityRange {
    pub min: f64,
    pub max: f64,
}

impl DensityRange {
    pub fn contains(&self, density: f64) -> bool {
        density >= self.min && density <= self.max
    }
}

impl Default for DensityRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_KEYWORD_DENSITY,
            max: DEFAULT_MAX_KEYWORD_DENSITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub brand_name: String,
    /// Domain phrases that earn the industry boost ("screen replacement", "oled", ...)
    pub industry: Vec<String>,
    /// Keyword stems that earn the target boost
    pub target_keywords: Vec<String>,
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub optimal_keyword_density: DensityRange,
    /// Site origin used for canonical links and default images
    pub base_url: Url,
    /// Twitter `@handle` of the site, if any
    pub twitter_site: Option<String>,
    pub locale: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            brand_name: DEFAULT_BRAND_NAME.to_string(),
            industry: DEFAULT_INDUSTRY.iter().map(|s| s.to_string()).collect(),
            target_keywords: DEFAULT_TARGET_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            optimal_keyword_density: DensityRange::default(),
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            twitter_site: None,
            locale: "en_US".to_string(),
        }
    }
}

impl SeoConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: SeoConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading SEO config from {}", path.display());
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_title_length == 0 {
            return Err(AppError::config("max_title_length must be greater than 0"));
        }
        if self.max_description_length == 0 {
            return Err(AppError::config(
                "max_description_length must be greater than 0",
            ));
        }

        let density = &self.optimal_keyword_density;
        if !density.min.is_finite() || !density.max.is_finite() || density.min < 0.0 {
            return Err(AppError::config(format!(
                "keyword density bounds must be finite and non-negative (got {}..{})",
                density.min, density.max
            )));
        }
        if density.min > density.max {
            return Err(AppError::config(format!(
                "keyword density min ({}) exceeds max ({})",
                density.min, density.max
            )));
        }

        if !matches!(self.base_url.scheme(), "http" | "https") || self.base_url.cannot_be_a_base()
        {
            return Err(AppError::url(format!(
                "base_url must be an http(s) origin, got {}",
                self.base_url
            )));
        }

        Ok(())
    }
}
