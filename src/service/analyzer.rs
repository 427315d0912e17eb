//! The analyzer: runs the extractor once over an article and synthesizes SEO metadata.

use chrono::Utc;
use tracing::debug;

use super::auto_seo;
use super::scoring::{self, ScoreInputs};
use super::synthesizer::{generate_seo_description, generate_seo_title};
use crate::config::SeoConfig;
use crate::domain::{ArticleInput, AutoSeoResult, CustomSeo, SeoAnalysis};
use crate::error::Result;
use crate::extractor::text::to_plain_text;
use crate::extractor::{
    calculate_keyword_density, calculate_readability_score, count_words, extract_keywords,
    reading_time,
};

/// Stateless SEO analyzer bound to one validated [`SeoConfig`].
///
/// Every method is a pure function of its arguments and the config, so one instance can
/// be shared freely between threads.
#[derive(Debug, Clone)]
pub struct SeoAnalyzer {
    config: SeoConfig,
}

impl SeoAnalyzer {
    pub fn new(config: SeoConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SeoConfig {
        &self.config
    }

    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        extract_keywords(&to_plain_text(text), &self.config)
    }

    /// Generate keywords, title and description from scratch and score them.
    pub fn analyze(&self, title: &str, content: &str) -> SeoAnalysis {
        let content = to_plain_text(content);
        let keywords = extract_keywords(&format!("{title} {content}"), &self.config);
        let focus_keyword = keywords.first().cloned().unwrap_or_default();

        let seo_title = generate_seo_title(title, &keywords, &self.config);
        let seo_description = generate_seo_description(&content, &keywords, &self.config);

        let analysis = self.score(
            &content,
            keywords,
            focus_keyword,
            seo_title,
            seo_description,
            None,
        );

        debug!(
            "Analyzed \"{}\": score {}, {} words, focus \"{}\"",
            title, analysis.seo_score, analysis.word_count, analysis.focus_keyword
        );
        analysis
    }

    /// Score operator-supplied title, description and keywords against the content.
    ///
    /// Adds the three custom-field bonuses to the base checks. The total is capped at 100.
    pub fn reanalyze_with_custom(&self, title: &str, content: &str, custom: &CustomSeo) -> SeoAnalysis {
        let content = to_plain_text(content);

        let analysis = self.score(
            &content,
            custom.keywords.clone(),
            custom.focus_keyword.trim().to_string(),
            custom.title.clone(),
            custom.description.clone(),
            Some(custom),
        );

        debug!(
            "Re-analyzed \"{}\" with custom SEO: score {}, {} suggestions",
            title,
            analysis.seo_score,
            analysis.suggestions.len()
        );
        analysis
    }

    /// Full pipeline: analysis plus JSON-LD, Open Graph, Twitter card and canonical URL.
    pub fn generate_auto_seo(&self, article: &ArticleInput) -> AutoSeoResult {
        let analysis = self.analyze(&article.title, &article.content);
        auto_seo::assemble(&self.config, analysis, article, Utc::now())
    }

    fn score(
        &self,
        content: &str,
        keywords: Vec<String>,
        focus_keyword: String,
        seo_title: String,
        seo_description: String,
        custom: Option<&CustomSeo>,
    ) -> SeoAnalysis {
        let keyword_density = calculate_keyword_density(content, &focus_keyword);
        let readability_score = calculate_readability_score(content);
        let word_count = count_words(content);

        let mut checks = scoring::base_checks(
            &ScoreInputs {
                title: &seo_title,
                description: &seo_description,
                keyword_density,
                word_count,
                readability: readability_score,
            },
            &self.config,
        );
        if let Some(custom) = custom {
            checks.extend(scoring::custom_bonus_checks(custom));
        }

        SeoAnalysis {
            seo_score: scoring::total_score(&checks),
            suggestions: scoring::suggestions(&checks),
            keywords,
            focus_keyword,
            keyword_density,
            seo_title,
            seo_description,
            readability_score,
            word_count,
            reading_time: reading_time(word_count),
            checks,
        }
    }
}

impl Default for SeoAnalyzer {
    fn default() -> Self {
        Self {
            config: SeoConfig::default(),
        }
    }
}
