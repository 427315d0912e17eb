//! Value objects passed into and returned from the analyzer.
//!
//! Nothing here has identity or a lifecycle beyond one call. Output types serialize in
//! camelCase because they land in the CMS metadata column as JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ====== Inputs ======

/// Article handed to [`crate::service::SeoAnalyzer::generate_auto_seo`].
#[derive(Debug, Clone, Default)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub author: Option<String>,
    /// Defaults to the time of analysis
    pub published_at: Option<DateTime<Utc>>,
}

impl ArticleInput {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            slug: slug.into(),
            ..Default::default()
        }
    }
}

/// Operator-supplied SEO fields that replace the generated ones.
#[derive(Debug, Clone, Default)]
pub struct CustomSeo {
    pub title: String,
    pub description: String,
    pub focus_keyword: String,
    pub keywords: Vec<String>,
}

// ====== Extraction ======

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordCandidate {
    pub text: String,
    pub score: f64,
}

// ====== Analysis ======

/// Outcome of a single scoring rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoCheck {
    pub key: &'static str,
    pub label: &'static str,
    pub passed: bool,
    pub points: u32,
    pub max_points: u32,
    pub value: String,
    /// Set only when the check failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoAnalysis {
    /// Most relevant first, at most 15
    pub keywords: Vec<String>,
    pub focus_keyword: String,
    /// Percent of words
    pub keyword_density: f64,
    pub seo_title: String,
    pub seo_description: String,
    pub seo_score: u32,
    pub suggestions: Vec<String>,
    pub readability_score: f64,
    pub word_count: usize,
    /// Minutes
    pub reading_time: usize,
    pub checks: Vec<SeoCheck>,
}

// ====== Packaged output ======

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoSeoResult {
    #[serde(flatten)]
    pub analysis: SeoAnalysis,
    pub structured_data: ArticleSchema,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub canonical: String,
}

/// schema.org `Article` JSON-LD.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub headline: String,
    pub description: String,
    pub image: String,
    pub author: SchemaEntity,
    pub publisher: SchemaPublisher,
    pub date_published: String,
    pub date_modified: String,
    pub main_entity_of_page: SchemaWebPage,
    pub keywords: String,
    pub word_count: usize,
    pub time_required: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub mentions: Vec<SchemaEntity>,
}

/// A typed node with just a name: `Person`, `Organization`, `Thing`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaEntity {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaPublisher {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub logo: SchemaImage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaImage {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaWebPage {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub og_type: &'static str,
    pub url: String,
    pub image: String,
    pub site_name: String,
    pub locale: String,
    pub published_time: String,
    pub author: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}
