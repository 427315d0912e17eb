//! Packages an [`SeoAnalysis`] with the payloads the page renderer needs: schema.org
//! Article JSON-LD, Open Graph, Twitter card and the canonical link.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::warn;
use url::Url;

use super::synthesizer::truncate_with_ellipsis;
use crate::config::SeoConfig;
use crate::domain::{
    ArticleInput, ArticleSchema, AutoSeoResult, OpenGraph, SchemaEntity, SchemaImage,
    SchemaPublisher, SchemaWebPage, SeoAnalysis, TwitterCard,
};

pub const TWITTER_TITLE_MAX: usize = 70;
pub const TWITTER_DESCRIPTION_MAX: usize = 200;
const MENTIONED_KEYWORDS: usize = 5;

const SCREEN_COVER: &str = "/images/blog/screen-repair.jpg";
const BATTERY_COVER: &str = "/images/blog/battery-replacement.jpg";
const TOOLS_COVER: &str = "/images/blog/repair-tools.jpg";
const PARTS_COVER: &str = "/images/blog/phone-parts.jpg";
const HERO_COVER: &str = "/images/hero-banner.jpg";
const LOGO_PATH: &str = "/logo.png";

pub fn assemble(
    config: &SeoConfig,
    analysis: SeoAnalysis,
    article: &ArticleInput,
    now: DateTime<Utc>,
) -> AutoSeoResult {
    let canonical = canonical_url(&config.base_url, &article.slug);
    let image = cover_image(config, article.cover_image.as_deref(), &analysis.keywords);
    let published = article
        .published_at
        .unwrap_or(now)
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    let author = article
        .author
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    let author_entity = match author {
        Some(name) => SchemaEntity {
            schema_type: "Person",
            name: name.to_string(),
        },
        None => SchemaEntity {
            schema_type: "Organization",
            name: config.brand_name.clone(),
        },
    };

    let structured_data = ArticleSchema {
        context: "https://schema.org",
        schema_type: "Article",
        headline: analysis.seo_title.clone(),
        description: analysis.seo_description.clone(),
        image: image.clone(),
        author: author_entity.clone(),
        publisher: SchemaPublisher {
            schema_type: "Organization",
            name: config.brand_name.clone(),
            logo: SchemaImage {
                schema_type: "ImageObject",
                url: absolute_url(&config.base_url, LOGO_PATH),
            },
        },
        date_published: published.clone(),
        date_modified: published.clone(),
        main_entity_of_page: SchemaWebPage {
            schema_type: "WebPage",
            id: canonical.clone(),
        },
        keywords: analysis.keywords.join(", "),
        word_count: analysis.word_count,
        time_required: format!("PT{}M", analysis.reading_time),
        summary: article
            .excerpt
            .as_deref()
            .map(str::trim)
            .filter(|excerpt| !excerpt.is_empty())
            .map(str::to_string),
        mentions: analysis
            .keywords
            .iter()
            .take(MENTIONED_KEYWORDS)
            .map(|keyword| SchemaEntity {
                schema_type: "Thing",
                name: keyword.clone(),
            })
            .collect(),
    };

    let open_graph = OpenGraph {
        title: analysis.seo_title.clone(),
        description: analysis.seo_description.clone(),
        og_type: "article",
        url: canonical.clone(),
        image: image.clone(),
        site_name: config.brand_name.clone(),
        locale: config.locale.clone(),
        published_time: published,
        author: author_entity.name,
        tags: analysis.keywords.clone(),
    };

    let twitter = TwitterCard {
        card: "summary_large_image",
        title: truncate_with_ellipsis(&analysis.seo_title, TWITTER_TITLE_MAX),
        description: truncate_with_ellipsis(&analysis.seo_description, TWITTER_DESCRIPTION_MAX),
        image,
        site: config.twitter_site.clone(),
    };

    AutoSeoResult {
        analysis,
        structured_data,
        open_graph,
        twitter,
        canonical,
    }
}

/// `{base}/blog/{slug}`, with the slug encoded as a single path segment.
pub fn canonical_url(base: &Url, slug: &str) -> String {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push("blog").push(slug.trim_matches('/'));
    }
    url.to_string()
}

/// Explicit cover image (resolved against the site), or a stock image picked from the
/// keyword categories.
pub fn cover_image(config: &SeoConfig, explicit: Option<&str>, keywords: &[String]) -> String {
    match explicit.map(str::trim).filter(|src| !src.is_empty()) {
        Some(src) => absolute_url(&config.base_url, src),
        None => absolute_url(&config.base_url, default_cover_path(keywords)),
    }
}

/// Stock image for the first matching category: screen, battery, tools, parts.
pub fn default_cover_path(keywords: &[String]) -> &'static str {
    let joined = keywords.join(" ").to_lowercase();
    let mentions = |terms: &[&str]| terms.iter().any(|term| joined.contains(term));

    if mentions(&["screen", "display"]) {
        SCREEN_COVER
    } else if mentions(&["battery"]) {
        BATTERY_COVER
    } else if mentions(&["repair", "tool"]) {
        TOOLS_COVER
    } else if mentions(&["parts", "component"]) {
        PARTS_COVER
    } else {
        HERO_COVER
    }
}

/// Resolves `reference` against the site root. The root is `base_url` with its path, so a
/// shop living under `/store` serves `/logo.png` from `/store/logo.png` like its blog.
fn absolute_url(base: &Url, reference: &str) -> String {
    let mut root = base.clone();
    root.set_query(None);
    root.set_fragment(None);
    if !root.path().ends_with('/') {
        let path = format!("{}/", root.path());
        root.set_path(&path);
    }

    // Protocol-relative references keep their host.
    let relative = if reference.starts_with("//") {
        reference
    } else {
        reference.trim_start_matches('/')
    };

    match root.join(relative) {
        Ok(url) => url.to_string(),
        Err(e) => {
            warn!("Could not resolve image URL {:?} against {}: {}", reference, base, e);
            reference.to_string()
        }
    }
}
