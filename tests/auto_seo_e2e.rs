//! End-to-end tests for the SEO pipeline through the public API.

use autoseo::{
    config::SeoConfig,
    domain::{ArticleInput, CustomSeo},
    extractor::{calculate_keyword_density, calculate_readability_score, extract_keywords},
    service::{generate_seo_description, generate_seo_title, SeoAnalyzer},
};
use chrono::{TimeZone, Utc};

mod common;
use common::fixtures;

fn guide_article() -> ArticleInput {
    let mut article = ArticleInput::new(
        fixtures::GUIDE_TITLE,
        fixtures::GUIDE_CONTENT,
        "iphone-14-pro-max-screen-replacement",
    );
    article.author = Some("Sam Ortiz".to_string());
    article.published_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap());
    article
}

fn sample_inputs() -> Vec<(String, String)> {
    vec![
        (String::new(), String::new()),
        ("Battery".to_string(), "Battery.".to_string()),
        (fixtures::SHORT_TITLE.to_string(), fixtures::SHORT_CONTENT.to_string()),
        (fixtures::GUIDE_TITLE.to_string(), fixtures::GUIDE_CONTENT.to_string()),
        (
            "x".repeat(200),
            "Lorem ipsum dolor sit amet consectetur adipiscing elit ".repeat(40),
        ),
        (
            "OLED vs LCD: Which Display Should You Buy For Your Samsung Galaxy Repair?".to_string(),
            "OLED panels are thin. LCD panels are cheap! Which display fits your repair budget? \
             Read on."
                .repeat(12),
        ),
    ]
}

#[test]
fn scenario_a_repair_guide_scores_well() {
    let analyzer = SeoAnalyzer::default();
    let result = analyzer.generate_auto_seo(&guide_article());
    let analysis = &result.analysis;

    let related = ["screen", "display", "repair", "replacement"];
    assert!(
        related.iter().any(|term| analysis.focus_keyword.contains(term)),
        "focus keyword {:?}",
        analysis.focus_keyword
    );
    assert!(analysis.word_count > 300);
    assert!(analysis.readability_score >= 60.0);
    assert!(analysis.seo_score >= 60, "{analysis:#?}");
    assert_eq!(analysis.reading_time, analysis.word_count.div_ceil(200));

    assert_eq!(
        result.canonical,
        "https://www.repairproparts.com/blog/iphone-14-pro-max-screen-replacement"
    );
    assert_eq!(
        result.structured_data.image,
        "https://www.repairproparts.com/images/blog/screen-repair.jpg"
    );
    assert_eq!(result.structured_data.author.name, "Sam Ortiz");
    assert_eq!(result.structured_data.date_published, "2024-06-01T08:00:00Z");
    assert_eq!(
        result.structured_data.time_required,
        format!("PT{}M", analysis.reading_time)
    );
    assert_eq!(result.structured_data.mentions.len(), 5);
    assert_eq!(result.structured_data.mentions[0].name, analysis.focus_keyword);
}

#[test]
fn scenario_b_short_content_withholds_word_count_points() {
    let analyzer = SeoAnalyzer::default();
    let analysis = analyzer.analyze(fixtures::SHORT_TITLE, fixtures::SHORT_CONTENT);

    assert!(analysis.word_count < 300);
    assert!(analysis
        .suggestions
        .iter()
        .any(|s| s == "Content should be at least 300 words long"));

    let word_check = analysis
        .checks
        .iter()
        .find(|c| c.key == "word_count")
        .unwrap();
    assert_eq!(word_check.points, 0);
    assert!(analysis.seo_score <= 80);
}

#[test]
fn scenario_c_two_custom_keywords_lose_the_count_bonus() {
    let analyzer = SeoAnalyzer::default();
    let custom = CustomSeo {
        title: "iPhone 14 Pro Max Screen Replacement at Home".to_string(),
        description: "Replace a cracked iPhone 14 Pro Max screen at home in about an hour. \
                      Our guide covers tools, heat, glue and testing for the new screen."
            .to_string(),
        focus_keyword: "screen".to_string(),
        keywords: vec!["screen".to_string(), "iphone 14 pro max".to_string()],
    };

    let analysis = analyzer.reanalyze_with_custom(
        fixtures::GUIDE_TITLE,
        fixtures::GUIDE_CONTENT,
        &custom,
    );

    assert!(analysis
        .suggestions
        .contains(&"Add more related keywords (at least 3)".to_string()));
    let bonus = analysis
        .checks
        .iter()
        .find(|c| c.key == "keyword_count")
        .unwrap();
    assert!(!bonus.passed);

    // every base check passes and both containment bonuses are earned: 100 + 10, capped
    assert!(analysis.checks.iter().filter(|c| c.key != "keyword_count").all(|c| c.passed));
    assert_eq!(analysis.seo_score, 100);
}

#[test]
fn custom_score_is_capped_at_one_hundred() {
    let analyzer = SeoAnalyzer::default();
    let custom = CustomSeo {
        title: "iPhone 14 Pro Max Screen Replacement at Home".to_string(),
        description: "Replace a cracked iPhone 14 Pro Max screen at home in about an hour. \
                      Our guide covers tools, heat, glue and testing for the new screen."
            .to_string(),
        focus_keyword: "screen".to_string(),
        keywords: ["screen", "iphone 14", "screen replacement", "battery", "repair"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    let analysis = analyzer.reanalyze_with_custom(
        fixtures::GUIDE_TITLE,
        fixtures::GUIDE_CONTENT,
        &custom,
    );

    let raw: u32 = analysis.checks.iter().map(|c| c.points).sum();
    assert_eq!(raw, 115);
    assert_eq!(analysis.seo_score, 100);
    assert!(analysis.suggestions.is_empty());
}

#[test]
fn scenario_d_industry_phrases_rank_above_filler() {
    let config = SeoConfig::default();
    let text = "Screen replacement made easy. A screen replacement needs patience, a steady \
                hand, and good light. Our screen replacement kit ships with every tool. \
                Coffee helps, music helps, and patience helps most of all.";
    let keywords = extract_keywords(text, &config);

    let rank = |needle: &str| keywords.iter().position(|k| k == needle);
    let phrase = rank("screen replacement").expect("phrase is a candidate");
    for filler in ["coffee", "music", "light", "hand"] {
        if let Some(position) = rank(filler) {
            assert!(phrase < position, "{filler} outranks the phrase: {keywords:?}");
        }
    }
}

#[test]
fn analysis_is_deterministic() {
    let analyzer = SeoAnalyzer::default();
    let article = guide_article();
    assert_eq!(
        analyzer.generate_auto_seo(&article),
        analyzer.generate_auto_seo(&article)
    );
}

#[test]
fn scores_and_budgets_hold_for_varied_input() {
    let analyzer = SeoAnalyzer::default();
    let config = analyzer.config().clone();

    for (title, content) in sample_inputs() {
        let analysis = analyzer.analyze(&title, &content);
        assert!(analysis.seo_score <= 100);
        assert_eq!(analysis.seo_score % 20, 0, "{title}");
        assert!(analysis.seo_title.chars().count() <= config.max_title_length);
        assert!(analysis.seo_description.chars().count() <= config.max_description_length);
        assert!((0.0..=100.0).contains(&analysis.readability_score));
        assert_eq!(analysis.reading_time, analysis.word_count.div_ceil(200));
        assert!(analysis.keywords.len() <= 15);

        let keywords = extract_keywords(&format!("{title} {content}"), &config);
        assert!(generate_seo_title(&title, &keywords, &config).chars().count() <= 60);
        assert!(generate_seo_description(&content, &keywords, &config).chars().count() <= 160);
        assert_eq!(calculate_keyword_density(&content, ""), 0.0);
        assert!((0.0..=100.0).contains(&calculate_readability_score(&content)));
    }
}

#[test]
fn custom_score_stays_in_range_for_degenerate_input() {
    let analyzer = SeoAnalyzer::default();
    let analysis = analyzer.reanalyze_with_custom("", "", &CustomSeo::default());
    assert_eq!(analysis.seo_score, 0);
    assert_eq!(analysis.checks.len(), 8);
    assert_eq!(analysis.suggestions.len(), 8);
}

#[test]
fn custom_config_flows_through_payloads() {
    let config = SeoConfig::from_toml_str(
        r#"
        brand_name = "FixHub"
        base_url = "https://fixhub.example"
        twitter_site = "@fixhub"
        locale = "en_GB"
        "#,
    )
    .unwrap();
    let analyzer = SeoAnalyzer::new(config).unwrap();
    let result = analyzer.generate_auto_seo(&guide_article());

    assert_eq!(
        result.canonical,
        "https://fixhub.example/blog/iphone-14-pro-max-screen-replacement"
    );
    assert_eq!(result.structured_data.publisher.name, "FixHub");
    assert_eq!(result.open_graph.site_name, "FixHub");
    assert_eq!(result.open_graph.locale, "en_GB");
    assert_eq!(result.twitter.site.as_deref(), Some("@fixhub"));
    assert!(result.analysis.seo_title.contains("FixHub"));
}

#[test]
fn result_serializes_for_the_cms() {
    let analyzer = SeoAnalyzer::default();
    let mut article = guide_article();
    article.excerpt = Some("Swap a cracked screen at home.".to_string());
    let value = serde_json::to_value(analyzer.generate_auto_seo(&article)).unwrap();

    assert!(value["keywords"].is_array());
    assert_eq!(value["focusKeyword"], "screen");
    assert!(value["seoScore"].is_u64());
    assert!(value["readingTime"].is_u64());
    assert_eq!(value["structuredData"]["@context"], "https://schema.org");
    assert_eq!(value["structuredData"]["@type"], "Article");
    assert_eq!(value["structuredData"]["author"]["@type"], "Person");
    assert_eq!(
        value["structuredData"]["abstract"],
        "Swap a cracked screen at home."
    );
    assert_eq!(
        value["structuredData"]["mainEntityOfPage"]["@id"],
        value["canonical"]
    );
    assert_eq!(value["openGraph"]["type"], "article");
    assert_eq!(value["twitter"]["card"], "summary_large_image");
    assert!(value["twitter"].get("site").is_none());
}
