//! Rule-based 100-point SEO score.
//!
//! Five pass/fail checks worth 20 points each make up the base score. The custom
//! re-analysis path adds three 5-point bonus checks; the sum is capped at 100.

use crate::config::SeoConfig;
use crate::domain::{CustomSeo, SeoCheck};
use crate::extractor::text::{char_len, contains_ignore_case};

pub const CHECK_POINTS: u32 = 20;
pub const BONUS_POINTS: u32 = 5;
pub const MAX_SCORE: u32 = 100;

pub const MIN_TITLE_LENGTH: usize = 30;
pub const MIN_DESCRIPTION_LENGTH: usize = 120;
pub const MIN_WORD_COUNT: usize = 300;
pub const MIN_READABILITY: f64 = 60.0;
pub const MIN_CUSTOM_KEYWORDS: usize = 3;
pub const MAX_CUSTOM_KEYWORDS: usize = 10;

/// Measurements the base checks are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub keyword_density: f64,
    pub word_count: usize,
    pub readability: f64,
}

fn check(
    key: &'static str,
    label: &'static str,
    passed: bool,
    max_points: u32,
    value: String,
    suggestion: impl FnOnce() -> String,
) -> SeoCheck {
    SeoCheck {
        key,
        label,
        passed,
        points: if passed { max_points } else { 0 },
        max_points,
        value,
        suggestion: (!passed).then(suggestion),
    }
}

/// The five 20-point checks, in reporting order.
pub fn base_checks(inputs: &ScoreInputs<'_>, config: &SeoConfig) -> Vec<SeoCheck> {
    let title_len = char_len(inputs.title);
    let description_len = char_len(inputs.description);
    let density = config.optimal_keyword_density;

    vec![
        check(
            "title_length",
            "Title Length",
            (MIN_TITLE_LENGTH..=config.max_title_length).contains(&title_len),
            CHECK_POINTS,
            format!("{title_len} chars"),
            || {
                format!(
                    "SEO title should be between {MIN_TITLE_LENGTH} and {} characters",
                    config.max_title_length
                )
            },
        ),
        check(
            "description_length",
            "Meta Description Length",
            (MIN_DESCRIPTION_LENGTH..=config.max_description_length).contains(&description_len),
            CHECK_POINTS,
            format!("{description_len} chars"),
            || {
                format!(
                    "Meta description should be between {MIN_DESCRIPTION_LENGTH} and {} characters",
                    config.max_description_length
                )
            },
        ),
        check(
            "keyword_density",
            "Keyword Density",
            density.contains(inputs.keyword_density),
            CHECK_POINTS,
            format!("{:.2}%", inputs.keyword_density),
            || {
                format!(
                    "Keyword density should be between {}% and {}%",
                    density.min, density.max
                )
            },
        ),
        check(
            "word_count",
            "Word Count",
            inputs.word_count >= MIN_WORD_COUNT,
            CHECK_POINTS,
            format!("{} words", inputs.word_count),
            || format!("Content should be at least {MIN_WORD_COUNT} words long"),
        ),
        check(
            "readability",
            "Readability",
            inputs.readability >= MIN_READABILITY,
            CHECK_POINTS,
            format!("{:.1}", inputs.readability),
            || {
                format!(
                    "Improve readability with shorter sentences and simpler words \
                     (aim for a score of {MIN_READABILITY} or higher)"
                )
            },
        ),
    ]
}

/// The three 5-point bonus checks applied to operator-supplied SEO fields.
/// An empty focus keyword never counts as contained.
pub fn custom_bonus_checks(custom: &CustomSeo) -> Vec<SeoCheck> {
    let focus = custom.focus_keyword.trim();
    let in_title = !focus.is_empty() && contains_ignore_case(&custom.title, focus);
    let in_description = !focus.is_empty() && contains_ignore_case(&custom.description, focus);
    let keyword_count = custom.keywords.len();

    vec![
        check(
            "focus_in_title",
            "Focus Keyword In Title",
            in_title,
            BONUS_POINTS,
            yes_no(in_title),
            || "Include the focus keyword in the SEO title".to_string(),
        ),
        check(
            "focus_in_description",
            "Focus Keyword In Description",
            in_description,
            BONUS_POINTS,
            yes_no(in_description),
            || "Include the focus keyword in the meta description".to_string(),
        ),
        check(
            "keyword_count",
            "Keyword Count",
            (MIN_CUSTOM_KEYWORDS..=MAX_CUSTOM_KEYWORDS).contains(&keyword_count),
            BONUS_POINTS,
            format!("{keyword_count} keywords"),
            || {
                if keyword_count < MIN_CUSTOM_KEYWORDS {
                    format!("Add more related keywords (at least {MIN_CUSTOM_KEYWORDS})")
                } else {
                    format!("Reduce the number of keywords (no more than {MAX_CUSTOM_KEYWORDS})")
                }
            },
        ),
    ]
}

/// Sum of earned points, capped at [`MAX_SCORE`] after summing.
pub fn total_score(checks: &[SeoCheck]) -> u32 {
    checks.iter().map(|c| c.points).sum::<u32>().min(MAX_SCORE)
}

/// Suggestions of the failed checks, in check order.
pub fn suggestions(checks: &[SeoCheck]) -> Vec<String> {
    checks.iter().filter_map(|c| c.suggestion.clone()).collect()
}

fn yes_no(value: bool) -> String {
    let answer = if value { "yes" } else { "no" };
    answer.to_string()
}
