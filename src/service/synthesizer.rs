//! SEO title and meta description generation within length budgets.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::SeoConfig;
use crate::extractor::text::{char_len, collapse_whitespace, contains_ignore_case, strip_markdown};

const ELLIPSIS: &str = "...";
/// Sentences this short are not description material
const MIN_SENTENCE_CHARS: usize = 20;
const FALLBACK_DESCRIPTION_CHARS: usize = 100;

/// Cut `text` to at most `max` characters, replacing the tail with "..." when it has to
/// be shortened.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    if max <= ELLIPSIS.len() {
        return text.chars().take(max).collect();
    }
    let mut truncated: String = text.chars().take(max - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Optimized title: the focus keyword (`keywords[0]`) is worked in and the brand appended
/// when the budget allows. Never longer than `config.max_title_length`.
pub fn generate_seo_title(original_title: &str, keywords: &[String], config: &SeoConfig) -> String {
    let original = original_title.trim();
    let focus = keywords.first().map(String::as_str).unwrap_or("");
    let brand = &config.brand_name;
    let max = config.max_title_length;
    let has_focus = contains_ignore_case(original, focus);

    let dashed = format!("{original} - {brand}");
    if has_focus && char_len(&dashed) <= max {
        return dashed;
    }

    let mut title = if has_focus {
        original.to_string()
    } else {
        format!("{focus} - {original}")
    };

    let branded = format!("{title} | {brand}");
    if char_len(&branded) <= max {
        title = branded;
    }

    truncate_with_ellipsis(&title, max)
}

/// Meta description built from the most keyword-rich opening sentence.
/// Never longer than `config.max_description_length`.
pub fn generate_seo_description(content: &str, keywords: &[String], config: &SeoConfig) -> String {
    static SENTENCE_END: OnceLock<Regex> = OnceLock::new();
    let sentence_end = SENTENCE_END.get_or_init(|| Regex::new(r"[.!?\n]+").unwrap());

    let stripped = strip_markdown(content);
    let sentences: Vec<String> = sentence_end
        .split(&stripped)
        .map(collapse_whitespace)
        .filter(|sentence| char_len(sentence) > MIN_SENTENCE_CHARS)
        .collect();

    let lowered: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect();

    let chosen = sentences
        .iter()
        .find(|sentence| {
            let sentence = sentence.to_lowercase();
            lowered.iter().any(|keyword| sentence.contains(keyword.as_str()))
        })
        .or_else(|| sentences.first());

    let mut description = match chosen {
        Some(sentence) => format!("{sentence}."),
        None => collapse_whitespace(&stripped)
            .chars()
            .take(FALLBACK_DESCRIPTION_CHARS)
            .collect(),
    };

    let focus = keywords.first().map(String::as_str).unwrap_or("");
    if !contains_ignore_case(&description, focus) {
        description = format!("{focus}: {description}").trim_end().to_string();
    }

    let call_to_action = format!("Learn more from {} experts.", config.brand_name);
    let with_cta = if description.is_empty() {
        call_to_action
    } else {
        format!("{description} {call_to_action}")
    };
    if char_len(&with_cta) <= config.max_description_length {
        description = with_cta;
    }

    truncate_with_ellipsis(&description, config.max_description_length)
}
