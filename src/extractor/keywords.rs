//! Keyword extraction: term frequency with industry and target-keyword boosts, plus
//! repeated two- and three-word phrases.

use std::collections::HashMap;

use super::text::clean_text;
use crate::config::SeoConfig;
use crate::domain::KeywordCandidate;

pub const MAX_KEYWORDS: usize = 15;
const MIN_TOKEN_CHARS: usize = 3;
const INDUSTRY_BOOST: f64 = 2.0;
const TARGET_BOOST: f64 = 1.5;
const INDUSTRY_PHRASE_BOOST: f64 = 3.0;
/// A phrase must occur more than this many times to become a candidate
const MIN_PHRASE_OCCURRENCES: usize = 1;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "this", "that", "these", "those", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them",
];

/// Ranked keyword texts, most relevant first, at most [`MAX_KEYWORDS`].
pub fn extract_keywords(text: &str, config: &SeoConfig) -> Vec<String> {
    score_keywords(text, config)
        .into_iter()
        .map(|candidate| candidate.text)
        .collect()
}

/// Ranked candidates with their scores.
///
/// Equal scores keep their insertion order: single words first, then two-word phrases,
/// then three-word phrases, each in order of first occurrence.
pub fn score_keywords(text: &str, config: &SeoConfig) -> Vec<KeywordCandidate> {
    let cleaned = clean_text(text);
    let tokens: Vec<&str> = cleaned
        .split(' ')
        .filter(|token| token.len() >= MIN_TOKEN_CHARS && !STOP_WORDS.contains(token))
        .collect();

    if tokens.is_empty() {
        return Vec::new();
    }

    let industry = lowered_terms(&config.industry);
    let targets = lowered_terms(&config.target_keywords);
    let total = tokens.len() as f64;

    let mut candidates: Vec<KeywordCandidate> = count_in_order(tokens.iter().copied())
        .into_iter()
        .map(|(word, count)| {
            let mut boost = 1.0;
            if industry.iter().any(|term| overlaps(word, term)) {
                boost *= INDUSTRY_BOOST;
            }
            if targets.iter().any(|term| overlaps(word, term)) {
                boost *= TARGET_BOOST;
            }
            KeywordCandidate {
                text: word.to_string(),
                score: count as f64 / total * boost,
            }
        })
        .collect();

    for size in [2, 3] {
        let phrases = tokens.windows(size).map(|window| window.join(" "));
        for (phrase, count) in count_in_order(phrases) {
            if count <= MIN_PHRASE_OCCURRENCES {
                continue;
            }
            let boost = if industry.iter().any(|term| overlaps(&phrase, term)) {
                INDUSTRY_PHRASE_BOOST
            } else {
                1.0
            };
            candidates.push(KeywordCandidate {
                score: count as f64 / total * boost,
                text: phrase,
            });
        }
    }

    // sort_by is stable, ties keep insertion order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(MAX_KEYWORDS);

    tracing::trace!(
        "Scored {} tokens into {} keyword candidates",
        tokens.len(),
        candidates.len()
    );

    candidates
}

/// Substring match in either direction.
fn overlaps(text: &str, term: &str) -> bool {
    text.contains(term) || term.contains(text)
}

fn lowered_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Occurrence counts, in order of first appearance.
fn count_in_order<T, I>(items: I) -> Vec<(T, usize)>
where
    T: std::hash::Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match index.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }
    counts
}
