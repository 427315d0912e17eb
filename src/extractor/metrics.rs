//! Content metrics: keyword density, Flesch readability, word count, reading time.

use super::text::clean_text;

const WORDS_PER_MINUTE: usize = 200;
const FLESCH_BASE: f64 = 206.835;
const FLESCH_SENTENCE_WEIGHT: f64 = 1.015;
const FLESCH_SYLLABLE_WEIGHT: f64 = 84.6;

/// Percentage of words in `content` that are occurrences of `keyword`.
///
/// Occurrences are counted as non-overlapping substring matches in the cleaned,
/// lowercased content. Returns 0 for empty content or an empty keyword.
pub fn calculate_keyword_density(content: &str, keyword: &str) -> f64 {
    let cleaned = clean_text(content);
    let total_words = cleaned.split_whitespace().count();
    let needle = clean_text(keyword);

    if total_words == 0 || needle.is_empty() {
        return 0.0;
    }

    let occurrences = cleaned.matches(needle.as_str()).count();
    occurrences as f64 / total_words as f64 * 100.0
}

/// Flesch Reading Ease approximation clamped to 0..=100.
pub fn calculate_readability_score(content: &str) -> f64 {
    let sentences = content
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let words: Vec<&str> = content.split_whitespace().collect();

    if sentences == 0 || words.is_empty() {
        return 0.0;
    }

    let syllables: usize = words.iter().map(|word| count_syllables(word)).sum();
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;

    let score = FLESCH_BASE
        - FLESCH_SENTENCE_WEIGHT * words_per_sentence
        - FLESCH_SYLLABLE_WEIGHT * syllables_per_word;
    score.clamp(0.0, 100.0)
}

/// Vowel groups, minus a trailing silent "e", never less than one.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let mut count = 0;
    let mut previous_vowel = false;
    for c in &letters {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    if letters.last() == Some(&'e') && count > 1 {
        count -= 1;
    }

    count.max(1)
}

pub fn count_words(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Minutes, rounded up.
pub fn reading_time(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}
