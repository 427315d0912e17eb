//! Keyword and metric extraction over raw article text.

pub mod keywords;
pub mod metrics;
pub mod text;

pub use keywords::{extract_keywords, score_keywords, MAX_KEYWORDS};
pub use metrics::{
    calculate_keyword_density, calculate_readability_score, count_syllables, count_words,
    reading_time,
};
