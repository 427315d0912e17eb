pub mod analyzer;
pub mod auto_seo;
pub mod scoring;
pub mod synthesizer;

pub use analyzer::SeoAnalyzer;
pub use synthesizer::{generate_seo_description, generate_seo_title, truncate_with_ellipsis};
