// src/lib.rs

pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod lifecycle;
pub mod service;
#[cfg(test)]
pub(crate) mod test_utils;

pub use config::SeoConfig;
pub use error::{AppError, Result};
pub use service::SeoAnalyzer;
