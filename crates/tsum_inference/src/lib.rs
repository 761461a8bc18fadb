pub mod abstractive;
pub mod batch;
pub mod extractive;
pub mod models;
pub mod rouge;

/// Configuration for the generative backend.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model_name: Option<String>,
    pub model_url: Option<String>,
}

impl Config {
    pub fn with_model_name(name: impl Into<String>) -> Self {
        Self {
            model_name: Some(name.into()),
            ..Self::default()
        }
    }
}

pub mod prelude {
    pub use super::abstractive::AbstractiveSummarizer;
    pub use super::extractive::ExtractiveSummarizer;
    pub use super::models::create_model;
    pub use super::Config;
    pub use tsum_core::{Document, Error, Mode, Result, SummaryOptions};
}

pub use abstractive::AbstractiveSummarizer;
pub use extractive::ExtractiveSummarizer;
pub use models::create_model;
