use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;
use tsum_core::chunking::{chunk_text, ChunkConfig};
use tsum_core::{GenerativeModel, Result, SummaryOptions};

use crate::models::create_model;
use crate::Config;

/// Two-stage abstractive summarizer.
///
/// Short inputs go to the backend in one call. Longer inputs are chunked,
/// each chunk is summarized on its own (stage 1), and one more pass runs
/// over the space-joined chunk summaries (stage 2). The stage-2 input is
/// never re-chunked, even if the concatenation exceeds the backend's
/// effective input limit.
///
/// The backend is created on first use and reused for the lifetime of the
/// instance.
pub struct AbstractiveSummarizer {
    config: Config,
    chunking: ChunkConfig,
    model: OnceCell<Arc<dyn GenerativeModel>>,
}

impl AbstractiveSummarizer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            chunking: ChunkConfig::default(),
            model: OnceCell::new(),
        }
    }

    /// Use a pre-built backend instead of the lazy factory.
    pub fn with_model(model: Arc<dyn GenerativeModel>) -> Self {
        Self {
            config: Config::default(),
            chunking: ChunkConfig::default(),
            model: OnceCell::new_with(Some(model)),
        }
    }

    pub fn with_chunk_config(mut self, chunking: ChunkConfig) -> Self {
        self.chunking = chunking;
        self
    }

    async fn model(&self) -> Result<&Arc<dyn GenerativeModel>> {
        self.model
            .get_or_try_init(|| create_model(&self.config))
            .await
    }

    pub async fn summarize(&self, text: &str) -> Result<String> {
        self.summarize_with(text, &SummaryOptions::default()).await
    }

    pub async fn summarize_with(&self, text: &str, options: &SummaryOptions) -> Result<String> {
        let model = self.model().await?;
        let chunks = chunk_text(text, &self.chunking)?;

        if chunks.len() == 1 {
            let summary = model.generate_summary(&chunks[0], options).await?;
            return Ok(summary.trim().to_string());
        }

        info!(
            "Summarizing {} chunks with {} before the final pass",
            chunks.len(),
            model.name()
        );

        // stage 1: summarize each chunk, strictly sequential
        let mut chunk_summaries = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            let summary = model.generate_summary(chunk, options).await?;
            chunk_summaries.push(summary.trim().to_string());
        }

        // stage 2: one more pass over the concatenated chunk summaries
        let concatenated = chunk_summaries.join(" ");
        let final_summary = model.generate_summary(&concatenated, options).await?;
        Ok(final_summary.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DummyModel;

    fn summarizer_with_counter(chunking: ChunkConfig) -> (Arc<DummyModel>, AbstractiveSummarizer) {
        let model = Arc::new(DummyModel::new());
        let summarizer =
            AbstractiveSummarizer::with_model(model.clone()).with_chunk_config(chunking);
        (model, summarizer)
    }

    #[tokio::test]
    async fn test_single_chunk_invokes_model_once() {
        let (model, summarizer) = summarizer_with_counter(ChunkConfig::default());
        let summary = summarizer.summarize("A short text well under the chunk size.").await.unwrap();
        assert!(!summary.is_empty());
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_multi_chunk_invokes_model_n_plus_one_times() {
        let chunking = ChunkConfig {
            chunk_size: 40,
            overlap: 10,
            slack: 10,
        };
        let text: String = (0..60).map(|i| format!("word{} ", i)).collect();
        let expected_chunks = chunk_text(&text, &chunking).unwrap().len();
        assert!(expected_chunks > 1);

        let (model, summarizer) = summarizer_with_counter(chunking);
        let summary = summarizer.summarize(&text).await.unwrap();
        assert!(!summary.is_empty());
        assert_eq!(model.calls(), expected_chunks + 1);
    }

    #[tokio::test]
    async fn test_lazy_initialization_through_factory() {
        let summarizer = AbstractiveSummarizer::new(Config::with_model_name("dummy"));
        let first = summarizer.summarize("One short sentence.").await.unwrap();
        let second = summarizer.summarize("Another short sentence.").await.unwrap();
        assert!(!first.is_empty());
        assert!(!second.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_chunk_config_propagates() {
        let chunking = ChunkConfig {
            chunk_size: 10,
            overlap: 10,
            slack: 0,
        };
        let (_, summarizer) = summarizer_with_counter(chunking);
        assert!(summarizer.summarize("some input text that is long enough").await.is_err());
    }
}
