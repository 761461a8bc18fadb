use std::cmp::Ordering;

use tsum_core::Result;

pub mod lexrank;
pub mod sentences;

pub use lexrank::LexRankConfig;
pub use sentences::split_sentences;

/// Extractive summarizer: LexRank over the document's sentences.
///
/// Output sentences appear in ranking order (highest centrality first),
/// not document order, with casing and punctuation untouched.
pub struct ExtractiveSummarizer {
    lexrank: LexRankConfig,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self {
            lexrank: LexRankConfig::default(),
        }
    }

    pub fn with_lexrank_config(mut self, lexrank: LexRankConfig) -> Self {
        self.lexrank = lexrank;
        self
    }

    /// Return the top `sentences_count` sentences joined by single spaces.
    /// Documents with fewer sentences come back whole (still re-ranked).
    pub fn summarize(&self, text: &str, sentences_count: usize) -> Result<String> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Ok(String::new());
        }

        let tokenized: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| sentences::tokenize(s))
            .collect();
        let scores = lexrank::rank_sentences(&tokenized, &self.lexrank);

        let mut ranking: Vec<usize> = (0..sentences.len()).collect();
        // stable sort keeps document order among equal scores
        ranking.sort_by(|&a, &b| {
            scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal)
        });

        let selected: Vec<&str> = ranking
            .iter()
            .take(sentences_count)
            .map(|&i| sentences[i].as_str())
            .collect();
        Ok(selected.join(" "))
    }
}
