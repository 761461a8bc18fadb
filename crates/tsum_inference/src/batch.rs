use tsum_core::Result;

use crate::{AbstractiveSummarizer, Config, ExtractiveSummarizer};

/// Summarize each text in order with a single summarizer instance, so the
/// backend initializes once and is reused across the batch.
pub async fn batch_summarize_abstractive(texts: &[String], config: Config) -> Result<Vec<String>> {
    let summarizer = AbstractiveSummarizer::new(config);
    let mut results = Vec::with_capacity(texts.len());
    for text in texts {
        results.push(summarizer.summarize(text).await?);
    }
    Ok(results)
}

pub fn batch_summarize_extractive(texts: &[String], sentences_count: usize) -> Result<Vec<String>> {
    let summarizer = ExtractiveSummarizer::new();
    texts
        .iter()
        .map(|text| summarizer.summarize(text, sentences_count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_batch_abstractive_preserves_order() {
        let texts = vec![
            "First short document to summarize.".to_string(),
            "Second short document to summarize.".to_string(),
        ];
        let results = batch_summarize_abstractive(&texts, Config::with_model_name("dummy"))
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[0].starts_with("First"));
        assert!(results[1].starts_with("Second"));
    }

    #[test]
    fn test_batch_extractive() {
        let texts = vec![
            "One sentence here. Another sentence there. A third one too.".to_string(),
            "A single sentence document.".to_string(),
        ];
        let results = batch_summarize_extractive(&texts, 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1], "A single sentence document.");
    }
}
