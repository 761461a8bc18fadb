//! ROUGE-1/2/L evaluation averaged over reference/hypothesis pairs.

use std::collections::HashMap;

use serde::Serialize;
use tsum_core::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RougeScore {
    pub precision: f64,
    pub recall: f64,
    pub fmeasure: f64,
}

impl RougeScore {
    fn new(precision: f64, recall: f64) -> Self {
        let fmeasure = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            fmeasure,
        }
    }

    fn accumulate(&mut self, other: &RougeScore) {
        self.precision += other.precision;
        self.recall += other.recall;
        self.fmeasure += other.fmeasure;
    }

    fn scale(&mut self, factor: f64) {
        self.precision *= factor;
        self.recall *= factor;
        self.fmeasure *= factor;
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RougeScores {
    pub rouge1: RougeScore,
    pub rouge2: RougeScore,
    pub rouge_l: RougeScore,
}

/// Score each reference/hypothesis pair and arithmetic-mean every metric.
/// Mismatched or empty lists are an error, never a silent truncation.
pub fn rouge_eval(references: &[String], hypotheses: &[String]) -> Result<RougeScores> {
    if references.len() != hypotheses.len() {
        return Err(Error::Evaluation(format!(
            "reference and hypothesis counts differ ({} vs {})",
            references.len(),
            hypotheses.len()
        )));
    }
    if references.is_empty() {
        return Err(Error::Evaluation("nothing to evaluate".to_string()));
    }

    let mut averages = RougeScores::default();
    for (reference, hypothesis) in references.iter().zip(hypotheses.iter()) {
        let pair = score_pair(reference, hypothesis);
        averages.rouge1.accumulate(&pair.rouge1);
        averages.rouge2.accumulate(&pair.rouge2);
        averages.rouge_l.accumulate(&pair.rouge_l);
    }

    let factor = 1.0 / references.len() as f64;
    averages.rouge1.scale(factor);
    averages.rouge2.scale(factor);
    averages.rouge_l.scale(factor);
    Ok(averages)
}

/// ROUGE scores for a single pair.
pub fn score_pair(reference: &str, hypothesis: &str) -> RougeScores {
    let reference_tokens = tokenize(reference);
    let hypothesis_tokens = tokenize(hypothesis);
    RougeScores {
        rouge1: rouge_n(&reference_tokens, &hypothesis_tokens, 1),
        rouge2: rouge_n(&reference_tokens, &hypothesis_tokens, 2),
        rouge_l: rouge_l(&reference_tokens, &hypothesis_tokens),
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Clipped n-gram overlap.
fn rouge_n<'a>(reference: &'a [String], hypothesis: &'a [String], n: usize) -> RougeScore {
    let reference_ngrams = ngram_counts(reference, n);
    let hypothesis_ngrams = ngram_counts(hypothesis, n);
    let reference_total: usize = reference_ngrams.values().sum();
    let hypothesis_total: usize = hypothesis_ngrams.values().sum();
    if reference_total == 0 || hypothesis_total == 0 {
        return RougeScore::default();
    }

    let overlap: usize = hypothesis_ngrams
        .iter()
        .map(|(ngram, &count)| count.min(reference_ngrams.get(ngram).copied().unwrap_or(0)))
        .sum();

    RougeScore::new(
        overlap as f64 / hypothesis_total as f64,
        overlap as f64 / reference_total as f64,
    )
}

fn ngram_counts<'a>(tokens: &'a [String], n: usize) -> HashMap<&'a [String], usize> {
    let mut counts = HashMap::new();
    if tokens.len() >= n {
        for ngram in tokens.windows(n) {
            *counts.entry(ngram).or_insert(0) += 1;
        }
    }
    counts
}

/// Longest-common-subsequence variant.
fn rouge_l(reference: &[String], hypothesis: &[String]) -> RougeScore {
    if reference.is_empty() || hypothesis.is_empty() {
        return RougeScore::default();
    }
    let lcs = lcs_length(reference, hypothesis) as f64;
    RougeScore::new(lcs / hypothesis.len() as f64, lcs / reference.len() as f64)
}

fn lcs_length(a: &[String], b: &[String]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for item_a in a {
        for (j, item_b) in b.iter().enumerate() {
            current[j + 1] = if item_a == item_b {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}
