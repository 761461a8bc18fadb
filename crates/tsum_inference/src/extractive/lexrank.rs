//! LexRank sentence ranking: idf-modified cosine similarity between
//! sentence vectors, thresholded into an adjacency matrix, ranked by power
//! iteration over the degree-normalized transition matrix.

use std::collections::{HashMap, HashSet};

/// LexRank parameters.
#[derive(Debug, Clone)]
pub struct LexRankConfig {
    /// Minimum cosine similarity for an edge between two sentences
    pub threshold: f64,
    /// Convergence threshold for power iteration (L1 norm)
    pub epsilon: f64,
    /// Maximum number of power iterations
    pub max_iterations: usize,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            epsilon: 1e-4,
            max_iterations: 100,
        }
    }
}

/// Rank tokenized sentences, returning one centrality score per sentence.
/// Scores sum to 1; an empty input yields an empty vector.
pub fn rank_sentences(sentences: &[Vec<String>], config: &LexRankConfig) -> Vec<f64> {
    let n = sentences.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1.0];
    }

    let idf = inverse_document_frequencies(sentences);
    let vectors: Vec<HashMap<&str, f64>> = sentences
        .iter()
        .map(|tokens| weighted_vector(tokens, &idf))
        .collect();

    // Adjacency: 1 where the idf-modified cosine clears the threshold.
    // The diagonal always qualifies (self-similarity is 1), so every row
    // has a non-zero degree.
    let mut matrix = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in 0..n {
            if cosine(&vectors[i], &vectors[j]) > config.threshold {
                matrix[i][j] = 1.0;
            }
        }
    }
    for row in &mut matrix {
        let degree: f64 = row.iter().sum();
        if degree > 0.0 {
            for cell in row.iter_mut() {
                *cell /= degree;
            }
        }
    }

    power_iteration(&matrix, config)
}

fn inverse_document_frequencies(sentences: &[Vec<String>]) -> HashMap<&str, f64> {
    // keys borrow from `sentences`; callers share that lifetime
    let n = sentences.len() as f64;
    let mut document_frequency: HashMap<&str, usize> = HashMap::new();
    for tokens in sentences {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *document_frequency.entry(term).or_insert(0) += 1;
        }
    }
    document_frequency
        .into_iter()
        .map(|(term, df)| (term, (n / (1.0 + df as f64)).ln() + 1.0))
        .collect()
}

fn weighted_vector<'a>(
    tokens: &'a [String],
    idf: &HashMap<&'a str, f64>,
) -> HashMap<&'a str, f64> {
    let mut tf: HashMap<&str, f64> = HashMap::new();
    for token in tokens {
        *tf.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    for (term, weight) in tf.iter_mut() {
        *weight *= idf.get(term).copied().unwrap_or(1.0);
    }
    tf
}

fn cosine<'a>(a: &HashMap<&'a str, f64>, b: &HashMap<&'a str, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, weight)| b.get(term).map(|other| weight * other))
        .sum();
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Stationary distribution of the row-stochastic matrix via power iteration.
fn power_iteration(matrix: &[Vec<f64>], config: &LexRankConfig) -> Vec<f64> {
    let n = matrix.len();
    let mut scores = vec![1.0 / n as f64; n];
    let mut next = vec![0.0f64; n];

    for _ in 0..config.max_iterations {
        next.fill(0.0);
        for (i, row) in matrix.iter().enumerate() {
            for (j, &weight) in row.iter().enumerate() {
                next[j] += scores[i] * weight;
            }
        }
        let delta: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();
        std::mem::swap(&mut scores, &mut next);
        if delta < config.epsilon {
            break;
        }
    }

    scores
}
