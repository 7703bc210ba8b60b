//! Diversity of generated commit messages
//!
//! Cheap lexical statistics over a batch of model predictions, used to spot
//! a model that keeps emitting the same few messages.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Lexical diversity of a batch of predictions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiversityReport {
    /// Mean whitespace-token count per prediction
    pub avg_length: f64,
    /// Distinct lowercase tokens
    pub unique_unigrams: usize,
    /// Distinct adjacent lowercase token pairs
    pub unique_bigrams: usize,
    /// `unique_unigrams / total tokens`, 0 when there are no tokens
    pub diversity_ratio: f64,
}

/// Analyze a batch of predictions; `None` for an empty batch
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_generation_diversity<S: AsRef<str>>(predictions: &[S]) -> Option<DiversityReport> {
    if predictions.is_empty() {
        return None;
    }

    let mut total_tokens = 0usize;
    let mut unigrams: HashSet<String> = HashSet::new();
    let mut bigrams: HashSet<(String, String)> = HashSet::new();

    for prediction in predictions {
        let tokens: Vec<String> =
            prediction.as_ref().split_whitespace().map(str::to_lowercase).collect();
        total_tokens += tokens.len();

        for pair in tokens.windows(2) {
            bigrams.insert((pair[0].clone(), pair[1].clone()));
        }
        unigrams.extend(tokens);
    }

    let diversity_ratio = if total_tokens > 0 {
        unigrams.len() as f64 / total_tokens as f64
    } else {
        0.0
    };

    Some(DiversityReport {
        avg_length: total_tokens as f64 / predictions.len() as f64,
        unique_unigrams: unigrams.len(),
        unique_bigrams: bigrams.len(),
        diversity_ratio,
    })
}
