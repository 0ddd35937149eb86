use serde::{Deserialize, Serialize};

/// An unordered pair of distinct documents and their similarity score.
///
/// `left` is always lexically smaller than `right`, so (A, B) and (B, A)
/// collapse to a single canonical representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityPair {
    pub left: String,
    pub right: String,
    pub score: f64,
}

impl SimilarityPair {
    /// Build a pair with the two names placed in canonical order.
    pub fn new(a: &str, b: &str, score: f64) -> Self {
        let (left, right) = if a <= b { (a, b) } else { (b, a) };
        Self {
            left: left.to_string(),
            right: right.to_string(),
            score,
        }
    }
}
