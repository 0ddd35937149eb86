use crate::engine::similarity::cosine;
use crate::engine::vectorizer::CorpusIndex;
use crate::errors::CrosscheckError;
use crate::models::SimilarityPair;

/// Score every unordered pair of distinct documents in the index.
///
/// Visits each of the C(n, 2) pairs exactly once and emits one canonically
/// ordered entry per pair. The result is a freshly built list sorted by
/// name, so it does not depend on corpus iteration order and carries no
/// state between invocations. `threshold` of `None` reports every pair,
/// near-zero scores included; `Some(t)` keeps pairs scoring at least `t`.
pub fn compare(
    index: &CorpusIndex,
    threshold: Option<f64>,
) -> Result<Vec<SimilarityPair>, CrosscheckError> {
    let entries: Vec<(&str, &[f64])> = index.iter().collect();
    let mut pairs = Vec::new();

    for (i, (name_a, vec_a)) in entries.iter().enumerate() {
        for (name_b, vec_b) in entries.iter().skip(i + 1) {
            let score = cosine(vec_a, vec_b)?;
            if threshold.map_or(true, |t| score >= t) {
                pairs.push(SimilarityPair::new(name_a, name_b, score));
            }
        }
    }

    pairs.sort_by(|a, b| (&a.left, &a.right).cmp(&(&b.left, &b.right)));
    Ok(pairs)
}
