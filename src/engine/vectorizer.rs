use std::collections::{BTreeMap, HashMap, HashSet};

use regex::Regex;
use tracing::debug;

use crate::errors::CrosscheckError;
use crate::models::Document;

/// Tokens are runs of two or more word characters, lowercased.
const TOKEN_PATTERN: &str = r"\w\w+";

/// Ordered mapping from document name to its TF-IDF feature vector.
///
/// Every vector in one index shares the dimensionality and term ordering of
/// the vocabulary the index was built under. An index belongs to a single
/// run; vectors from different indexes are not comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusIndex {
    entries: Vec<(String, Vec<f64>)>,
    dimensions: usize,
}

impl CorpusIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimensionality shared by every vector in the index.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Iterate entries in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> + '_ {
        self.entries
            .iter()
            .map(|(name, vec)| (name.as_str(), vec.as_slice()))
    }

    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, vec)| vec.as_slice())
    }
}

/// Convert a corpus into TF-IDF vectors under a single shared vocabulary.
///
/// The vocabulary holds every distinct token across the whole corpus,
/// lexically sorted so vector dimensions do not depend on corpus order.
/// Term weights are raw counts scaled by a smoothed inverse document
/// frequency, `ln((1 + n) / (1 + df)) + 1`, and each document vector is
/// L2-normalized. Ubiquitous terms are down-weighted, distinctive ones
/// up-weighted. Output order matches input order, one vector per document.
pub fn vectorize(documents: &[Document]) -> Result<CorpusIndex, CrosscheckError> {
    if documents.is_empty() {
        return Err(CrosscheckError::EmptyCorpus);
    }

    let pattern = Regex::new(TOKEN_PATTERN).unwrap();
    let token_docs: Vec<Vec<String>> = documents
        .iter()
        .map(|doc| tokenize(&doc.text, &pattern))
        .collect();

    // Document frequency per term; BTreeMap keeps the vocabulary sorted.
    let mut df: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in &token_docs {
        let unique: HashSet<&str> = tokens.iter().map(|t| t.as_str()).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }
    if df.is_empty() {
        return Err(CrosscheckError::EmptyVocabulary);
    }

    let term_index: HashMap<&str, usize> = df
        .keys()
        .enumerate()
        .map(|(i, term)| (*term, i))
        .collect();

    let n_docs = documents.len() as f64;
    let idf: Vec<f64> = df
        .values()
        .map(|&doc_freq| ((1.0 + n_docs) / (1.0 + doc_freq as f64)).ln() + 1.0)
        .collect();

    let mut entries = Vec::with_capacity(documents.len());
    for (doc, tokens) in documents.iter().zip(&token_docs) {
        let mut vec = vec![0.0; idf.len()];
        for token in tokens {
            if let Some(&i) = term_index.get(token.as_str()) {
                vec[i] += 1.0;
            }
        }
        for (weight, idf) in vec.iter_mut().zip(&idf) {
            *weight *= idf;
        }

        let norm = vec.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut vec {
                *weight /= norm;
            }
        }
        entries.push((doc.name.clone(), vec));
    }

    debug!(
        documents = entries.len(),
        terms = idf.len(),
        "Vectorized corpus"
    );
    Ok(CorpusIndex {
        dimensions: idf.len(),
        entries,
    })
}

fn tokenize(text: &str, pattern: &Regex) -> Vec<String> {
    let lowered = text.to_lowercase();
    pattern
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}
