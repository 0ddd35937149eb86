pub mod comparator;
pub mod similarity;
pub mod vectorizer;

use tracing::info;

use crate::diff::diff_lines;
use crate::errors::CrosscheckError;
use crate::models::{DiffLine, Document, Report, SimilarityPair};
use crate::reporting::builder::build_report;
use crate::reporting::PageGeometry;

pub use vectorizer::CorpusIndex;

/// Options for a single comparison run.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Minimum score a pair must reach to be reported. `None` reports
    /// every pair.
    pub threshold: Option<f64>,
    pub geometry: PageGeometry,
}

/// The outcome of one comparison run.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub pairs: Vec<SimilarityPair>,
    pub report: Report,
}

/// Run the full comparison pipeline over an in-memory corpus.
///
/// Vectorizes the corpus once, scores every unordered pair, renders a
/// line diff for each reported pair from the raw texts, and assembles the
/// paginated report. Synchronous and single-threaded; all intermediate
/// state is owned by this call.
pub fn run_check(
    documents: &[Document],
    options: &CheckOptions,
) -> Result<CheckOutcome, CrosscheckError> {
    let index = vectorizer::vectorize(documents)?;
    let pairs = comparator::compare(&index, options.threshold)?;

    let mut entries: Vec<(SimilarityPair, Vec<DiffLine>)> = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        let left = find_text(documents, &pair.left)?;
        let right = find_text(documents, &pair.right)?;
        entries.push((pair.clone(), diff_lines(left, right)));
    }

    let report = build_report(&entries, &options.geometry);
    info!(
        documents = documents.len(),
        pairs = pairs.len(),
        pages = report.pages.len(),
        "Comparison run complete"
    );

    Ok(CheckOutcome { pairs, report })
}

fn find_text<'a>(documents: &'a [Document], name: &str) -> Result<&'a str, CrosscheckError> {
    documents
        .iter()
        .find(|doc| doc.name == name)
        .map(|doc| doc.text.as_str())
        .ok_or_else(|| CrosscheckError::Internal(format!("Unknown document in pair: {name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new("a.txt", "the cat sat"),
            Document::new("b.txt", "the cat sat"),
            Document::new("c.txt", "dogs bark loudly"),
        ]
    }

    #[test]
    fn test_run_check_reports_every_pair_by_default() {
        let outcome = run_check(&corpus(), &CheckOptions::default()).unwrap();
        assert_eq!(outcome.pairs.len(), 3);
        assert!(!outcome.report.pages.is_empty());
    }

    #[test]
    fn test_run_check_threshold_limits_report() {
        let options = CheckOptions {
            threshold: Some(0.9),
            ..Default::default()
        };
        let outcome = run_check(&corpus(), &options).unwrap();
        assert_eq!(outcome.pairs.len(), 1);
        assert_eq!(outcome.pairs[0].left, "a.txt");
        assert_eq!(outcome.pairs[0].right, "b.txt");
    }

    #[test]
    fn test_run_check_propagates_empty_corpus() {
        let err = run_check(&[], &CheckOptions::default()).unwrap_err();
        assert!(matches!(err, CrosscheckError::EmptyCorpus));
    }

    #[test]
    fn test_run_check_single_document_yields_empty_report() {
        let docs = vec![Document::new("only.txt", "the cat sat")];
        let outcome = run_check(&docs, &CheckOptions::default()).unwrap();
        assert!(outcome.pairs.is_empty());
        assert!(outcome.report.pages.is_empty());
    }
}
