use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use tracing::info;

use crate::api::models::{CheckRequest, CheckResponse};
use crate::api::AppState;
use crate::engine::{run_check, CheckOptions};
use crate::errors::CrosscheckError;
use crate::models::Document;
use crate::reporting::render_text;

/// Compare the submitted documents and return the pairs plus the rendered
/// report. Every request builds its own corpus index; nothing is shared
/// across requests.
pub async fn check_documents(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, CrosscheckError> {
    if request.documents.len() < 2 {
        return Err(CrosscheckError::Corpus(
            "At least two documents are required".into(),
        ));
    }

    let mut seen = HashSet::new();
    for doc in &request.documents {
        if !seen.insert(doc.name.as_str()) {
            return Err(CrosscheckError::Corpus(format!(
                "Duplicate document name: {}",
                doc.name
            )));
        }
    }

    let threshold = request.threshold.or(state.config.threshold);
    if let Some(t) = threshold {
        if !(0.0..=1.0).contains(&t) {
            return Err(CrosscheckError::Config(format!(
                "threshold must lie in [0, 1], got {t}"
            )));
        }
    }

    let documents: Vec<Document> = request
        .documents
        .into_iter()
        .map(|doc| Document {
            name: doc.name,
            text: doc.text,
        })
        .collect();

    let options = CheckOptions {
        threshold,
        geometry: state.config.page.unwrap_or_default(),
    };
    let outcome = run_check(&documents, &options)?;
    info!(
        documents = documents.len(),
        pairs = outcome.pairs.len(),
        "API check complete"
    );

    Ok(Json(CheckResponse {
        report: render_text(&outcome.report),
        pairs: outcome.pairs,
        generated_at: Utc::now().to_rfc3339(),
    }))
}
