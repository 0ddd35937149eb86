use serde::{Deserialize, Serialize};

use crate::models::SimilarityPair;

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub documents: Vec<DocumentBody>,

    /// Overrides the server's configured threshold for this request.
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentBody {
    pub name: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub pairs: Vec<SimilarityPair>,
    pub report: String,
    pub generated_at: String,
}
