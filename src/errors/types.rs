use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrosscheckError {
    #[error("Corpus is empty: at least one document is required")]
    EmptyCorpus,

    #[error("Vocabulary is empty: no term survived tokenization")]
    EmptyVocabulary,

    #[error("Vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
