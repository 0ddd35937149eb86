use serde::{Deserialize, Serialize};

/// One line of a rendered comparison between two documents.
///
/// The side a line belongs to is carried as a variant, not a textual
/// marker; choosing marker characters is the report builder's business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum DiffLine {
    /// Present in both documents.
    Unchanged(String),
    /// Present only in the left document.
    Left(String),
    /// Present only in the right document.
    Right(String),
}

impl DiffLine {
    pub fn text(&self) -> &str {
        match self {
            Self::Unchanged(t) | Self::Left(t) | Self::Right(t) => t,
        }
    }
}
