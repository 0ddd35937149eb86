pub mod diff;
pub mod document;
pub mod pair;
pub mod report;

pub use diff::DiffLine;
pub use document::Document;
pub use pair::SimilarityPair;
pub use report::{Page, PlacedLine, Report};
