//! Pairwise document similarity checker.
//!
//! Loads a corpus of text documents, scores every unordered pair by TF-IDF
//! cosine similarity, renders a line-level diff for each reported pair,
//! and assembles a paginated plain-text report. Exposed through a CLI and
//! a small JSON API.

pub mod api;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod diff;
pub mod engine;
pub mod errors;
pub mod models;
pub mod reporting;

pub use engine::{run_check, CheckOptions, CheckOutcome};
pub use errors::CrosscheckError;
