use serde::{Deserialize, Serialize};

use crate::reporting::PageGeometry;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CrosscheckConfig {
    /// Minimum score a pair must reach to be reported. Absent means every
    /// pair is reported, near-zero scores included.
    pub threshold: Option<f64>,

    /// Report page layout; defaults to letter-page coordinates.
    pub page: Option<PageGeometry>,

    /// Default report output file.
    pub output: Option<String>,
}
