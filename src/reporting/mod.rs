pub mod builder;
pub mod formatter;

pub use builder::{build_report, PageGeometry};
pub use formatter::{render_text, write_report};
