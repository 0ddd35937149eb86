use serde::{Deserialize, Serialize};

use crate::models::{DiffLine, Page, PlacedLine, Report, SimilarityPair};

/// Vertical layout for report pages. Lines descend from `top` in
/// `line_height` steps; a line that would land below `bottom` starts a new
/// page instead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageGeometry {
    pub top: f64,
    pub bottom: f64,
    pub line_height: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            top: 700.0,
            bottom: 40.0,
            line_height: 15.0,
        }
    }
}

struct PageCursor {
    geometry: PageGeometry,
    pages: Vec<Page>,
    current: Page,
    y: f64,
}

impl PageCursor {
    fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: Page::default(),
            y: geometry.top,
        }
    }

    fn push_line(&mut self, text: String) {
        if self.y < self.geometry.bottom {
            self.pages.push(std::mem::take(&mut self.current));
            self.y = self.geometry.top;
        }
        self.current.lines.push(PlacedLine { y: self.y, text });
        self.y -= self.geometry.line_height;
    }

    fn finish(mut self) -> Report {
        if !self.current.lines.is_empty() {
            self.pages.push(self.current);
        }
        Report { pages: self.pages }
    }
}

/// Assemble the paginated report for a set of compared pairs.
///
/// Each pair contributes a header naming the two documents, a score line
/// with two-decimal formatting, then its diff: unchanged lines verbatim,
/// one-sided lines behind a `[-]` (left only) or `[+]` (right only) marker.
pub fn build_report(
    entries: &[(SimilarityPair, Vec<DiffLine>)],
    geometry: &PageGeometry,
) -> Report {
    let mut cursor = PageCursor::new(*geometry);

    for (pair, diff) in entries {
        cursor.push_line(format!(
            "Plagiarism detected between {} and {}",
            pair.left, pair.right
        ));
        cursor.push_line(format!("Similarity Score: {:.2}", pair.score));
        for line in diff {
            cursor.push_line(match line {
                DiffLine::Unchanged(text) => text.clone(),
                DiffLine::Left(text) => format!("[-]{text}"),
                DiffLine::Right(text) => format!("[+]{text}"),
            });
        }
    }

    cursor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(left: &str, right: &str, score: f64, diff: Vec<DiffLine>) -> (SimilarityPair, Vec<DiffLine>) {
        (SimilarityPair::new(left, right, score), diff)
    }

    #[test]
    fn test_build_report_headers_and_markers() {
        let entries = vec![entry(
            "a.txt",
            "b.txt",
            0.875,
            vec![
                DiffLine::Unchanged("shared".into()),
                DiffLine::Left("only left".into()),
                DiffLine::Right("only right".into()),
            ],
        )];
        let report = build_report(&entries, &PageGeometry::default());

        assert_eq!(report.pages.len(), 1);
        let texts: Vec<&str> = report.pages[0]
            .lines
            .iter()
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "Plagiarism detected between a.txt and b.txt",
                "Similarity Score: 0.88",
                "shared",
                "[-]only left",
                "[+]only right",
            ]
        );
    }

    #[test]
    fn test_build_report_lines_descend_from_top() {
        let entries = vec![entry(
            "a.txt",
            "b.txt",
            1.0,
            vec![DiffLine::Unchanged("x".into())],
        )];
        let geometry = PageGeometry::default();
        let report = build_report(&entries, &geometry);

        let lines = &report.pages[0].lines;
        assert_eq!(lines[0].y, geometry.top);
        assert_eq!(lines[1].y, geometry.top - geometry.line_height);
        assert_eq!(lines[2].y, geometry.top - 2.0 * geometry.line_height);
    }

    #[test]
    fn test_build_report_paginates_on_overflow() {
        // Three lines per page: top 40, bottom 10, step 15 places lines at
        // 40, 25, 10 and then wraps.
        let geometry = PageGeometry {
            top: 40.0,
            bottom: 10.0,
            line_height: 15.0,
        };
        let diff: Vec<DiffLine> = (0..5)
            .map(|i| DiffLine::Unchanged(format!("line{i}")))
            .collect();
        let entries = vec![entry("a.txt", "b.txt", 0.5, diff)];

        let report = build_report(&entries, &geometry);
        // 7 lines total: header, score, 5 diff lines -> pages of 3, 3, 1.
        assert_eq!(report.pages.len(), 3);
        assert_eq!(report.pages[0].lines.len(), 3);
        assert_eq!(report.pages[1].lines.len(), 3);
        assert_eq!(report.pages[2].lines.len(), 1);
        assert_eq!(report.pages[1].lines[0].y, geometry.top);
        assert_eq!(report.line_count(), 7);
    }

    #[test]
    fn test_build_report_empty_entries() {
        let report = build_report(&[], &PageGeometry::default());
        assert!(report.pages.is_empty());
    }
}
