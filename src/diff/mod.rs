use similar::{ChangeTag, TextDiff};

use crate::models::DiffLine;

/// Line-based diff of two documents.
///
/// Lines shared by both sides in matching relative order come back as
/// `Unchanged`; lines unique to one side come back as `Left` or `Right`,
/// interleaved in standard diff order. Empty inputs produce an
/// all-one-sided diff, or nothing when both are empty.
pub fn diff_lines(left: &str, right: &str) -> Vec<DiffLine> {
    let diff = TextDiff::from_lines(left, right);
    diff.iter_all_changes()
        .map(|change| {
            let text = change.value().trim_end_matches(['\r', '\n']).to_string();
            match change.tag() {
                ChangeTag::Equal => DiffLine::Unchanged(text),
                ChangeTag::Delete => DiffLine::Left(text),
                ChangeTag::Insert => DiffLine::Right(text),
            }
        })
        .collect()
}
