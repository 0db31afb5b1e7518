use serde::{Deserialize, Serialize};

use crate::wiki::WikiError;

/// A single line-range replacement on a page
///
/// `start` is inclusive, `end` is exclusive. An edit with `start == end`
/// inserts without deleting; an edit with empty `content` deletes without
/// inserting. `content` may span multiple lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub content: String,
}

impl Edit {
    pub fn new(start: usize, end: usize, content: impl Into<String>) -> Self {
        Self {
            start,
            end,
            content: content.into(),
        }
    }

    fn overlaps(&self, other: &Edit) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Validate a batch of edits against a page with `line_count` lines
///
/// Rejects reversed ranges, ranges that run past the end of the page, and
/// any pair of intersecting ranges. Two pure insertions at the same index do
/// not intersect and are allowed.
pub fn validate_edits(edits: &[Edit], line_count: usize) -> Result<(), WikiError> {
    for edit in edits {
        if edit.start > edit.end {
            return Err(WikiError::EditReversed {
                start: edit.start,
                end: edit.end,
            });
        }
        if edit.end > line_count {
            return Err(WikiError::EditOutOfBounds {
                start: edit.start,
                end: edit.end,
                line_count,
            });
        }
    }

    for (i, first) in edits.iter().enumerate() {
        for (j, second) in edits.iter().enumerate().skip(i + 1) {
            if first.overlaps(second) {
                return Err(WikiError::EditsOverlap {
                    first: i,
                    first_start: first.start,
                    first_end: first.end,
                    second: j,
                    second_start: second.start,
                    second_end: second.end,
                });
            }
        }
    }

    Ok(())
}

/// Apply validated edits to a page's lines
///
/// Edits are applied in descending start order so that earlier indices stay
/// stable while later ranges are rewritten.
pub fn apply_edits(lines: &mut Vec<String>, edits: &[Edit]) {
    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    for edit in ordered {
        lines.splice(edit.start..edit.end, [edit.content.clone()]);
    }
}
