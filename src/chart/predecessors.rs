//! Parsing of free-text predecessor fields such as `"1FS,2SS;4"`.

use crate::model::{DependencyKind, PredecessorLink, TaskId};

/// Parse a predecessor field into ordered links.
///
/// Segments are separated by `,` or `;`. Each segment contributes the id
/// formed by its leading digits, and the relation code that follows them.
/// Segments without leading digits, or whose digits overflow a [`TaskId`],
/// contribute nothing. Duplicates are kept.
pub fn parse_links(raw: &str) -> Vec<PredecessorLink> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split([',', ';'])
        .filter(|segment| !segment.is_empty())
        .filter_map(parse_segment)
        .collect()
}

/// Parse a predecessor field into ordered ids.
pub fn parse_ids(raw: &str) -> Vec<TaskId> {
    parse_links(raw).into_iter().map(|link| link.id).collect()
}

fn parse_segment(segment: &str) -> Option<PredecessorLink> {
    let digits_end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    let (digits, suffix) = segment.split_at(digits_end);
    let id = digits.parse::<TaskId>().ok()?;
    Some(PredecessorLink {
        id,
        kind: DependencyKind::from_suffix(suffix),
    })
}
