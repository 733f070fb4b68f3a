//! Entry segmentation over cleaned bulletin text.

use super::patterns::ENTRY_MARKER;

/// One entry span located in the cleaned text.
///
/// `body` is the half-open byte range between the end of this entry's marker
/// and the start of the next marker (or end of text). `gap` is the range from
/// the start of the previous marker (or text start) up to this marker, scanned
/// by the jurisdiction tracker for province sub-headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySpan {
    /// Entry number as printed (4-7 digits).
    pub number: String,
    /// Half-open span of the entry text.
    pub body: std::ops::Range<usize>,
    /// Text preceding this entry's marker.
    pub gap: std::ops::Range<usize>,
}

/// Locate every entry marker and return ordered, non-overlapping spans.
///
/// Zero markers yield an empty vec; that is a normal outcome for cover and
/// summary pages, not an error.
pub fn segment(text: &str) -> Vec<EntrySpan> {
    let markers: Vec<_> = ENTRY_MARKER.captures_iter(text).collect();

    let mut entries = Vec::with_capacity(markers.len());
    for (i, caps) in markers.iter().enumerate() {
        let whole = caps.get(0).unwrap();
        let body_end = markers
            .get(i + 1)
            .map(|next| next.get(0).unwrap().start())
            .unwrap_or(text.len());
        let gap_start = if i > 0 {
            markers[i - 1].get(0).unwrap().start()
        } else {
            0
        };

        entries.push(EntrySpan {
            number: caps[1].to_string(),
            body: whole.end()..body_end,
            gap: gap_start..whole.start(),
        });
    }
    entries
}
