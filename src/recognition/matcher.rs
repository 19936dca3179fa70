//! Transcript matching
//!
//! Pure functions of "transcript + current collection"; no speech backend
//! is needed to drive them.

use super::Enclosure;
use crate::sim::{PillField, WordPill};

/// Catch the pill named by a finalized transcript.
///
/// On a match the first such pill (collection order) leaves the field and
/// its label is appended to the enclosure. Unknown words change nothing.
pub fn capture<E: Enclosure + ?Sized>(
    field: &mut PillField,
    transcript: &str,
    enclosure: &mut E,
) -> Option<WordPill> {
    let pill = field.remove_by_label(transcript)?;
    enclosure.append(pill.label());
    Some(pill)
}

/// One recognizer result: the top alternative's text and whether it is final
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub transcript: String,
    pub is_final: bool,
}

/// Split a batch of results into `(interim, finalized)` text.
///
/// Segments are concatenated in order into whichever side they belong to.
pub fn collect_transcripts<'a, I>(segments: I) -> (String, String)
where
    I: IntoIterator<Item = &'a Segment>,
{
    let mut interim = String::new();
    let mut finalized = String::new();
    for segment in segments {
        if segment.is_final {
            finalized.push_str(&segment.transcript);
        } else {
            interim.push_str(&segment.transcript);
        }
    }
    (interim, finalized)
}

/// Flatten one recognizer event's result list into `(interim, finalized)`.
///
/// Results before `result_index` were already delivered by earlier events and
/// are skipped.
pub fn flatten_results(result_index: u32, segments: &[Segment]) -> (String, String) {
    let start = (result_index as usize).min(segments.len());
    collect_transcripts(&segments[start..])
}
