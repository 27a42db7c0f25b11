pub mod common;
pub mod patterns;

pub use common::{AnnotationMatch, StripError, decode_ascii, remove_matches};

use crate::counters::{AnnotationKind, RemovalCounters};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOutcome {
    pub content: String,
    pub counts: RemovalCounters,
}

impl StripOutcome {
    pub fn is_modified(&self) -> bool {
        !self.counts.is_empty()
    }
}

pub fn find_annotations(content: &str, kind: AnnotationKind) -> Vec<AnnotationMatch> {
    patterns::pattern_for(kind)
        .find_iter(content)
        .map(AnnotationMatch::from)
        .collect()
}

/// Removes the targeted annotations from `content`, one global pass per kind in
/// declaration order. Each pass sees the output of the previous one.
pub fn strip_annotations(
    content: &str,
    remove_suppress_warnings: bool,
) -> Result<StripOutcome, StripError> {
    common::ensure_ascii(content)?;

    let mut counts = RemovalCounters::new();
    let mut current = content.to_string();
    for kind in AnnotationKind::targeted(remove_suppress_warnings) {
        let matches = find_annotations(&current, kind);
        if matches.is_empty() {
            continue;
        }
        counts.add(kind, matches.len());
        current = remove_matches(current, matches)?;
    }

    Ok(StripOutcome {
        content: current,
        counts,
    })
}
