pub mod counters;
pub mod file_finder;
pub mod processor;
pub mod stripper;

use std::path::PathBuf;

pub use counters::{AnnotationKind, RemovalCounters};
pub use file_finder::{CliArgs, Command, CompletionArgs, RunConfig, StripArgs, find_files};
pub use processor::{ProcessedFileResult, process_files, process_single_file, strip_tree};
pub use stripper::{StripError, StripOutcome, strip_annotations};

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode {} as ASCII: {source}", .path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: StripError,
    },

    #[error("Annotation removal failed in {}: {source}", .path.display())]
    Strip {
        path: PathBuf,
        #[source]
        source: StripError,
    },

    #[error("Path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Directory walk failed: {0}")]
    Walk(String),
}

impl CoreError {
    /// Files that are not plain ASCII are `Decoding` errors; anything else the
    /// stripper reports is a `Strip` error.
    pub fn from_strip(path: &std::path::Path, source: StripError) -> Self {
        let path = path.to_path_buf();
        match source {
            StripError::NonAscii { .. } => CoreError::Decoding { path, source },
            _ => CoreError::Strip { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn non_ascii_is_a_decoding_error() {
        let err = CoreError::from_strip(
            Path::new("A.java"),
            StripError::NonAscii {
                offset: 3,
                byte: 0xe9,
            },
        );
        assert!(matches!(err, CoreError::Decoding { .. }));
        assert!(err.to_string().starts_with("Cannot decode A.java as ASCII"));
    }

    #[test]
    fn span_errors_are_not_labelled_as_decoding() {
        let overlap = CoreError::from_strip(
            Path::new("A.java"),
            StripError::OverlappingSpans {
                from: 2,
                last_to: 3,
            },
        );
        assert!(matches!(overlap, CoreError::Strip { .. }));
        assert!(!overlap.to_string().contains("decode"));

        let bounds = CoreError::from_strip(
            Path::new("A.java"),
            StripError::SpanOutOfBounds {
                from: 1,
                to: 9,
                len: 3,
            },
        );
        assert!(matches!(bounds, CoreError::Strip { .. }));
        assert!(
            bounds
                .to_string()
                .starts_with("Annotation removal failed in A.java")
        );
    }
}
