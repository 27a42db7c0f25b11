use crate::counters::AnnotationKind;
use regex::Regex;
use std::sync::LazyLock;

// `@` then the exact-case name, closed by a word boundary so `@NonNull` never
// eats the front of `@NonNullable`.
fn marker_pattern(name: &str) -> Regex {
    Regex::new(&format!(r"@\b{}\b", regex::escape(name))).expect("valid regex")
}

static NULLABLE: LazyLock<Regex> = LazyLock::new(|| marker_pattern("Nullable"));
static NON_NULL: LazyLock<Regex> = LazyLock::new(|| marker_pattern("NonNull"));
static NONNULL: LazyLock<Regex> = LazyLock::new(|| marker_pattern("Nonnull"));
static NOTNULL: LazyLock<Regex> = LazyLock::new(|| marker_pattern("Notnull"));
static NOT_NULL: LazyLock<Regex> = LazyLock::new(|| marker_pattern("NotNull"));
static MONOTONIC_NON_NULL: LazyLock<Regex> =
    LazyLock::new(|| marker_pattern("MonotonicNonNull"));

// The argument list ends at the first `)`; nested parentheses are not balanced.
static SUPPRESS_WARNINGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@\bSuppressWarnings\b\([^)]*\)").expect("valid regex")
});

pub fn pattern_for(kind: AnnotationKind) -> &'static Regex {
    match kind {
        AnnotationKind::Nullable => &*NULLABLE,
        AnnotationKind::NonNull => &*NON_NULL,
        AnnotationKind::Nonnull => &*NONNULL,
        AnnotationKind::Notnull => &*NOTNULL,
        AnnotationKind::NotNull => &*NOT_NULL,
        AnnotationKind::MonotonicNonNull => &*MONOTONIC_NON_NULL,
        AnnotationKind::SuppressWarnings => &*SUPPRESS_WARNINGS,
    }
}
