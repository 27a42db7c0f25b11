use std::fmt;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnnotationKind {
    Nullable,
    NonNull,
    Nonnull,
    Notnull,
    NotNull,
    MonotonicNonNull,
    SuppressWarnings,
}

impl AnnotationKind {
    /// Declaration order, which is also the order passes run and the summary prints.
    pub const ALL: [AnnotationKind; 7] = [
        AnnotationKind::Nullable,
        AnnotationKind::NonNull,
        AnnotationKind::Nonnull,
        AnnotationKind::Notnull,
        AnnotationKind::NotNull,
        AnnotationKind::MonotonicNonNull,
        AnnotationKind::SuppressWarnings,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnnotationKind::Nullable => "Nullable",
            AnnotationKind::NonNull => "NonNull",
            AnnotationKind::Nonnull => "Nonnull",
            AnnotationKind::Notnull => "Notnull",
            AnnotationKind::NotNull => "NotNull",
            AnnotationKind::MonotonicNonNull => "MonotonicNonNull",
            AnnotationKind::SuppressWarnings => "SuppressWarnings",
        }
    }

    /// Kinds that are stripped on every run.
    pub fn is_nullness(self) -> bool {
        !matches!(self, AnnotationKind::SuppressWarnings)
    }

    /// Kinds targeted by a run, in pass order.
    pub fn targeted(remove_suppress_warnings: bool) -> impl Iterator<Item = AnnotationKind> {
        Self::ALL
            .into_iter()
            .filter(move |k| k.is_nullness() || remove_suppress_warnings)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalCounters {
    counts: [usize; AnnotationKind::ALL.len()],
}

impl RemovalCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: AnnotationKind) -> usize {
        self.counts[kind.index()]
    }

    pub fn add(&mut self, kind: AnnotationKind, n: usize) {
        self.counts[kind.index()] += n;
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (AnnotationKind, usize)> + '_ {
        AnnotationKind::ALL.into_iter().map(|k| (k, self.get(k)))
    }

    /// Summary lines in declaration order, e.g. `  @Nullable: 3`.
    pub fn summary_lines(&self, include_suppress_warnings: bool) -> Vec<String> {
        AnnotationKind::targeted(include_suppress_warnings)
            .map(|k| format!("  {}: {}", k, self.get(k)))
            .collect()
    }
}

impl AddAssign for RemovalCounters {
    fn add_assign(&mut self, rhs: Self) {
        for (kind, n) in rhs.iter() {
            self.add(kind, n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_case_distinct() {
        let names: Vec<_> = AnnotationKind::ALL.iter().map(|k| k.name()).collect();
        assert!(names.contains(&"NonNull"));
        assert!(names.contains(&"Nonnull"));
        assert!(names.contains(&"NotNull"));
        assert!(names.contains(&"Notnull"));
        assert_eq!(AnnotationKind::NonNull.to_string(), "@NonNull");
    }

    #[test]
    fn targeted_respects_flag() {
        assert_eq!(AnnotationKind::targeted(false).count(), 6);
        assert_eq!(
            AnnotationKind::targeted(true).last(),
            Some(AnnotationKind::SuppressWarnings)
        );
    }

    #[test]
    fn add_assign_accumulates_per_kind() {
        let mut total = RemovalCounters::new();
        let mut a = RemovalCounters::new();
        a.add(AnnotationKind::Nullable, 2);
        let mut b = RemovalCounters::new();
        b.add(AnnotationKind::Nullable, 1);
        b.add(AnnotationKind::Notnull, 4);

        total += a;
        total += b;

        assert_eq!(total.get(AnnotationKind::Nullable), 3);
        assert_eq!(total.get(AnnotationKind::Notnull), 4);
        assert_eq!(total.get(AnnotationKind::NotNull), 0);
        assert_eq!(total.total(), 7);
    }

    #[test]
    fn summary_lines_follow_declaration_order() {
        let mut c = RemovalCounters::new();
        c.add(AnnotationKind::MonotonicNonNull, 5);
        c.add(AnnotationKind::SuppressWarnings, 2);

        assert_eq!(
            c.summary_lines(false),
            vec![
                "  @Nullable: 0",
                "  @NonNull: 0",
                "  @Nonnull: 0",
                "  @Notnull: 0",
                "  @NotNull: 0",
                "  @MonotonicNonNull: 5",
            ]
        );
        let with_sw = c.summary_lines(true);
        assert_eq!(with_sw.len(), 7);
        assert_eq!(with_sw[6], "  @SuppressWarnings: 2");
    }
}
