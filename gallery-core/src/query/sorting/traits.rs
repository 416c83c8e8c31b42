use std::cmp::Ordering;

/// Entries that carry a stable numeric id used as the final tie-break.
pub trait SortableEntry {
    fn sort_id(&self) -> i64;
}

/// A primary ordering over entries of type `T`.
///
/// Implementations only compare the named key; equal keys are resolved by
/// [`compare_entries`](super::compare_entries).
pub trait EntryOrder<T>: Copy {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}
