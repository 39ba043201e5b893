//! Filtering traits.
//!
//! A filter returns `true` for items that should be kept.
//! Filters are usually parametrized (thresholds, seen-set strategies), so no default
//! construction is required.

/// Stateless filter: equal inputs always get the same verdict.
pub trait Filter<T> {
    fn detect(&self, item: T) -> bool;
}

/// Stateful filter, whose verdict may depend on previous inputs (deduplication).
pub trait FilterMut<T> {
    fn detect_mut(&mut self, item: T) -> bool;
}
