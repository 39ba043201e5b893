//! Keep-first uniqueness filters.
//!
//! [FilterMut::detect_mut] returns `true` the first time a key is presented, `false` afterwards.
use std::collections::HashSet;

use runiq::filters::DigestFilter;
use runiq::filters::Filter as RuniqFilter;

use super::FilterMut;

/// Exact filter: every key seen so far is kept in memory.
#[derive(Debug, Default)]
pub struct Unseen {
    seen: HashSet<String>,
}

impl FilterMut<&str> for Unseen {
    fn detect_mut(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string())
    }
}

/// Digest filter: only 64-bit hashes of keys are kept.
///
/// Uses far less memory on large tables, at the cost of (very unlikely) false duplicates on hash collisions.
pub struct DigestUnseen(DigestFilter);

impl Default for DigestUnseen {
    fn default() -> Self {
        Self(DigestFilter::default())
    }
}

impl FilterMut<&str> for DigestUnseen {
    fn detect_mut(&mut self, key: &str) -> bool {
        self.0.detect(key.as_bytes())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyFilterKind {
    #[default]
    Exact,
    Digest,
}

pub enum KeyFilter {
    Exact(Unseen),
    Digest(DigestUnseen),
}

impl KeyFilter {
    pub fn new(kind: KeyFilterKind) -> Self {
        match kind {
            KeyFilterKind::Exact => Self::Exact(Unseen::default()),
            KeyFilterKind::Digest => Self::Digest(DigestUnseen::default()),
        }
    }
}

impl Default for KeyFilter {
    fn default() -> Self {
        Self::new(KeyFilterKind::default())
    }
}

impl FilterMut<&str> for KeyFilter {
    fn detect_mut(&mut self, key: &str) -> bool {
        match self {
            Self::Exact(f) => f.detect_mut(key),
            Self::Digest(f) => f.detect_mut(key),
        }
    }
}
