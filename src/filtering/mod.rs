/*! Filtering utilities

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [script::ScriptFilter])
- [filter::FilterMut] is implemented for filters that do have state (see [unique::Unseen], whose verdict depends on what was already seen).
! */
mod filter;
pub mod script;
pub mod unique;

pub use filter::Filter;
pub use filter::FilterMut;
pub use script::{classify, filter_paragraphs, script_stats, ScriptFilter, ScriptStats};
pub use unique::{KeyFilter, KeyFilterKind};
