/*! Text transformers.

Pure text to text functions, also available as [Transform] implementors so they can be chained:
- [normalize]: NFC, URL removal, trimming (applied to every record)
- [redact_pii]: email redaction (opt-in)
- [strip_emojis]: emoji removal (sentence aggregation only, since emojis are a feature worth keeping in original text)
!*/
mod emoji;
mod normalize;
mod pii;
mod transform;

pub use emoji::{strip_emojis, StripEmojis};
pub use normalize::{normalize, normalize_value, Normalize};
pub use pii::{redact_pii, RedactPii, EMAIL_PLACEHOLDER};
pub use transform::{Transform, TransformChain};
