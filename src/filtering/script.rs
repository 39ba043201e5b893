/*! Script-based language classification.

Assamese is written with the Bengali Unicode block (U+0980 to U+09FF), which it shares with Bengali.
There is no model here: a text is accepted if enough of its characters are in the block,
and if it contains no character that only Bengali orthography uses.

The only negative signal is Bengali RA (`র`, U+09B0), Assamese using `ৰ` (U+09F0) instead.
Loanwords legitimately spelled with `র` will be rejected: this is a known precision/recall tradeoff.

Assamese-only characters (`ৰ`, `ৱ`) are reported in [ScriptStats] but are *not* required,
since a lot of common vocabulary (`ধন্যবাদ`...) is spelled identically in both languages.
!*/
use std::ops::RangeInclusive;

use super::Filter;

/// Unicode block shared by Assamese and Bengali.
pub const SCRIPT_BLOCK: RangeInclusive<char> = '\u{0980}'..='\u{09FF}';

/// ৰ, ৱ
pub const TARGET_UNIQUE: &[char] = &['\u{09F0}', '\u{09F1}'];

/// র
pub const CONFUSABLE_UNIQUE: &[char] = &['\u{09B0}'];

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Comments are short and noisy (emojis, latin script mixed in).
pub const SOCIAL_MEDIA_THRESHOLD: f64 = 0.4;

pub const NEWS_THRESHOLD: f64 = 0.6;

/// Only meant to separate prose from boilerplate (copyright, navigation) inside an article.
pub const BOILERPLATE_THRESHOLD: f64 = 0.1;

/// Script composition of a string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScriptStats {
    /// ratio of characters (codepoints) that are in [SCRIPT_BLOCK], in [0, 1].
    pub indic_ratio: f64,
    pub has_target_unique: bool,
    pub has_confusable_unique: bool,
}

/// Compute [ScriptStats] for `text`. Empty text has a ratio of 0.
pub fn script_stats(text: &str) -> ScriptStats {
    let mut total = 0usize;
    let mut in_block = 0usize;
    let mut has_target_unique = false;
    let mut has_confusable_unique = false;

    for c in text.chars() {
        total += 1;
        if SCRIPT_BLOCK.contains(&c) {
            in_block += 1;
        }
        has_target_unique |= TARGET_UNIQUE.contains(&c);
        has_confusable_unique |= CONFUSABLE_UNIQUE.contains(&c);
    }

    let indic_ratio = if total == 0 {
        0.0
    } else {
        in_block as f64 / total as f64
    };

    ScriptStats {
        indic_ratio,
        has_target_unique,
        has_confusable_unique,
    }
}

/// Returns `true` if `text` is considered to be written in the target language.
///
/// Empty text is always rejected.
pub fn classify(text: &str, threshold: f64) -> bool {
    if text.is_empty() {
        return false;
    }

    let stats = script_stats(text);
    stats.indic_ratio >= threshold && !stats.has_confusable_unique
}

/// Keep the newline-separated paragraphs of `text` that pass [classify] at `threshold`.
///
/// Paragraphs are trimmed and joined back with `\n`.
pub fn filter_paragraphs(text: &str, threshold: f64) -> String {
    text.lines()
        .map(str::trim)
        .filter(|paragraph| classify(paragraph, threshold))
        .collect::<Vec<_>>()
        .join("\n")
}

/// [classify] as a [Filter].
#[derive(Debug, Clone, Copy)]
pub struct ScriptFilter {
    threshold: f64,
}

impl ScriptFilter {
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for ScriptFilter {
    fn default() -> Self {
        Self::with_threshold(DEFAULT_THRESHOLD)
    }
}

impl Filter<&str> for ScriptFilter {
    fn detect(&self, text: &str) -> bool {
        classify(text, self.threshold)
    }
}
