//! Emoji removal.
//!
//! Removes characters having the Unicode `Emoji` or `Emoji_Component` property
//! (so that skin tones, flags and variation selectors go away with their emoji),
//! except ASCII ones: digits, `#` and `*` are `Emoji` too.
//!
//! The zero width joiner is only removed inside emoji sequences,
//! since Assamese and Bengali also use it to select conjunct forms.
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;

/// Emoji characters, ASCII and the joiner excepted.
const EMOJI_CHAR: &str = r"[[\p{Emoji}\p{Emoji_Component}]--[\p{ASCII}\x{200D}]]";

lazy_static! {
    /// Runs of emoji characters, possibly joined into a ZWJ sequence.
    static ref EMOJI: Regex =
        Regex::new(&format!(r"{0}+(?:\x{{200D}}{0}+)*", EMOJI_CHAR)).unwrap();
}

pub fn strip_emojis(text: &str) -> String {
    EMOJI.replace_all(text, "").into_owned()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StripEmojis;

impl Transform for StripEmojis {
    fn transform(&self, text: &str) -> String {
        strip_emojis(text)
    }
}
