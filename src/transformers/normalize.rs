/*! Text normalization

Steps, in this order:
1. Unicode canonical composition (NFC), so that decomposed vowel signs compare equal to precomposed ones downstream
1. removal of URLs (`http://`, `https://` and `www.` prefixed, up to the next whitespace)
1. trimming

The result is idempotent: `normalize(normalize(s)) == normalize(s)`.
!*/
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::Transform;
use crate::table::Value;

lazy_static! {
    static ref URL: Regex = Regex::new(r"https?://\S+|www\.\S+").unwrap();
}

pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    let without_urls = URL.replace_all(&composed, "");
    without_urls.trim().to_string()
}

/// [normalize] over a table cell. Anything that is not a string normalizes to an empty string.
pub fn normalize_value(value: &Value) -> String {
    value.as_str().map(normalize).unwrap_or_default()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Normalize;

impl Transform for Normalize {
    fn transform(&self, text: &str) -> String {
        normalize(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged() {
        assert_eq!(normalize("আমি ভাল আছি।"), "আমি ভাল আছি।");
    }

    #[test]
    fn nfc() {
        // two-part vowel sign O (E + AA)
        let decomposed = "\u{0995}\u{09C7}\u{09BE}";
        assert_eq!(normalize(decomposed), "\u{0995}\u{09CB}");
    }

    #[test]
    fn urls() {
        let text = "  খবৰ https://example.com/a?b=c চাওক www.news.in/x আৰু http://t.co/abc ";
        assert_eq!(normalize(text), "খবৰ  চাওক  আৰু");
    }

    #[test]
    fn url_only() {
        assert_eq!(normalize("https://youtu.be/xyz"), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "",
            "   ",
            "\u{0995}\u{09C7}\u{09BE} www.a.b",
            "wwwww.x.y  ভাল http://a",
            "ehttp://x\u{0301} y",
            " \u{09A1}\u{09BC} ",
            "ভাল দিন। কি খবৰ? ধন্যবাদ",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "{:?}", s);
        }
    }

    #[test]
    fn non_string_values() {
        assert_eq!(normalize_value(&Value::Null), "");
        assert_eq!(normalize_value(&Value::Int(3)), "");
        assert_eq!(normalize_value(&Value::Bool(true)), "");
        assert_eq!(normalize_value(&Value::Text(" ভাল ".into())), "ভাল");
    }
}
