//! PII redaction.
//!
//! Only email-shaped substrings are redacted.
//! Phone numbers and user handles are *not*: sources where those matter need another pass.
use lazy_static::lazy_static;
use regex::Regex;

use super::Transform;

pub const EMAIL_PLACEHOLDER: &str = "<EMAIL>";

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"\S+@\S+").unwrap();
}

pub fn redact_pii(text: &str) -> String {
    EMAIL.replace_all(text, EMAIL_PLACEHOLDER).into_owned()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RedactPii;

impl Transform for RedactPii {
    fn transform(&self, text: &str) -> String {
        redact_pii(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emails() {
        assert_eq!(
            redact_pii("যোগাযোগ: someone@example.com বা a.b@c.in"),
            "যোগাযোগ: <EMAIL> বা <EMAIL>"
        );
    }

    #[test]
    fn phone_numbers_are_kept() {
        let text = "ফোন 9876543210 @handle";
        assert_eq!(redact_pii(text), text);
    }
}
