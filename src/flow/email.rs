//! Email syntax check for the address capture step.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Syntactic check only: local part, `@`, and a dotted domain. No DNS
/// lookup, no mailbox probing.
pub fn is_valid_email(text: &str) -> bool {
    let re = EMAIL_RE.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
        )
        .unwrap()
    });
    re.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("visitor@example.com"));
        assert!(is_valid_email("first.last@sub.example.de"));
        assert!(is_valid_email("user+tag@example.co.uk"));
    }

    #[test]
    fn accepts_addresses_containing_reply_words() {
        // "yes"/"no" only short-circuit as whole messages, never inside
        // an address.
        assert!(is_valid_email("yes@no.example"));
        assert!(is_valid_email("no.yes@example.com"));
    }

    #[test]
    fn rejects_undotted_domains() {
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("user@localhost"));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("user@example .com"));
        assert!(!is_valid_email("user@@example.com"));
    }
}
