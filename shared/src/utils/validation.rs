//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // Pragmatic email shape check, not full RFC 5322
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Common validation functions
pub mod validators {
    use super::EMAIL_RE;

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string's character count is within bounds.
    ///
    /// Counts characters, not bytes, matching how `validator` length
    /// constraints are evaluated on request DTOs.
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if an email address is plausibly valid
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("fern@plantera.dev"));
        assert!(is_valid_email("a.b+tag@sub.example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("fern"));
        assert!(!not_empty("   "));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("abc", 1, 3));
        assert!(!length_between("abcd", 1, 3));
    }

    #[test]
    fn test_length_between_counts_chars_not_bytes() {
        // Three characters, nine bytes
        assert!(length_between("日本語", 1, 3));
        assert!(!length_between("日本語", 1, 2));
    }
}
