//! Built-in contact-information detection patterns.
//!
//! This module provides the fixed, ordered table of regex patterns used to
//! detect phone numbers, email addresses, and obfuscated contact details in
//! outbound chat messages. The order of the table is load-bearing: patterns
//! are evaluated top to bottom and the first match determines the reported
//! category, so all phone patterns come before the email pattern, which comes
//! before the obfuscation patterns.

use regex::Regex;

/// Detection category for a matched pattern.
///
/// Categories are listed in priority order: when multiple categories could
/// match the same message, the earliest one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// A raw or formatted phone number.
    Phone,

    /// A syntactically valid email address.
    Email,

    /// A disguised phone number or email ("at"/"dot" spelled out, or an
    /// email-shaped mention without a valid top-level domain).
    Obfuscated,
}

impl Category {
    /// The human-readable reason reported to the sender when a message is
    /// blocked by this category.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Phone => "Phone number detected",
            Self::Email => "Email address detected",
            Self::Obfuscated => "Potential contact information detected",
        }
    }
}

/// A compiled detection pattern.
#[derive(Debug)]
pub struct DetectionPattern {
    /// Name of the pattern for identification.
    pub name: &'static str,

    /// Description of what this pattern matches.
    pub description: &'static str,

    /// Category reported when this pattern matches.
    pub category: Category,

    /// The compiled regex.
    regex: Regex,
}

impl DetectionPattern {
    /// Create a new detection pattern.
    ///
    /// # Panics
    ///
    /// Panics if the regex pattern is invalid.
    #[must_use]
    pub fn new(
        name: &'static str,
        description: &'static str,
        category: Category,
        pattern: &str,
    ) -> Self {
        Self {
            name,
            description,
            category,
            regex: Regex::new(pattern).expect("Invalid regex pattern"),
        }
    }

    /// Check if the message matches this pattern.
    #[must_use]
    pub fn matches(&self, message: &str) -> bool {
        self.regex.is_match(message)
    }
}

/// Get the built-in detection patterns, in evaluation order.
///
/// Several of these patterns over-match on purpose. A bare 10-15 digit run
/// also catches order IDs and long numeric codes, and the "at"/"dot"
/// obfuscation patterns catch ordinary sentences that happen to place those
/// words between alphanumerics. Over-blocking is the accepted tradeoff here;
/// narrowing any of these patterns is a product decision, not a cleanup.
#[must_use]
pub fn builtin_patterns() -> Vec<DetectionPattern> {
    vec![
        // Phone numbers
        DetectionPattern::new(
            "phone_digit_run",
            "Bare runs of 10-15 consecutive digits",
            Category::Phone,
            r"\b\d{10,15}\b",
        ),
        DetectionPattern::new(
            "phone_international",
            "International numbers with a leading + and grouped digits",
            Category::Phone,
            r"\+\d{1,3}[\s.-]?\(?\d{1,4}\)?(?:[\s.-]?\d{2,4}){1,4}",
        ),
        DetectionPattern::new(
            "phone_grouped",
            "North-American-style grouped numbers (###-###-####)",
            Category::Phone,
            r"\b\d{3}[-.\s]\d{3}[-.\s]\d{4}\b",
        ),
        DetectionPattern::new(
            "phone_parenthesized",
            "Parenthesized area-code numbers ((###) ###-####)",
            Category::Phone,
            r"\(\d{3}\)[\s.-]?\d{3}[-.\s]?\d{4}",
        ),
        // Email addresses
        DetectionPattern::new(
            "email",
            "Standard email addresses (local@domain.tld)",
            Category::Email,
            r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
        ),
        // Obfuscated contact details
        DetectionPattern::new(
            "obfuscated_digits",
            "Digit groups joined by the words 'at' or 'dot' (123 at 456)",
            Category::Obfuscated,
            r"(?i)\b\d+\s*(?:at|dot)\s*\d+\b",
        ),
        DetectionPattern::new(
            "obfuscated_address",
            "Spelled-out addresses (name at domain dot com)",
            Category::Obfuscated,
            r"(?i)\b[a-z0-9]+\s+at\s+[a-z0-9]+\s+dot\s+[a-z0-9]+\b",
        ),
        DetectionPattern::new(
            "email_mention",
            "Email-shaped mentions without a valid top-level domain (word@word)",
            Category::Obfuscated,
            r"\b[A-Za-z0-9]+@[A-Za-z0-9]+\b",
        ),
    ]
}
