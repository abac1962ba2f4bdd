//! Contact-information filter for outbound chat messages.
//!
//! This module provides the filter that the chat-send path consults before a
//! message is persisted or delivered. Classification is purely lexical:
//! an ordered set of regex patterns is evaluated against the raw message text
//! and the first matching category decides the verdict.

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::patterns::{builtin_patterns, Category, DetectionPattern};
use crate::role::Role;

/// Replacement body stored in place of a blocked message.
///
/// Fixed platform policy; the original text of a blocked message must never
/// reach the recipient.
pub const BLOCKED_PLACEHOLDER: &str =
    "[Message blocked: sharing contact information is not permitted]";

/// The filter's decision for a single outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Whether the message may be persisted and delivered.
    pub allowed: bool,

    /// Why the message was blocked. Present exactly when `allowed` is false.
    pub reason: Option<String>,

    /// The message body the caller should store: the original text when
    /// allowed, the fixed placeholder when blocked.
    pub filtered_message: String,
}

impl Verdict {
    /// An allowing verdict that passes the message through unchanged.
    #[must_use]
    pub fn allowed(message: &str) -> Self {
        Self {
            allowed: true,
            reason: None,
            filtered_message: message.to_string(),
        }
    }

    /// A blocking verdict for the given detection category.
    #[must_use]
    pub fn blocked(category: Category) -> Self {
        Self {
            allowed: false,
            reason: Some(category.reason().to_string()),
            filtered_message: BLOCKED_PLACEHOLDER.to_string(),
        }
    }
}

/// Contact-information filter for chat messages.
///
/// Holds the compiled built-in pattern table plus any custom patterns from
/// configuration. Construction compiles everything once; each check is then a
/// pure function of the message text, safe to call from any number of
/// concurrent request handlers.
#[derive(Debug)]
pub struct ContactFilter {
    patterns: Vec<DetectionPattern>,
    custom_regexes: Vec<Regex>,
}

impl ContactFilter {
    /// Create a filter with the built-in patterns only.
    #[must_use]
    pub fn new() -> Self {
        Self::with_custom_patterns(&[])
    }

    /// Create a filter with the built-in patterns plus custom extras.
    ///
    /// Custom patterns are checked after every built-in and block with the
    /// generic "potential contact information" reason. Invalid regexes are
    /// skipped with a warning rather than rejected, since config validation
    /// reports them before a filter is ever built.
    #[must_use]
    pub fn with_custom_patterns(custom: &[String]) -> Self {
        let custom_regexes = custom
            .iter()
            .filter_map(|p| match Regex::new(p) {
                Ok(r) => Some(r),
                Err(e) => {
                    warn!(pattern = %p, error = %e, "Invalid custom filter pattern");
                    None
                }
            })
            .collect();

        Self {
            patterns: builtin_patterns(),
            custom_regexes,
        }
    }

    /// Classify a message, returning the first detection category that
    /// matches, or `None` if the message is clean.
    ///
    /// Checks are not mutually exclusive; evaluation short-circuits at the
    /// first match so the reported category is deterministic: phone before
    /// email before obfuscation.
    #[must_use]
    pub fn classify(&self, message: &str) -> Option<Category> {
        for pattern in &self.patterns {
            if pattern.matches(message) {
                debug!(pattern = %pattern.name, "message matched contact pattern");
                return Some(pattern.category);
            }
        }

        for (i, regex) in self.custom_regexes.iter().enumerate() {
            if regex.is_match(message) {
                debug!(pattern_index = %i, "message matched custom pattern");
                return Some(Category::Obfuscated);
            }
        }

        None
    }

    /// Produce the verdict for an outbound message from the given sender.
    ///
    /// Exempt roles (admin) bypass classification entirely and always get the
    /// message back unmodified. For everyone else, a classification match
    /// yields a blocking verdict whose body is [`BLOCKED_PLACEHOLDER`]; a
    /// clean message is passed through byte-for-byte.
    #[must_use]
    pub fn filter_message(&self, message: &str, sender_role: Role) -> Verdict {
        if sender_role.is_exempt() {
            trace!(role = %sender_role, "sender role exempt from filtering");
            return Verdict::allowed(message);
        }

        match self.classify(message) {
            Some(category) => {
                debug!(
                    role = %sender_role,
                    reason = category.reason(),
                    "outbound message blocked"
                );
                Verdict::blocked(category)
            }
            None => Verdict::allowed(message),
        }
    }
}

impl Default for ContactFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_phone_digit_run() {
        let filter = ContactFilter::new();
        assert_eq!(
            filter.classify("call me at 03001234567"),
            Some(Category::Phone)
        );
    }

    #[test]
    fn test_classify_phone_parenthesized() {
        let filter = ContactFilter::new();
        assert_eq!(
            filter.classify("My number is (555) 123-4567"),
            Some(Category::Phone)
        );
    }

    #[test]
    fn test_classify_email() {
        let filter = ContactFilter::new();
        assert_eq!(
            filter.classify("Email me: student99@gmail.com"),
            Some(Category::Email)
        );
        assert_eq!(
            filter.classify("reach me at hassan.ali+1@example.co"),
            Some(Category::Email)
        );
    }

    #[test]
    fn test_classify_obfuscated_digits() {
        let filter = ContactFilter::new();
        assert_eq!(filter.classify("123 at 456"), Some(Category::Obfuscated));
    }

    #[test]
    fn test_classify_obfuscated_spelled_out() {
        let filter = ContactFilter::new();
        assert_eq!(
            filter.classify("hassan at gmail dot com"),
            Some(Category::Obfuscated)
        );
    }

    #[test]
    fn test_classify_accepted_false_positive() {
        // "x at y dot z" sentences match the spelled-out address pattern.
        // Over-blocking here is accepted behavior, not a bug.
        let filter = ContactFilter::new();
        assert_eq!(
            filter.classify("See you at class dot room 5"),
            Some(Category::Obfuscated)
        );
    }

    #[test]
    fn test_classify_clean_message() {
        let filter = ContactFilter::new();
        assert_eq!(filter.classify("Great job on today's lesson!"), None);
        assert_eq!(
            filter.classify("Assalamu Alaikum, great progress today!"),
            None
        );
    }

    #[test]
    fn test_classify_empty_message() {
        let filter = ContactFilter::new();
        assert_eq!(filter.classify(""), None);
    }

    #[test]
    fn test_classify_phone_wins_over_email() {
        // Both categories match; phone is checked first.
        let filter = ContactFilter::new();
        assert_eq!(
            filter.classify("03001234567 or student99@gmail.com"),
            Some(Category::Phone)
        );
    }

    #[test]
    fn test_classify_email_wins_over_obfuscation() {
        let filter = ContactFilter::new();
        assert_eq!(
            filter.classify("student99@gmail.com, that is me at gmail dot com"),
            Some(Category::Email)
        );
    }

    #[test]
    fn test_classify_is_idempotent() {
        let filter = ContactFilter::new();
        let message = "call me at 03001234567";
        assert_eq!(filter.classify(message), filter.classify(message));
    }

    #[test]
    fn test_filter_message_admin_exempt() {
        let filter = ContactFilter::new();
        let message = "my number is 03001234567 and email is a@b.com";

        let verdict = filter.filter_message(message, Role::Admin);
        assert!(verdict.allowed);
        assert_eq!(verdict.reason, None);
        assert_eq!(verdict.filtered_message, message);
    }

    #[test]
    fn test_filter_message_blocks_non_admin_roles() {
        let filter = ContactFilter::new();
        let message = "call me at 03001234567";

        for role in [
            Role::SalesTeam,
            Role::TeamLeader,
            Role::Teacher,
            Role::Student,
        ] {
            let verdict = filter.filter_message(message, role);
            assert!(!verdict.allowed);
            assert_eq!(verdict.reason.as_deref(), Some("Phone number detected"));
            assert_eq!(verdict.filtered_message, BLOCKED_PLACEHOLDER);
        }
    }

    #[test]
    fn test_filter_message_blocked_never_leaks_original() {
        let filter = ContactFilter::new();
        let message = "Email me: student99@gmail.com";

        let verdict = filter.filter_message(message, Role::Student);
        assert!(!verdict.allowed);
        assert!(!verdict.filtered_message.contains("student99"));
        assert_eq!(verdict.filtered_message, BLOCKED_PLACEHOLDER);
    }

    #[test]
    fn test_filter_message_pass_through_unchanged() {
        let filter = ContactFilter::new();
        let message = "Assalamu Alaikum, great progress today!";

        let verdict = filter.filter_message(message, Role::Student);
        assert!(verdict.allowed);
        assert_eq!(verdict.reason, None);
        assert_eq!(verdict.filtered_message, message);
    }

    #[test]
    fn test_filter_message_obfuscation_reason() {
        let filter = ContactFilter::new();

        let verdict = filter.filter_message("123 at 456", Role::Teacher);
        assert!(!verdict.allowed);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Potential contact information detected")
        );
    }

    #[test]
    fn test_custom_patterns_block() {
        let filter =
            ContactFilter::with_custom_patterns(&[r"(?i)\bwhatsapp\b".to_string()]);

        assert_eq!(
            filter.classify("add me on WhatsApp"),
            Some(Category::Obfuscated)
        );

        let verdict = filter.filter_message("add me on WhatsApp", Role::Student);
        assert!(!verdict.allowed);
        assert_eq!(
            verdict.reason.as_deref(),
            Some("Potential contact information detected")
        );
    }

    #[test]
    fn test_custom_patterns_checked_after_builtins() {
        let filter = ContactFilter::with_custom_patterns(&[r"03001234567".to_string()]);

        // The built-in phone pattern matches first, so the reported category
        // stays Phone even though a custom pattern also matches.
        assert_eq!(
            filter.classify("call me at 03001234567"),
            Some(Category::Phone)
        );
    }

    #[test]
    fn test_custom_patterns_invalid_regex_skipped() {
        let filter = ContactFilter::with_custom_patterns(&[
            r"\bvalid\b".to_string(),
            r"[invalid".to_string(),
        ]);

        assert_eq!(filter.custom_regexes.len(), 1);
    }

    #[test]
    fn test_verdict_serializes() {
        let verdict = Verdict::blocked(Category::Email);
        let json = serde_json::to_string(&verdict).unwrap();
        assert!(json.contains("\"allowed\":false"));
        assert!(json.contains("Email address detected"));
    }
}
