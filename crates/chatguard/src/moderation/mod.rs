//! Outbound message moderation.
//!
//! This module decides whether a chat message may leave the platform's chat
//! unfiltered. It detects leakage-prone contact information in message text:
//!
//! - **Phone numbers**: bare digit runs, international formats, and common
//!   grouped/parenthesized formats.
//!
//! - **Email addresses**: standard `local@domain.tld` shapes.
//!
//! - **Obfuscated contact details**: "at"/"dot" spelled out between digits or
//!   words, and email-shaped mentions without a valid top-level domain.
//!
//! Detection favors over-blocking: false positives on order numbers or
//! ordinary "at"/"dot" sentences are accepted in exchange for keeping contact
//! exchange on-platform.
//!
//! # Example
//!
//! ```
//! use chatguard::moderation::ContactFilter;
//! use chatguard::Role;
//!
//! let filter = ContactFilter::new();
//!
//! let verdict = filter.filter_message("My number is (555) 123-4567", Role::Student);
//! assert!(!verdict.allowed);
//! assert_eq!(verdict.reason.as_deref(), Some("Phone number detected"));
//!
//! let verdict = filter.filter_message("Great job on today's lesson!", Role::Student);
//! assert!(verdict.allowed);
//! assert_eq!(verdict.filtered_message, "Great job on today's lesson!");
//! ```

mod filter;
mod patterns;

pub use filter::{ContactFilter, Verdict, BLOCKED_PLACEHOLDER};
pub use patterns::{builtin_patterns, Category, DetectionPattern};
