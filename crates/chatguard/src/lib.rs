//! `chatguard` - contact-information filtering for on-platform academy chat
//!
//! This library decides whether an outbound chat message attempts to share
//! contact details (phone numbers, email addresses, or obfuscated variants)
//! and produces an allow/block verdict for the chat-send path to act on.
//! Callers own persistence, delivery, and notification; this crate owns only
//! the decision.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod moderation;
pub mod role;
pub mod sanitize;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use moderation::{ContactFilter, Verdict, BLOCKED_PLACEHOLDER};
pub use role::Role;
