//! Markup sanitization for chat messages.
//!
//! A companion helper to the contact filter: callers escape HTML/markup in an
//! allowed message before storing it. This is plain character escaping, kept
//! separate from the filter's allow/block contract.

/// Escape HTML-significant characters in a message.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their entity forms so stored
/// messages render as text rather than markup.
#[must_use]
pub fn escape_markup(message: &str) -> String {
    let mut escaped = String::with_capacity(message.len());
    for c in message.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
