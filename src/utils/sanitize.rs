//! Content sanitization for text sent back to Discord.
//!
//! Mention stripping runs before character escaping, so the placeholder
//! tokens it inserts are never themselves escaped and a second pass over
//! already-sanitized output is a no-op. The mention patterns also tolerate
//! a stray backslash before their trigger characters, so text that arrives
//! pre-escaped still gets its mentions defanged.

use once_cell::sync::Lazy;
use regex::Regex;

/// Discord's message length ceiling.
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Characters with Markdown or mention/channel-reference meaning.
const RESERVED: &[char] = &[
    '*', '_', '`', '~', '|', '>', '@', '#', ':', '!', '[', ']', '(', ')',
];

/// Placeholder tokens left by mention stripping; the escape pass copies
/// these verbatim.
const PLACEHOLDERS: &[&str] = &["[mention]", "[role]", "[channel]"];

static USER_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\\?@\\?!?(\d+)\\?>").expect("static regex compile"));
static ROLE_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\\?@\\?&(\d+)\\?>").expect("static regex compile"));
static CHANNEL_MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\\?#(\d+)\\?>").expect("static regex compile"));

/// Sanitize free text for embedding in a Discord message.
///
/// Trims whitespace, replaces user/role/channel mentions with literal
/// placeholders, backslash-escapes every reserved Markdown character, and
/// truncates the result to [`MAX_CONTENT_LENGTH`] characters. Pure and
/// total; never fails.
pub fn sanitize_content(content: &str) -> String {
    let trimmed = content.trim();

    let stripped = ROLE_MENTION_RE.replace_all(trimmed, "[role]");
    let stripped = USER_MENTION_RE.replace_all(&stripped, "[mention]");
    let stripped = CHANNEL_MENTION_RE.replace_all(&stripped, "[channel]");

    truncate_content(&escape_reserved(&stripped))
}

/// Enforce the message length ceiling, replacing the tail with an ellipsis.
///
/// The result never exceeds [`MAX_CONTENT_LENGTH`] characters including the
/// ellipsis. Counts `char`s, not bytes, so multi-byte input cannot be split
/// mid-character.
pub fn truncate_content(content: &str) -> String {
    if content.chars().count() <= MAX_CONTENT_LENGTH {
        return content.to_string();
    }
    let mut truncated: String = content.chars().take(MAX_CONTENT_LENGTH - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Backslash-escape reserved characters, skipping characters that already
/// carry an escape and skipping the literal placeholder tokens.
fn escape_reserved(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    let mut i = 0;

    while i < input.len() {
        let rest = &input[i..];

        if let Some(token) = PLACEHOLDERS.iter().find(|t| rest.starts_with(**t)) {
            out.push_str(token);
            i += token.len();
            continue;
        }

        let c = rest.chars().next().unwrap_or_default();

        if c == '\\' {
            out.push('\\');
            i += 1;
            // An escape pair stays as-is.
            if let Some(next) = input[i..].chars().next() {
                if RESERVED.contains(&next) {
                    out.push(next);
                    i += next.len_utf8();
                }
            }
            continue;
        }

        if RESERVED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
        i += c.len_utf8();
    }

    out
}
