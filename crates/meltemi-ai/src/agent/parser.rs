//! Action-directive extraction from assistant replies.

use once_cell::sync::Lazy;
use regex::Regex;

/// A structured tool request parsed from an assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDirective {
    pub name: String,
    pub argument: String,
}

// Matched per line, so ^/$ anchor to the whole line. The argument capture
// keeps trailing spaces and tabs verbatim; line terminators never reach it
// because `lines()` strips them first.
static ACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Action: (\w+): (.*)$").expect("action pattern is valid"));

/// Scan a reply for an action line of the form `Action: <name>: <argument>`.
///
/// Only the first matching line is honored; later action lines in the same
/// reply are ignored. A line that starts with `Action:` but does not fit the
/// two-part form is treated as no action at all, not as an error.
pub fn parse_action(reply: &str) -> Option<ActionDirective> {
    reply.lines().find_map(|line| {
        ACTION_RE.captures(line).map(|caps| ActionDirective {
            name: caps[1].to_string(),
            argument: caps[2].to_string(),
        })
    })
}
