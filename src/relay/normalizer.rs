use std::sync::LazyLock;

use regex::Regex;

use crate::core::directory::Directory;

/// Messages this short cannot hold a full mention token.
pub const MENTION_EXEMPT_LEN: usize = 10;

/// Marker that precedes every user mention once markup is stripped.
pub const MENTION_MARKER: &str = "@U";

// `@` followed by a fixed-width user id: `U` plus eight characters.
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(U[0-9A-Za-z]{8})")
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Remove the `<` and `>` delimiters Slack wraps around links and mentions.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    text.replace(['<', '>'], "")
}

/// Replace the id of every resolvable mention with the user's display name.
///
/// All mention spans are collected in one left-to-right pass before any
/// replacement, so a resolved name can never shift or re-trigger a later span.
/// Unknown ids are left as they are.
#[must_use]
pub fn resolve_mentions(text: &str, directory: &Directory) -> String {
    if text.len() <= MENTION_EXEMPT_LEN || !text.contains(MENTION_MARKER) {
        return text.to_string();
    }

    let spans: Vec<_> = MENTION_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for id in spans {
        out.push_str(&text[last..id.start()]);
        out.push_str(directory.display_name(id.as_str()).unwrap_or(id.as_str()));
        last = id.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Turn raw message text into the text that gets relayed and used as the dedup key.
#[must_use]
pub fn normalize(text: &str, directory: &Directory) -> String {
    resolve_mentions(&strip_markup(text), directory)
}
