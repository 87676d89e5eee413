use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

// Known archive container extensions, stripped before any rule runs.
regex!(EXTENSION, r"(?i)\.(?:cbz|cbr|cb7|cbt|zip|rar|7z|pdf|epub)\s*$");
// Corrected re-release marker: "(F)" or "(F<n>)". Detected in its own pass so
// it composes with every naming convention instead of multiplying the rule table.
regex!(FIX_MARKER, r"(?i)\(\s*f(?P<index>\d+)?\s*\)");
// Release-group and checksum tags: "[Group]", "{deadbeef}".
regex!(BRACKET_TAG, r"\[[^\]]*\]|\{[^}]*\}");
// Parenthesized noise: "(2024)", "(Digital)", "(Oneshot)", "(1920x1080)".
regex!(PAREN_NOISE, r"(?i)\(\s*(?:\d{4}|digital|oneshot|complete|\d{3,4}\s*x\s*\d{3,4})\s*\)");
// Fallback: a bare numeric token at the very end of the name.
regex!(TRAILING_NUMBER, r"^(?P<series>.+?)[\s._-]+(?P<number>\d+(?:\.\d+)?)$");
