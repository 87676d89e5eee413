/// Normalizes a captured series title into its canonical catalog form.
///
/// Lower-cases, collapses runs of whitespace and the common filename
/// separators (`.`, `_`, `-`) into single spaces, and drops remaining
/// punctuation. `"The_World's.End -"` becomes `"the worlds end"`.
pub fn normalize_series(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() || matches!(ch, '.' | '_' | '-') {
            pending_space = true;
        } else if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        }
        // Everything else is punctuation: dropped without becoming a space,
        // so "don't" collapses to "dont" rather than "don t".
    }
    out
}
