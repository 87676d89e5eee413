//! Filename-to-identity resolution for comic archive releases.
//!
//! Downloaded archives arrive with every naming convention under the sun:
//! `[Group] Series Name Vol.3`, `Series Name - c012 (2024) (Digital)`,
//! `Series Name v03 (F2).cbz`. This crate derives a structured
//! [`ArchiveIdentity`] (series, volume/chapter number, fix marker) from that
//! mess without ever touching the filesystem.
//!
//! Resolution is total: there is no error path. The worst case is an identity
//! with [`Confidence::Unresolved`], a best-effort cleaned series name, and no
//! numbering.

mod consts;
pub mod models;
mod normalize;
mod rules;

pub use crate::models::{ArchiveIdentity, Confidence, FixMarker, Numbering};
pub use crate::normalize::normalize_series;

use tracing::instrument;

/// Resolves a raw filename (or path tail) into a structured identity.
///
/// Pure and deterministic: the same input always yields the same identity.
///
/// The pipeline, in order:
/// 1. strip a known archive extension,
/// 2. detect and remove the fix marker (its own pass, so `(F2)` composes with
///    every naming convention),
/// 3. strip noise tokens (bracketed group tags, parenthesized year/quality tags),
/// 4. try the prioritized rule table, most constrained pattern first,
/// 5. fall back to a trailing bare number ([`Confidence::Low`]), then to an
///    unresolved best-effort cleanup.
#[instrument(level = "debug", skip(raw), ret)]
pub fn resolve(raw: impl Into<String>) -> ArchiveIdentity {
    let raw = raw.into();
    let stem = consts::EXTENSION.replace(&raw, "");
    let fix = consts::FIX_MARKER
        .captures(&stem)
        .map(|caps| FixMarker::new(caps.name("index").and_then(|m| m.as_str().parse().ok())));
    let stem = consts::FIX_MARKER.replace_all(&stem, " ");
    let cleaned = strip_noise(&stem);

    for rule in rules::RULES.iter() {
        if let Some(caps) = rule.pattern.captures(&cleaned)
            && let (Some(series), Some(number)) = (caps.name("series"), caps.name("number"))
            && let Ok(numbering) = number.as_str().parse::<Numbering>()
        {
            return ArchiveIdentity {
                series: normalize_series(series.as_str()),
                numbering: Some(numbering),
                fix,
                rule: Some(rule.name),
                raw,
                confidence: Confidence::High,
            };
        }
    }

    if let Some(caps) = consts::TRAILING_NUMBER.captures(&cleaned)
        && let (Some(series), Some(number)) = (caps.name("series"), caps.name("number"))
        && let Ok(numbering) = number.as_str().parse::<Numbering>()
    {
        return ArchiveIdentity {
            series: normalize_series(series.as_str()),
            numbering: Some(numbering),
            fix,
            rule: None,
            raw,
            confidence: Confidence::Low,
        };
    }

    ArchiveIdentity {
        series: normalize_series(&cleaned),
        numbering: None,
        fix,
        rule: None,
        raw,
        confidence: Confidence::Unresolved,
    }
}

/// Removes release-group tags and parenthesized year/quality noise, then
/// collapses the leftover whitespace.
fn strip_noise(input: &str) -> String {
    let stripped = consts::BRACKET_TAG.replace_all(input, " ");
    let stripped = consts::PAREN_NOISE.replace_all(&stripped, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
