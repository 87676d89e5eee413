use crate::consts;
use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flattened field→value pairs parsed from an archive's embedded descriptor.
///
/// Keys are lower-cased element names (`series`, `number`, `pagecount`, …) —
/// whatever the packager authored, no schema is enforced. The map is ordered
/// so serializing the same payload twice produces identical JSON, which keeps
/// catalog rows byte-comparable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DescriptorPayload(BTreeMap<String, String>);

impl DescriptorPayload {
    /// An empty payload, used when an archive has no (readable) descriptor.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a field by name, case-insensitively.
    pub fn get(&self, field: impl AsRef<str>) -> Option<&str> {
        self.0.get(&field.as_ref().to_ascii_lowercase()).map(String::as_str)
    }

    /// The authored series title, if present.
    pub fn series(&self) -> Option<&str> {
        self.get("series")
    }

    /// The authored volume/chapter number, if present. Kept as the raw string
    /// the packager wrote — reconciling it against the filename-derived
    /// numbering is the caller's business.
    pub fn number(&self) -> Option<&str> {
        self.get("number")
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
impl From<BTreeMap<String, String>> for DescriptorPayload {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }
}
impl FromIterator<(String, String)> for DescriptorPayload {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_ascii_lowercase(), v)).collect())
    }
}

/// Parses descriptor markup into a flat payload.
///
/// The descriptor is a flat element tree (`<ComicInfo><Series>…</Series>…`),
/// which the lenient HTML parser handles fine; element names come out
/// lower-cased. A document with no recognizable descriptor root is malformed.
/// Container elements whose own text is empty (e.g. `<Pages>` page lists) are
/// skipped rather than flattened into garbage.
pub(crate) fn parse(markup: &str) -> Result<DescriptorPayload> {
    let document = Html::parse_document(markup);
    let root = document
        .select(&consts::DESCRIPTOR_ROOT_SELECTOR)
        .next()
        .ok_or_raise(|| ErrorKind::Descriptor)?;
    let mut fields = BTreeMap::new();
    for element in root.child_elements() {
        let value = element.text().collect::<String>().trim().to_string();
        if !value.is_empty() && element.child_elements().next().is_none() {
            fields.insert(element.value().name().to_string(), value);
        }
    }
    Ok(DescriptorPayload(fields))
}
