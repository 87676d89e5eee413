use crate::consts;
use crate::descriptor::{self, DescriptorPayload};
use crate::error::{ErrorKind, Result};
use crate::stats::PageStats;
use exn::ResultExt;
use std::io::{Cursor, Read};
use tracing::instrument;
use zip::ZipArchive;

/// An opened comic archive (CBZ) held in memory.
///
/// The synchronizer already reads whole files to fingerprint them, so the
/// container works over those bytes instead of re-opening the file handle.
/// Entry inspection ([`stats`](Self::stats)) is name-based and decompresses
/// nothing; only the descriptor entry is ever inflated.
#[derive(Debug)]
pub struct Archive {
    zip: ZipArchive<Cursor<Vec<u8>>>,
}

impl Archive {
    /// Opens a CBZ container from raw bytes.
    ///
    /// Fails with [`ErrorKind::Container`] when the bytes are not a readable
    /// zip archive — the caller must treat the file as unobserved content and
    /// leave any prior catalog entry for it untouched.
    #[instrument(skip(bytes), fields(size = bytes.len()))]
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let zip = ZipArchive::new(Cursor::new(bytes)).or_raise(|| ErrorKind::Container)?;
        Ok(Self { zip })
    }

    /// Number of entries in the container, directories included.
    pub fn len(&self) -> usize {
        self.zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zip.is_empty()
    }

    /// Extracts and parses the embedded descriptor, if the archive has one.
    ///
    /// Returns `Ok(None)` when no descriptor entry exists. A descriptor that
    /// exists but cannot be read or parsed is [`ErrorKind::Descriptor`] — the
    /// archive itself is still valid and its pages untouched, so callers
    /// recover by cataloguing the file with an empty payload.
    #[instrument(skip(self))]
    pub fn descriptor(&mut self) -> Result<Option<DescriptorPayload>> {
        let Some(name) = self.zip.file_names().find(|name| name.eq_ignore_ascii_case(consts::DESCRIPTOR_NAME))
        else {
            return Ok(None);
        };
        let name = name.to_string();
        let mut entry = self.zip.by_name(&name).or_raise(|| ErrorKind::Container)?;
        let mut markup = String::new();
        // Rejecting non-UTF8 here classifies a mis-encoded descriptor as
        // malformed instead of silently mangling its field values.
        entry.read_to_string(&mut markup).or_raise(|| ErrorKind::Descriptor)?;
        descriptor::parse(&markup).map(Some)
    }

    /// Counts page entries (by image extension) and junk entries (anything
    /// that is neither a page, a directory, nor the descriptor).
    ///
    /// Junk is how corrupted repacks and accidental bundling (`.DS_Store`,
    /// `Thumbs.db`, stray `.txt` release notes) show up without decompressing
    /// a single page.
    pub fn stats(&self) -> PageStats {
        let mut stats = PageStats::default();
        for name in self.zip.file_names() {
            if name.ends_with('/') || name.eq_ignore_ascii_case(consts::DESCRIPTOR_NAME) {
                continue;
            }
            match extension_of(name) {
                Some(ext) if consts::IMAGE_EXTENSIONS.contains(&ext.as_str()) => stats.pages += 1,
                _ => stats.junk += 1,
            }
        }
        stats
    }
}

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn build_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    const DESCRIPTOR: &[u8] = b"<ComicInfo><Series>Example</Series><Number>3</Number></ComicInfo>";

    #[test]
    fn test_garbage_is_not_a_container() {
        let result = Archive::from_bytes(b"this is not a zip file".to_vec());
        let err = result.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Container));
    }

    #[test]
    fn test_descriptor_is_found_case_insensitively() {
        let bytes = build_archive(&[("ComicInfo.XML", DESCRIPTOR), ("001.png", b"fake")]);
        let mut archive = Archive::from_bytes(bytes).unwrap();
        let payload = archive.descriptor().unwrap().unwrap();
        assert_eq!(payload.series(), Some("Example"));
    }

    #[test]
    fn test_missing_descriptor_is_not_an_error() {
        let bytes = build_archive(&[("001.png", b"fake"), ("002.png", b"fake")]);
        let mut archive = Archive::from_bytes(bytes).unwrap();
        assert_eq!(archive.descriptor().unwrap(), None);
    }

    #[test]
    fn test_nested_descriptor_is_ignored() {
        let bytes = build_archive(&[("extras/ComicInfo.xml", DESCRIPTOR), ("001.png", b"fake")]);
        let mut archive = Archive::from_bytes(bytes).unwrap();
        assert_eq!(archive.descriptor().unwrap(), None);
    }

    #[test]
    fn test_malformed_descriptor() {
        let bytes = build_archive(&[("ComicInfo.xml", b"not a descriptor at all")]);
        let mut archive = Archive::from_bytes(bytes).unwrap();
        let err = archive.descriptor().unwrap_err();
        assert!(matches!(&*err, ErrorKind::Descriptor));
    }

    #[test]
    fn test_non_utf8_descriptor_is_malformed() {
        let bytes = build_archive(&[("ComicInfo.xml", &[0xff, 0xfe, 0x00, 0x80])]);
        let mut archive = Archive::from_bytes(bytes).unwrap();
        let err = archive.descriptor().unwrap_err();
        assert!(matches!(&*err, ErrorKind::Descriptor));
    }

    #[test]
    fn test_stats_classify_entries() {
        let bytes = build_archive(&[
            ("ComicInfo.xml", DESCRIPTOR),
            ("001.jpg", b"fake"),
            ("002.PNG", b"fake"),
            ("Thumbs.db", b"junk"),
            ("notes.txt", b"junk"),
        ]);
        let archive = Archive::from_bytes(bytes).unwrap();
        let stats = archive.stats();
        assert_eq!(stats.pages, 2);
        assert_eq!(stats.junk, 2);
        assert!(stats.has_junk());
    }

    #[test]
    fn test_stats_on_clean_archive() {
        let bytes = build_archive(&[("001.webp", b"fake"), ("002.webp", b"fake")]);
        let archive = Archive::from_bytes(bytes).unwrap();
        let stats = archive.stats();
        assert_eq!(stats.pages, 2);
        assert_eq!(stats.junk, 0);
        assert!(!stats.has_junk());
    }
}
