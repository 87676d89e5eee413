//! Shared fixtures: tiny fabricated CBZ archives, no real comics harmed.

use std::io::{Cursor, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub fn descriptor_xml(series: &str, number: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<ComicInfo>\n  <Series>{series}</Series>\n  <Number>{number}</Number>\n  <PageCount>4</PageCount>\n</ComicInfo>",
    )
}

fn build_cbz(descriptor: Option<&str>, pages: u32) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    if let Some(markup) = descriptor {
        writer.start_file("ComicInfo.xml", SimpleFileOptions::default()).unwrap();
        writer.write_all(markup.as_bytes()).unwrap();
    }
    for page in 0..pages {
        writer.start_file(format!("{page:03}.png"), SimpleFileOptions::default()).unwrap();
        // Not a real PNG; entry classification is extension-based.
        writer.write_all(format!("page {page}").as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn write_file(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, bytes).unwrap();
}

/// A well-formed archive with an embedded descriptor.
pub fn write_archive(path: &Path, series: &str, number: &str, pages: u32) {
    write_file(path, &build_cbz(Some(&descriptor_xml(series, number)), pages));
}

/// A valid container with pages but no descriptor entry.
pub fn write_archive_without_descriptor(path: &Path, pages: u32) {
    write_file(path, &build_cbz(None, pages));
}

/// A valid container whose descriptor entry isn't descriptor markup.
pub fn write_archive_with_bad_descriptor(path: &Path) {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("ComicInfo.xml", SimpleFileOptions::default()).unwrap();
    writer.write_all(b"definitely not xml").unwrap();
    writer.start_file("000.png", SimpleFileOptions::default()).unwrap();
    writer.write_all(b"page").unwrap();
    write_file(path, &writer.finish().unwrap().into_inner());
}

/// Bytes that no container format will accept.
pub fn write_garbage(path: &Path) {
    write_file(path, b"this is not a zip archive, not even close");
}

/// Bumps a file's mtime without touching its contents.
pub fn touch(path: &Path, seconds_ahead: u64) {
    let file = std::fs::File::options().write(true).open(path).unwrap();
    let when = std::time::SystemTime::now() + std::time::Duration::from_secs(seconds_ahead);
    file.set_modified(when).unwrap();
}
