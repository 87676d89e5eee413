use scraper::Selector;
use std::sync::LazyLock;

/// Name of the embedded descriptor entry, matched case-insensitively at the
/// container root (nested copies are repack leftovers and are ignored).
pub(crate) const DESCRIPTOR_NAME: &str = "comicinfo.xml";

/// Page entries are identified by extension alone; decompressing every image
/// just to sniff magic bytes would defeat the point of a cheap inspection.
pub(crate) const IMAGE_EXTENSIONS: &[&str] = &["avif", "bmp", "gif", "jpeg", "jpg", "png", "webp"];

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

// The parser lower-cases element names, so this matches `<ComicInfo>` too.
selector!(DESCRIPTOR_ROOT_SELECTOR, "comicinfo");
