//! CBZ container reading and embedded descriptor extraction.
//!
//! A comic archive is a zip container of page images plus, optionally, one
//! embedded `ComicInfo.xml` descriptor authored by whoever packaged it. This
//! crate opens the container, pulls the descriptor out as a flat field→value
//! [`DescriptorPayload`], and counts page/junk entries — nothing more. What
//! the metadata *means* (and whether it agrees with the filename) is decided
//! upstream.
//!
//! The two failure classes matter to callers in different ways:
//! [`ErrorKind::Container`](error::ErrorKind::Container) means the file can't
//! be trusted at all, while [`ErrorKind::Descriptor`](error::ErrorKind::Descriptor)
//! only invalidates the embedded metadata and is routinely recovered from.

mod consts;
mod container;
mod descriptor;
pub mod error;
mod stats;

pub use crate::container::Archive;
pub use crate::descriptor::DescriptorPayload;
pub use crate::stats::PageStats;
