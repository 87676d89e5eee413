mod confidence;
mod fix;
mod identity;
mod numbering;

pub use self::confidence::Confidence;
pub use self::fix::FixMarker;
pub use self::identity::ArchiveIdentity;
pub use self::numbering::Numbering;
