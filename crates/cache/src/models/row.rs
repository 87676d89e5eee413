use crate::error::{Error, ErrorKind};
use crate::models::{CatalogEntry, Fingerprint};
use exn::ResultExt;
use tanko_archive::DescriptorPayload;
use time::UtcDateTime;

#[derive(sqlx::FromRow)]
pub(crate) struct EntryRow {
    pub(crate) path: String,
    pub(crate) file_size: i64,
    pub(crate) modified_at: i64,
    pub(crate) content_hash: Option<String>,
    pub(crate) descriptor: String,
    pub(crate) last_scanned_at: i64,
}
impl TryFrom<&CatalogEntry> for EntryRow {
    type Error = Error;
    fn try_from(entry: &CatalogEntry) -> Result<Self, Self::Error> {
        Ok(Self {
            path: entry.path.clone(),
            file_size: i64::try_from(entry.fingerprint.size).or_raise(|| ErrorKind::InvalidData("file size"))?,
            modified_at: entry.fingerprint.modified_at.unix_timestamp(),
            content_hash: entry.fingerprint.content_hash.clone(),
            descriptor: serde_json::to_string(&entry.descriptor).or_raise(|| ErrorKind::InvalidData("descriptor"))?,
            last_scanned_at: entry.last_scanned_at.unix_timestamp(),
        })
    }
}
impl TryFrom<EntryRow> for CatalogEntry {
    type Error = Error;
    fn try_from(row: EntryRow) -> Result<Self, Self::Error> {
        let mut fingerprint = Fingerprint::cheap(
            u64::try_from(row.file_size).or_raise(|| ErrorKind::InvalidData("file size"))?,
            UtcDateTime::from_unix_timestamp(row.modified_at)
                .or_raise(|| ErrorKind::InvalidData("modification date"))?,
        );
        if let Some(hash) = row.content_hash {
            fingerprint = fingerprint.with_content_hash(hash);
        }
        Ok(Self {
            path: row.path,
            fingerprint,
            descriptor: serde_json::from_str::<DescriptorPayload>(&row.descriptor)
                .or_raise(|| ErrorKind::InvalidData("descriptor"))?,
            last_scanned_at: UtcDateTime::from_unix_timestamp(row.last_scanned_at)
                .or_raise(|| ErrorKind::InvalidData("scan date"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_to_model() {
        let scanned = UtcDateTime::now();
        let row = EntryRow {
            path: "/library/mysteries of shadow/Mysteries of Shadow v03.cbz".to_string(),
            file_size: 1024,
            modified_at: scanned.unix_timestamp() - 3600,
            content_hash: Some("6f1b17063da8508541eb76dac260748a2d815c2c88b27cefb6205c90ae16fef5".to_string()),
            descriptor: r#"{"number":"3","series":"Mysteries of Shadow"}"#.to_string(),
            last_scanned_at: scanned.unix_timestamp(),
        };
        let entry = CatalogEntry::try_from(row).unwrap();
        assert_eq!(entry.fingerprint.size, 1024);
        assert_eq!(entry.descriptor.series(), Some("Mysteries of Shadow"));
        // Converting through a unix timestamp (seconds) strips the nanoseconds component.
        assert_eq!(entry.last_scanned_at, scanned.replace_nanosecond(0).unwrap());
    }

    #[test]
    fn test_model_to_row() {
        let entry = CatalogEntry::new(
            "/library/example/Example v01.cbz",
            Fingerprint::cheap(2048, UtcDateTime::now()),
            [("series".to_string(), "Example".to_string())].into_iter().collect::<DescriptorPayload>(),
            UtcDateTime::now(),
        );
        let row = EntryRow::try_from(&entry).unwrap();
        assert_eq!(row.file_size, 2048);
        assert_eq!(row.content_hash, None);
        assert_eq!(row.descriptor, r#"{"series":"Example"}"#);
    }

    #[test]
    fn test_malformed_descriptor_column() {
        let row = EntryRow {
            path: "/x.cbz".to_string(),
            file_size: 1,
            modified_at: 0,
            content_hash: None,
            descriptor: "not json".to_string(),
            last_scanned_at: 0,
        };
        let err = CatalogEntry::try_from(row).unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidData("descriptor")));
    }
}
