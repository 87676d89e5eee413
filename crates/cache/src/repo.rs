//! Repository for catalog entries.

use crate::Database;
use crate::error::{ErrorKind, Result};
use crate::models::{CatalogEntry, EntryRow};
use exn::ResultExt;
use sqlx::SqlitePool;

/// Repository for managing rows in the catalog database.
///
/// One logical row per archive path; `path` is the unique key. Entries are
/// created when a sync pass first observes a path, mutated when the
/// fingerprint changes, and deleted when a completed pass no longer observes
/// the path on disk. The repository itself enforces none of that lifecycle —
/// the synchronizer owns the state machine, this type owns the SQL.
#[derive(Debug, Clone)]
pub struct Repository {
    pool: SqlitePool,
    dry_run: bool,
}
impl From<&Database> for Repository {
    fn from(db: &Database) -> Self {
        Self { pool: db.pool().clone(), dry_run: false }
    }
}
impl Repository {
    /// Create a new repository with the given connection pool.
    ///
    /// With `dry_run` set, mutating operations succeed without touching the
    /// database.
    pub fn new(pool: SqlitePool, dry_run: bool) -> Self {
        Self { pool, dry_run }
    }

    /// Insert or replace the entry for a path.
    ///
    /// One statement, one implicit transaction: a pass that dies mid-flight
    /// leaves the catalog at the last fully-committed entry, never a partial
    /// row.
    pub async fn upsert(&self, entry: &CatalogEntry) -> Result<()> {
        if self.dry_run {
            return Ok(());
        }
        let row = EntryRow::try_from(entry)?;
        sqlx::query(include_str!("../queries/upsert_entry.sql"))
            .bind(row.path)
            .bind(row.file_size)
            .bind(row.modified_at)
            .bind(row.content_hash)
            .bind(row.descriptor)
            .bind(row.last_scanned_at)
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(())
    }

    /// Get the entry for a path, if one exists.
    pub async fn get_by_path(&self, path: impl AsRef<str>) -> Result<Option<CatalogEntry>> {
        let row: Option<EntryRow> = sqlx::query_as(include_str!("../queries/get_by_path.sql"))
            .bind(path.as_ref())
            .fetch_optional(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        row.map(CatalogEntry::try_from).transpose()
    }

    /// List every entry, ordered by path.
    ///
    /// The synchronizer loads this once per pass instead of issuing a lookup
    /// per walked file.
    pub async fn list_entries(&self) -> Result<Vec<CatalogEntry>> {
        let rows: Vec<EntryRow> = sqlx::query_as(include_str!("../queries/list_entries.sql"))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        rows.into_iter().map(CatalogEntry::try_from).collect()
    }

    /// List every path, ordered.
    ///
    /// Cheaper than [`list_entries`](Self::list_entries) when only the key set
    /// is needed (e.g. computing the delete set after a pass).
    pub async fn list_paths(&self) -> Result<Vec<String>> {
        let paths: Vec<String> = sqlx::query_scalar(include_str!("../queries/list_paths.sql"))
            .fetch_all(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(paths)
    }

    /// Delete the entry for a path.
    ///
    /// Returns `true` if a row was deleted, `false` if the path wasn't there.
    pub async fn delete_by_path(&self, path: impl AsRef<str>) -> Result<bool> {
        if self.dry_run {
            return Ok(true);
        }
        let result = sqlx::query(include_str!("../queries/delete_by_path.sql"))
            .bind(path.as_ref())
            .execute(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the total number of catalog entries.
    pub async fn count(&self) -> Result<u64> {
        let row: (i64,) = sqlx::query_as(include_str!("../queries/count_entries.sql"))
            .fetch_one(&self.pool)
            .await
            .or_raise(|| ErrorKind::Database)?;
        u64::try_from(row.0).or_raise(|| ErrorKind::InvalidData("entry count"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Fingerprint;
    use tanko_archive::DescriptorPayload;
    use time::UtcDateTime;

    fn make_entry(path: &str, size: u64) -> CatalogEntry {
        CatalogEntry::new(
            path,
            Fingerprint::cheap(size, UtcDateTime::now()),
            [("series".to_string(), "Example".to_string())].into_iter().collect::<DescriptorPayload>(),
            UtcDateTime::now(),
        )
    }

    #[tokio::test]
    async fn test_upsert_and_get() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::from(&db);
        let entry = make_entry("/library/Example v01.cbz", 1024);
        repo.upsert(&entry).await.unwrap();
        let fetched = repo.get_by_path("/library/Example v01.cbz").await.unwrap().unwrap();
        assert_eq!(fetched.fingerprint.size, 1024);
        assert_eq!(fetched.descriptor.series(), Some("Example"));
        assert!(repo.get_by_path("/library/Other.cbz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_replaces_existing_row() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::from(&db);
        repo.upsert(&make_entry("/library/Example v01.cbz", 1024)).await.unwrap();
        repo.upsert(&make_entry("/library/Example v01.cbz", 4096)).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
        let fetched = repo.get_by_path("/library/Example v01.cbz").await.unwrap().unwrap();
        assert_eq!(fetched.fingerprint.size, 4096);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_path() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::from(&db);
        repo.upsert(&make_entry("/library/b.cbz", 1)).await.unwrap();
        repo.upsert(&make_entry("/library/a.cbz", 1)).await.unwrap();
        let paths = repo.list_paths().await.unwrap();
        assert_eq!(paths, vec!["/library/a.cbz".to_string(), "/library/b.cbz".to_string()]);
        assert_eq!(repo.list_entries().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_by_path() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::from(&db);
        repo.upsert(&make_entry("/library/a.cbz", 1)).await.unwrap();
        assert!(repo.delete_by_path("/library/a.cbz").await.unwrap());
        assert!(!repo.delete_by_path("/library/a.cbz").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_dry_run_never_writes() {
        let db = Database::connect_in_memory().await.unwrap();
        let repo = Repository::new(db.pool().clone(), true);
        repo.upsert(&make_entry("/library/a.cbz", 1)).await.unwrap();
        assert!(repo.delete_by_path("/library/a.cbz").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
