use crate::Database;
use crate::error::{DatabaseError, DatabaseErrorExt};
use serde::Deserialize;
use surrealdb::types::SurrealValue;

/// Upper bound for a single browse page.
const MAX_PAGE_SIZE: i64 = 500;

/// A persistent record schema bound to one collection.
///
/// Implementors declare where they live, how humans refer to them, and how their
/// natural key is derived. Everything else (browse, save, count) is generic.
pub trait Record: SurrealValue + Send + Sync + 'static {
    /// Collection name. Must be a plain identifier; it is interpolated into queries.
    const TABLE: &'static str;
    /// Human-readable plural title.
    const TITLE: &'static str;
    /// Natural sort order, as the body of a SurrealQL `ORDER BY` clause.
    const ORDER_BY: &'static str;

    /// Canonical natural key for this record. Composite keys join their parts with `:`,
    /// so repeated saves of the same logical record upsert in place.
    fn key(&self) -> String;
}

/// Browse window over a collection, in its natural order.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Page {
    pub start: i64,
    pub limit: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self { start: 0, limit: 50 }
    }
}

impl Page {
    fn clamped(self) -> Self {
        Self { start: self.start.max(0), limit: self.limit.clamp(1, MAX_PAGE_SIZE) }
    }
}

impl Database {
    /// Reads a page of `T` records in their natural order.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the query fails or rows do not match `T`.
    pub async fn browse<T: Record>(&self, page: Page) -> Result<Vec<T>, DatabaseError> {
        let page = page.clamped();
        let sql = format!(
            "SELECT * OMIT id FROM {} ORDER BY {} LIMIT $limit START $start",
            T::TABLE,
            T::ORDER_BY,
        );

        let records = self
            .query(&sql)
            .bind(("limit", page.limit))
            .bind(("start", page.start))
            .await
            .context("Browsing records")?
            .take::<Vec<T>>(0)
            .context(T::TABLE)?;

        Ok(records)
    }

    /// Upserts a record under its natural-key id.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the write is rejected (type or length
    /// assertion, uniqueness index) or the query fails.
    pub async fn save<T: Record>(&self, record: T) -> Result<(), DatabaseError> {
        self.query("UPSERT type::thing($table, $key) CONTENT $record RETURN NONE")
            .bind(("table", T::TABLE))
            .bind(("key", record.key()))
            .bind(("record", record))
            .await
            .context("Saving record")?
            .check()
            .map_err(surrealdb::Error::from)?;

        Ok(())
    }

    /// Counts the records in `T`'s collection.
    ///
    /// # Errors
    /// Returns [`DatabaseError::Surreal`] if the query fails.
    pub async fn count<T: Record>(&self) -> Result<i64, DatabaseError> {
        let sql = format!("(SELECT count() FROM {} GROUP ALL)[0].count ?? 0", T::TABLE);

        let count = self
            .query(&sql)
            .await
            .context("Counting records")?
            .take::<Option<i64>>(0)
            .context(T::TABLE)?;

        Ok(count.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults() {
        let page = Page::default();
        assert_eq!(page.start, 0);
        assert_eq!(page.limit, 50);
    }

    #[test]
    fn page_clamps_out_of_range_values() {
        let page = Page { start: -3, limit: 0 }.clamped();
        assert_eq!(page.start, 0);
        assert_eq!(page.limit, 1);

        let page = Page { start: 10, limit: 100_000 }.clamped();
        assert_eq!(page.limit, MAX_PAGE_SIZE);
    }
}
