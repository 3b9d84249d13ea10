//! SQLite-backed quotation store.
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use quotation_common::Quotation;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tokio::time::timeout;

use super::QuotationStore;
use crate::error::ServerError;
use crate::model::record::QuotationRecord;

const INSERT_QUOTATION: &str = r#"
    INSERT INTO quotations (
        code,
        code_in,
        name,
        high,
        low,
        var_bid,
        pct_change,
        bid,
        ask,
        timestamp,
        create_date
    ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

/// Quotation store over a single SQLite file.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database at `path` and make sure the
    /// `quotations` table exists.
    pub async fn open(path: &Path) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database ready at {}", path.display());

        Ok(Self { pool })
    }

    /// Number of persisted quotations.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM quotations")
            .fetch_one(&self.pool)
            .await
    }

    /// Up to `limit` most recent rows, newest first.
    pub async fn recent(&self, limit: i64) -> Result<Vec<QuotationRecord>, sqlx::Error> {
        sqlx::query_as::<_, QuotationRecord>(
            "SELECT id, code, code_in, name, high, low, var_bid, pct_change, bid, ask, timestamp, create_date, persist_date
            FROM quotations ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Wait for in-flight queries and close every connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl QuotationStore for SqliteStore {
    /// The insert runs inside a transaction and only the `BEGIN` + `INSERT`
    /// part is bounded by `budget`. On timeout the transaction is dropped
    /// uncommitted and rolled back, even if SQLite already executed the
    /// statement.
    async fn insert(&self, quotation: &Quotation, budget: Duration) -> Result<i64, ServerError> {
        let pending = async {
            let mut tx = self.pool.begin().await?;
            let result = sqlx::query(INSERT_QUOTATION)
                .bind(&quotation.code)
                .bind(&quotation.code_in)
                .bind(&quotation.name)
                .bind(&quotation.high)
                .bind(&quotation.low)
                .bind(&quotation.var_bid)
                .bind(&quotation.pct_change)
                .bind(&quotation.bid)
                .bind(&quotation.ask)
                .bind(&quotation.timestamp)
                .bind(&quotation.create_date)
                .execute(&mut *tx)
                .await?;
            Ok::<_, sqlx::Error>((tx, result.last_insert_rowid()))
        };

        let (tx, id) = timeout(budget, pending)
            .await
            .map_err(|_| ServerError::PersistTimeout(budget))??;
        tx.commit().await?;

        debug!("Quotation persisted with id {}", id);
        Ok(id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use sqlx::{Connection, SqliteConnection};
    use tempfile::TempDir;

    const BUDGET: Duration = Duration::from_secs(2);

    pub(crate) fn sample_quotation(bid: &str) -> Quotation {
        Quotation {
            code: "USD".into(),
            code_in: "BRL".into(),
            name: "Dólar Americano/Real Brasileiro".into(),
            high: "5.2789".into(),
            low: "5.2321".into(),
            var_bid: "0.0102".into(),
            pct_change: "0.19".into(),
            bid: bid.into(),
            ask: "5.2604".into(),
            timestamp: "1700000000".into(),
            create_date: "2023-11-14 19:13:20".into(),
        }
    }

    pub(crate) async fn temp_store() -> (SqliteStore, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = SqliteStore::open(&dir.path().join("quotations.sqlite"))
            .await
            .unwrap();
        (store, dir)
    }

    /// Second connection holding the database write lock until released.
    pub(crate) async fn hold_write_lock(dir: &TempDir) -> SqliteConnection {
        let options = SqliteConnectOptions::new().filename(dir.path().join("quotations.sqlite"));
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();
        sqlx::query("BEGIN IMMEDIATE").execute(&mut conn).await.unwrap();
        conn
    }

    pub(crate) async fn release_write_lock(mut conn: SqliteConnection) {
        sqlx::query("COMMIT").execute(&mut conn).await.unwrap();
        conn.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_creates_empty_table() {
        let (store, _dir) = temp_store().await;
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn reopening_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotations.sqlite");

        let store = SqliteStore::open(&path).await.unwrap();
        store.insert(&sample_quotation("5.10"), BUDGET).await.unwrap();
        store.close().await;

        let reopened = SqliteStore::open(&path).await.unwrap();
        assert_eq!(reopened.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn insert_appends_rows_with_increasing_ids() {
        let (store, _dir) = temp_store().await;

        let first = store.insert(&sample_quotation("5.10"), BUDGET).await.unwrap();
        let second = store.insert(&sample_quotation("5.20"), BUDGET).await.unwrap();

        assert!(second > first);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn recent_returns_stored_fields_newest_first() {
        let (store, _dir) = temp_store().await;
        store.insert(&sample_quotation("5.10"), BUDGET).await.unwrap();
        store.insert(&sample_quotation("5.20"), BUDGET).await.unwrap();

        let records = store.recent(10).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].bid, "5.20");
        assert_eq!(records[1].bid, "5.10");
        assert_eq!(records[0].code_in, "BRL");
        assert_eq!(records[0].var_bid, "0.0102");
        assert_eq!(records[0].create_date, "2023-11-14 19:13:20");
        assert!(records[0].id > records[1].id);
        assert!(records[0].to_string().contains("USD/BRL"));
    }

    #[tokio::test]
    async fn insert_past_budget_is_rolled_back() {
        let (store, dir) = temp_store().await;
        let blocker = hold_write_lock(&dir).await;

        let err = store
            .insert(&sample_quotation("5.30"), Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, ServerError::PersistTimeout(d) if d == Duration::from_millis(10)));

        tokio::time::sleep(Duration::from_millis(300)).await;
        release_write_lock(blocker).await;
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(store.count().await.unwrap(), 0);
        store.insert(&sample_quotation("5.40"), BUDGET).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
