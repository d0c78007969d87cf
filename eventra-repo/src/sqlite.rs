//! SQLite repository adapter.
#![allow(clippy::collapsible_if)]

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use eventra_types::{
    NewPayment, Payment, PaymentId, PaymentRepository, RepoError, Status, StatusId,
    StatusRepository,
};

use crate::types::{DbPayment, DbStatus, SELECT_PAYMENTS, db_err};

// ─────────────────────────────────────────────────────────────────────────────
// SQLite Repository
// ─────────────────────────────────────────────────────────────────────────────

/// SQLite repository implementation.
pub struct SqliteRepo {
    pool: SqlitePool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &SqlitePool, sql: &str, name: &str) -> anyhow::Result<()> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

impl SqliteRepo {
    /// Creates a new SQLite repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                if let Some(parent) = std::path::Path::new(path).parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to an in-memory database sees its own empty
        // database, so those pools hold exactly one connection forever.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePool::connect_with(options).await?
        };

        execute_migration(&pool, include_str!("../migrations/0001_create_tables.sql"), "0001")
            .await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for SqliteRepo {
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment, RepoError> {
        let result = sqlx::query(
            r#"INSERT INTO payments (reservation_id, amount, payment_method, status_id, payment_date)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(payment.reservation_id.get())
        .bind(payment.amount)
        .bind(&payment.payment_method)
        .bind(payment.status_id.get())
        .bind(payment.payment_date)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        let id = PaymentId::new(result.last_insert_rowid());
        self.get_payment(id).await?.ok_or(RepoError::NotFound)
    }

    async fn get_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let sql = format!("{SELECT_PAYMENTS} WHERE p.id = ?");

        let row: Option<DbPayment> = sqlx::query_as(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(row.map(DbPayment::into_domain))
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, RepoError> {
        let sql = format!("{SELECT_PAYMENTS} ORDER BY p.id");

        let rows: Vec<DbPayment> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().map(DbPayment::into_domain).collect())
    }

    async fn update_payment(&self, payment: &Payment) -> Result<Payment, RepoError> {
        let result = sqlx::query(
            r#"UPDATE payments
               SET reservation_id = ?, amount = ?, payment_method = ?, status_id = ?, payment_date = ?
               WHERE id = ?"#,
        )
        .bind(payment.reservation_id.get())
        .bind(payment.amount)
        .bind(&payment.payment_method)
        .bind(payment.status.id.get())
        .bind(payment.payment_date)
        .bind(payment.id.get())
        .execute(&self.pool)
        .await
        .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }

        self.get_payment(payment.id)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn delete_payment(&self, id: PaymentId) -> Result<bool, RepoError> {
        let result = sqlx::query(r#"DELETE FROM payments WHERE id = ?"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn payment_exists(&self, id: PaymentId) -> Result<bool, RepoError> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM payments WHERE id = ?"#)
            .bind(id.get())
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(count > 0)
    }
}

#[async_trait]
impl StatusRepository for SqliteRepo {
    async fn get_status(&self, id: StatusId) -> Result<Option<Status>, RepoError> {
        let row: Option<DbStatus> =
            sqlx::query_as(r#"SELECT id, description FROM payment_status WHERE id = ?"#)
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;

        Ok(row.map(DbStatus::into_domain))
    }

    async fn list_statuses(&self) -> Result<Vec<Status>, RepoError> {
        let rows: Vec<DbStatus> =
            sqlx::query_as(r#"SELECT id, description FROM payment_status ORDER BY id"#)
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        Ok(rows.into_iter().map(DbStatus::into_domain).collect())
    }
}
