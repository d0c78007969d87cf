//! PostgreSQL repository adapter.

use async_trait::async_trait;
use sqlx::PgPool;

use eventra_types::{
    NewPayment, Payment, PaymentId, PaymentRepository, RepoError, Status, StatusId,
    StatusRepository,
};

use crate::types::{DbPayment, DbStatus, SELECT_PAYMENTS, db_err};

// ─────────────────────────────────────────────────────────────────────────────
// PostgreSQL Repository
// ─────────────────────────────────────────────────────────────────────────────

/// PostgreSQL repository implementation.
pub struct PostgresRepo {
    pool: PgPool,
}

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
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

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_tables_pg.sql"),
        "0001",
    )
    .await
}

impl PostgresRepo {
    /// Creates a new PostgreSQL repository with automatic migration.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url).await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Repository implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl PaymentRepository for PostgresRepo {
    async fn create_payment(&self, payment: NewPayment) -> Result<Payment, RepoError> {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO payments (reservation_id, amount, payment_method, status_id, payment_date)
               VALUES ($1, $2, $3, $4, $5)
               RETURNING id"#,
        )
        .bind(payment.reservation_id.get())
        .bind(payment.amount)
        .bind(&payment.payment_method)
        .bind(payment.status_id.get())
        .bind(payment.payment_date)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;

        self.get_payment(PaymentId::new(id))
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn get_payment(&self, id: PaymentId) -> Result<Option<Payment>, RepoError> {
        let sql = format!("{SELECT_PAYMENTS} WHERE p.id = $1");

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
               SET reservation_id = $1, amount = $2, payment_method = $3, status_id = $4, payment_date = $5
               WHERE id = $6"#,
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
        let result = sqlx::query(r#"DELETE FROM payments WHERE id = $1"#)
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn payment_exists(&self, id: PaymentId) -> Result<bool, RepoError> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM payments WHERE id = $1)"#)
                .bind(id.get())
                .fetch_one(&self.pool)
                .await
                .map_err(db_err)?;

        Ok(exists)
    }
}

#[async_trait]
impl StatusRepository for PostgresRepo {
    async fn get_status(&self, id: StatusId) -> Result<Option<Status>, RepoError> {
        let row: Option<DbStatus> =
            sqlx::query_as(r#"SELECT id, description FROM payment_status WHERE id = $1"#)
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
