//! Generic parameterized read executor.
//!
//! One store connection per call: connect, run the statement, close. No
//! pooling and no reuse across calls; every request stays self-contained
//! at the cost of a connection handshake per query. A pooled variant could
//! sit behind the same interface without changing observable behavior.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Connection, FromRow, PgConnection, Postgres};

use fleetgate_core::config::StoreSection;

/// Store access failure taxonomy.
///
/// `Connection` means the store was unreachable; `Query` means the
/// statement itself failed (malformed SQL, type mismatch). Read handlers
/// surface both to the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unreachable: {source}")]
    Connection { source: sqlx::Error },

    #[error("query failed: {source}")]
    Query { source: sqlx::Error },
}

/// Executes one parameterized read-only statement per call against the
/// backing store.
///
/// Statements are templates with positional `$n` binds; caller input never
/// reaches the SQL text. The store configuration is passed in explicitly at
/// construction - there is no process-global connection state.
#[derive(Clone)]
pub struct QueryExecutor {
    store: StoreSection,
}

impl QueryExecutor {
    pub fn new(store: StoreSection) -> Self {
        Self { store }
    }

    /// Fetch all rows for a prepared query. An empty result is a valid,
    /// non-error outcome.
    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Vec<T>, StoreError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let mut conn = self.open().await?;
        let rows = query
            .fetch_all(&mut conn)
            .await
            .map_err(|source| StoreError::Query { source })?;
        close_quietly(conn).await;
        Ok(rows)
    }

    /// Fetch at most one row.
    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> Result<Option<T>, StoreError>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
    {
        let mut conn = self.open().await?;
        let row = query
            .fetch_optional(&mut conn)
            .await
            .map_err(|source| StoreError::Query { source })?;
        close_quietly(conn).await;
        Ok(row)
    }

    /// Run a statement for its side effect, returning the affected row
    /// count.
    pub async fn execute(
        &self,
        query: Query<'_, Postgres, PgArguments>,
    ) -> Result<u64, StoreError> {
        let mut conn = self.open().await?;
        let result = query
            .execute(&mut conn)
            .await
            .map_err(|source| StoreError::Query { source })?;
        close_quietly(conn).await;
        Ok(result.rows_affected())
    }

    async fn open(&self) -> Result<PgConnection, StoreError> {
        PgConnection::connect(&self.store.database_url)
            .await
            .map_err(|source| StoreError::Connection { source })
    }
}

/// Close failures after a successful statement are not worth surfacing.
async fn close_quietly(conn: PgConnection) {
    if let Err(error) = conn.close().await {
        tracing::debug!(%error, "connection close failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p fleetgate-server -- --ignored

    fn executor_from_env() -> QueryExecutor {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        QueryExecutor::new(StoreSection { database_url })
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn executor_runs_a_query() {
        let exec = executor_from_env();
        let rows: Vec<(i32,)> = exec
            .fetch_all(sqlx::query_as("SELECT $1::int").bind(7))
            .await
            .expect("query failed");
        assert_eq!(rows, vec![(7,)]);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn empty_result_is_not_an_error() {
        let exec = executor_from_env();
        let rows: Vec<(i32,)> = exec
            .fetch_all(sqlx::query_as("SELECT 1 WHERE FALSE"))
            .await
            .expect("query failed");
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn unreachable_store_classifies_as_connection_error() {
        let exec = QueryExecutor::new(StoreSection {
            database_url: "postgres://127.0.0.1:1/unreachable".to_string(),
        });
        let result: Result<Vec<(i32,)>, _> =
            exec.fetch_all(sqlx::query_as("SELECT 1")).await;
        assert!(matches!(result, Err(StoreError::Connection { .. })));
    }
}
