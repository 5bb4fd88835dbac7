//! Database connection utilities.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use fabula_error::{DatabaseError, DatabaseErrorKind};
use tracing::{debug, instrument};

/// Shared r2d2 connection pool over PostgreSQL.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Build a connection pool for the given database URL.
///
/// # Errors
///
/// Returns an error if the pool cannot establish its initial connections.
#[instrument(skip_all)]
pub fn establish_pool(database_url: &str) -> DatabaseResult<PgPool> {
    debug!("Building database connection pool");
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))
}

/// Verify the database is reachable by running a trivial query.
///
/// The boot sequence calls this once and refuses to start the listener on
/// failure.
///
/// # Errors
///
/// Returns an error if a connection cannot be checked out or the query fails.
#[instrument(skip_all)]
pub async fn check_connection(pool: &PgPool) -> DatabaseResult<()> {
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut conn = pool
            .get()
            .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(DatabaseError::from)?;
        Ok(())
    })
    .await
    .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(format!("join error: {}", e))))?
}
