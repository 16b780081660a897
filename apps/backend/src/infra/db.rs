use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

fn db_engine(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteMemory => "sqlite",
    }
}

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all attempts are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(conn) => {
                if attempt > 1 {
                    info!(attempts = attempt, "connection_retry=success");
                }
                return Ok(conn);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

/// Open a pool for the given environment, backend and owner.
/// Does NOT run migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let url = db_url(env, kind, owner)?;

    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    match kind {
        // Each in-memory connection is its own database; pin the pool to one.
        DbKind::SqliteMemory => {
            opt.min_connections(1).max_connections(1);
            let conn = Database::connect(opt).await?;
            info!(engine = db_engine(kind), ?env, "database connected");
            Ok(conn)
        }
        DbKind::Postgres => {
            opt.max_connections(10);
            let conn = retry_connection(
                || {
                    let opt = opt.clone();
                    async move { Database::connect(opt).await.map_err(AppError::from) }
                },
                CONNECT_ATTEMPTS,
                CONNECT_RETRY_INTERVAL_MS,
            )
            .await?;
            info!(engine = db_engine(kind), ?env, ?owner, "database connected");
            Ok(conn)
        }
    }
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(env, kind, owner).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
