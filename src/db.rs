use std::{future::Future, path::PathBuf, time::Duration};

use anyhow::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, RuntimeErr, Statement,
};
use tokio::fs;

const MAX_CONNECTIONS: u32 = 5;

/// Create a SeaORM connection that gives up after `timeout` when the server cannot be reached.
pub async fn create_orm_conn(
    database_url: &str,
    timeout: Duration,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options
        .max_connections(MAX_CONNECTIONS)
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .sqlx_logging(false);
    Database::connect(options).await
}

/// Release the connection pool, logging instead of failing if the server already went away.
pub async fn close_orm_conn(conn: DatabaseConnection) {
    match conn.close().await {
        Ok(()) => tracing::debug!("database connection closed"),
        Err(err) => tracing::warn!(error = %err, "closing database connection failed"),
    }
}

/// Outcome of a unit of work raced against the shutdown signal.
#[derive(Debug)]
pub enum Scoped<T> {
    Completed(T),
    Interrupted,
}

/// Run `work` until it finishes or `shutdown` resolves, whichever comes first.
/// A shutdown that is already pending wins over work that is also ready.
///
/// Callers own the connection the work borrows and close it after this returns,
/// so the release happens on both branches.
pub async fn until_shutdown<F, S>(work: F, shutdown: S) -> Scoped<F::Output>
where
    F: Future,
    S: Future<Output = ()>,
{
    tokio::select! {
        biased;
        () = shutdown => Scoped::Interrupted,
        output = work => Scoped::Completed(output),
    }
}

/// The driver error underneath a SeaORM error, when there is one.
pub fn sqlx_error(err: &DbErr) -> Option<&sqlx::Error> {
    match err {
        DbErr::Conn(RuntimeErr::SqlxError(inner))
        | DbErr::Exec(RuntimeErr::SqlxError(inner))
        | DbErr::Query(RuntimeErr::SqlxError(inner)) => Some(inner),
        _ => None,
    }
}

/// Postgres SQLSTATE code reported by the server, e.g. `42P01` for a missing relation.
pub fn sqlstate(err: &DbErr) -> Option<String> {
    match sqlx_error(err)? {
        sqlx::Error::Database(db) => db.code().map(|code| code.into_owned()),
        _ => None,
    }
}

/// Minimal migration runner that executes SQL files in `migrations/` in filename order.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let mut entries = fs::read_dir("migrations").await?;
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }
    files.sort();

    let backend = conn.get_database_backend();
    for file in files {
        tracing::info!(file = %file.display(), "applying migration");
        let sql = fs::read_to_string(&file).await?;
        // Postgres prepared statements cannot contain multiple commands,
        // so split the migration file and run each statement individually.
        for stmt in sql.split(';') {
            let stmt = stmt.trim();
            if stmt.is_empty() {
                continue;
            }
            let statement = format!("{stmt};");
            conn.execute(Statement::from_string(backend, statement))
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::future::pending;

    use super::*;

    #[tokio::test]
    async fn completed_work_wins_over_pending_shutdown() {
        let outcome = until_shutdown(async { 7 }, pending()).await;
        assert!(matches!(outcome, Scoped::Completed(7)));
    }

    #[tokio::test]
    async fn shutdown_interrupts_pending_work() {
        let outcome = until_shutdown(pending::<()>(), async {}).await;
        assert!(matches!(outcome, Scoped::Interrupted));
    }

    #[test]
    fn non_driver_errors_have_no_sqlstate() {
        let err = DbErr::Custom("boom".into());
        assert!(sqlx_error(&err).is_none());
        assert!(sqlstate(&err).is_none());
    }
}
