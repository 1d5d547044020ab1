#![allow(dead_code)]

use std::time::Duration;

use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use vegan_cosmetics_api::db::{create_orm_conn, run_migrations};

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection string for database-backed tests, or `None` to skip them.
pub fn database_url() -> Option<String> {
    match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
        Ok(url) => Some(url),
        Err(_) => {
            eprintln!("Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run database tests.");
            None
        }
    }
}

/// Connect, apply migrations and empty every table.
pub async fn setup_conn(database_url: &str) -> anyhow::Result<DatabaseConnection> {
    let orm = create_orm_conn(database_url, CONNECT_TIMEOUT).await?;
    run_migrations(&orm).await?;

    let backend = orm.get_database_backend();
    orm.execute(Statement::from_string(
        backend,
        "TRUNCATE TABLE order_items, orders, cart_items, carts, products, users RESTART IDENTITY CASCADE",
    ))
    .await?;

    Ok(orm)
}
