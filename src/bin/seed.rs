use vegan_cosmetics_api::{
    config::DatabaseConfig,
    db::{Scoped, close_orm_conn, create_orm_conn, until_shutdown},
    seed::run_seed,
    shutdown::shutdown_signal,
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DatabaseConfig::from_env()?;
    let database_url = config.require_database_url()?;
    let orm = create_orm_conn(database_url, config.connect_timeout).await?;

    let outcome = until_shutdown(run_seed(&orm), shutdown_signal()).await;
    close_orm_conn(orm).await;

    match outcome {
        Scoped::Completed(Ok(summary)) => {
            println!("Database summary:");
            println!("- Users: {}", summary.users);
            println!("- Products: {}", summary.products);
            println!("- Orders: {}", summary.orders);
            println!("- Carts: {}", summary.carts);
            Ok(())
        }
        Scoped::Completed(Err(err)) => {
            tracing::error!(stage = %err.stage, error = %err.source, "seeding failed");
            Err(err.into())
        }
        Scoped::Interrupted => {
            tracing::info!("seeding interrupted, shutting down");
            Ok(())
        }
    }
}
