use vegan_cosmetics_api::{
    config::DatabaseConfig,
    db::{close_orm_conn, create_orm_conn, run_migrations},
    telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = DatabaseConfig::from_env()?;
    let orm = create_orm_conn(config.require_database_url()?, config.connect_timeout).await?;
    let applied = run_migrations(&orm).await;
    close_orm_conn(orm).await;
    applied?;

    println!("Migrations applied");
    Ok(())
}
