use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

async fn connect_to_db(url: &str) -> Result<PgPool, sqlx::Error> {
    let db_pool = PgPoolOptions::new()
        .max_connections(30)
        .connect(url)
        .await?;

    Ok(db_pool)
}

async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("🔄 Exécution des migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("✅ Migrations exécutées avec succès!");
    Ok(())
}

pub async fn init_db(url: &str) -> PgPool {
    let pool = connect_to_db(url)
        .await
        .unwrap_or_else(|e| panic!("Echec connexion DB: {e}"));
    if let Err(e) = run_migrations(&pool).await {
        tracing::warn!("⚠️ Erreur lors des migrations : {e}");
    }
    pool
}
