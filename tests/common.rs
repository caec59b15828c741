use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::OnceCell;
use tower_http::cors::CorsLayer;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Pool partagé entre les tests. Renvoie `None` quand TEST_DATABASE_URL
/// n'est pas défini: les tests dépendant de la base s'ignorent alors.
#[allow(dead_code)]
pub async fn try_test_pool() -> Option<&'static PgPool> {
    let _ = dotenvy::dotenv();
    let url = std::env::var("TEST_DATABASE_URL").ok()?;

    Some(
        POOL.get_or_init(|| async move {
            let pool = PgPoolOptions::new()
                .max_connections(30)
                .acquire_timeout(Duration::from_secs(30))
                .connect(&url)
                .await
                .expect("DB connect failed");
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Migration failed");
            pool
        })
        .await,
    )
}

/// Supprime les lignes marquées d'un type propre à un test, pour que les
/// scénarios restent rejouables sur une base partagée.
#[allow(dead_code)]
pub async fn purge_type(pool: &PgPool, marker: &str) {
    sqlx::query("DELETE FROM caught_pokemon WHERE type = $1")
        .bind(marker)
        .execute(pool)
        .await
        .expect("purge failed");
}

/// Démarre le vrai serveur sur un port éphémère et renvoie son URL de base.
#[allow(dead_code)]
pub async fn start_server() -> Option<(String, tokio::task::JoinHandle<()>)> {
    let pool = try_test_pool().await?.clone();

    let app = pokecatch_backend::app::build_routes()
        .with_state(pool)
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base = format!("http://{addr}");

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("serve error: {e}");
        }
    });

    for _ in 0..30 {
        if let Ok(resp) = reqwest::get(format!("{base}/health")).await {
            if resp.status().is_success() {
                break;
            }
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    Some((base, handle))
}
