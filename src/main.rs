use dotenvy::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use pokecatch_backend::app::build_routes;
use pokecatch_backend::db::init_db;

// cargo watch -c -x run

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set.");
    let addr = std::env::var("BACKEND_URL").expect("BACKEND_URL must be set.");

    let db_pool = init_db(&database_url).await;

    let app = build_routes()
        .with_state(db_pool)
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(&addr).await.unwrap();

    tracing::info!("🚀 Serveur démarré sur http://{addr}");

    axum::serve(listener, app).await.unwrap();
}
