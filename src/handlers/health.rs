use axum::{Json, extract::State};
use serde::Serialize;
use sqlx::PgPool;
use time::OffsetDateTime;

use crate::helpers::{ApiResult, internal};

#[derive(Debug, Serialize)]
pub struct DbNow {
    #[serde(with = "time::serde::rfc3339")]
    pub now: OffsetDateTime,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "API is running" }))
}

/// Sonde de connectivité: un aller-retour `SELECT NOW()` vers la base.
pub async fn db_test(State(pool): State<PgPool>) -> ApiResult<Json<DbNow>> {
    let now: OffsetDateTime = sqlx::query_scalar("SELECT NOW()")
        .fetch_one(&pool)
        .await
        .map_err(internal("Database connection failed"))?;

    Ok(Json(DbNow { now }))
}
