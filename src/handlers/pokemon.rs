use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use sqlx::PgPool;

use crate::helpers::{ApiResult, bad_request, internal, not_found};
use crate::models::pokemon::{CaughtPokemon, CreatePokemon, ListParams, UpdatePokemon};
use crate::query::{Bind, ListQuery, SortField, SortOrder};

fn require_name(name: Option<&str>) -> ApiResult<&str> {
    match name {
        Some(n) if !n.trim().is_empty() => Ok(n),
        _ => Err(bad_request("Name is required")),
    }
}

pub async fn create_pokemon(
    State(pool): State<PgPool>,
    Json(payload): Json<CreatePokemon>,
) -> ApiResult<(StatusCode, Json<CaughtPokemon>)> {
    let name = require_name(payload.name.as_deref())?;

    let row = sqlx::query_as::<_, CaughtPokemon>(
        r#"
        INSERT INTO caught_pokemon (name, nickname, type, level, evolution_line)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(payload.nickname.as_deref())
    .bind(payload.r#type.as_deref())
    .bind(payload.level.unwrap_or(1))
    .bind(payload.evolution_line.as_deref())
    .fetch_one(&pool)
    .await
    .map_err(internal("Failed to create pokemon"))?;

    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn list_pokemon(
    State(pool): State<PgPool>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<CaughtPokemon>>> {
    let min_level = params
        .min_level()
        .map_err(|_| bad_request("minLevel must be a number"))?;

    let ListQuery { sql, binds } = ListQuery::build(
        params.type_filter(),
        min_level,
        SortField::parse(params.sort.as_deref()),
        SortOrder::parse(params.order.as_deref()),
    );

    let mut query = sqlx::query_as::<_, CaughtPokemon>(&sql);
    for bind in binds {
        query = match bind {
            Bind::Text(s) => query.bind(s),
            Bind::Int(n) => query.bind(n),
        };
    }

    let rows = query
        .fetch_all(&pool)
        .await
        .map_err(internal("Failed to fetch Pokemon"))?;

    Ok(Json(rows))
}

pub async fn get_favorites(State(pool): State<PgPool>) -> ApiResult<Json<Vec<CaughtPokemon>>> {
    let rows = sqlx::query_as::<_, CaughtPokemon>(
        "SELECT * FROM caught_pokemon WHERE is_favorite = TRUE ORDER BY level DESC",
    )
    .fetch_all(&pool)
    .await
    .map_err(internal("Failed to fetch favorites"))?;

    Ok(Json(rows))
}

pub async fn get_pokemon(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CaughtPokemon>> {
    let row = sqlx::query_as::<_, CaughtPokemon>("SELECT * FROM caught_pokemon WHERE id = $1")
        .bind(id)
        .fetch_optional(&pool)
        .await
        .map_err(internal("Failed to fetch Pokemon"))?;

    let Some(row) = row else {
        return Err(not_found("Pokemon not found"));
    };

    Ok(Json(row))
}

pub async fn update_pokemon(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePokemon>,
) -> ApiResult<Json<CaughtPokemon>> {
    let name = require_name(payload.name.as_deref())?;

    let row = sqlx::query_as::<_, CaughtPokemon>(
        r#"
        UPDATE caught_pokemon
        SET name = $1,
            nickname = $2,
            type = $3,
            level = $4,
            evolution_line = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(payload.nickname.as_deref())
    .bind(payload.r#type.as_deref())
    .bind(payload.level.unwrap_or(1))
    .bind(payload.evolution_line.as_deref())
    .bind(id)
    .fetch_optional(&pool)
    .await
    .map_err(internal("Failed to update pokemon"))?;

    let Some(row) = row else {
        return Err(not_found("Pokemon not found"));
    };

    Ok(Json(row))
}

/// Bascule atomique: un seul UPDATE, jamais de lecture-puis-écriture.
pub async fn toggle_favorite(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CaughtPokemon>> {
    let row = sqlx::query_as::<_, CaughtPokemon>(
        r#"
        UPDATE caught_pokemon
        SET is_favorite = NOT is_favorite
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .fetch_optional(&pool)
    .await
    .map_err(internal("Failed to toggle favorite"))?;

    let Some(row) = row else {
        return Err(not_found("Pokemon not found"));
    };

    Ok(Json(row))
}

pub async fn delete_pokemon(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> ApiResult<Json<serde_json::Value>> {
    let res = sqlx::query("DELETE FROM caught_pokemon WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await
        .map_err(internal("Failed to delete pokemon"))?;

    if res.rows_affected() == 0 {
        return Err(not_found("Pokemon not found"));
    }

    Ok(Json(json!({ "message": "Pokemon deleted" })))
}
