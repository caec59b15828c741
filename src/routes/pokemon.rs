use axum::Router;
use axum::routing::{get, patch};
use sqlx::PgPool;

use crate::handlers::pokemon::{
    create_pokemon, delete_pokemon, get_favorites, get_pokemon, list_pokemon, toggle_favorite,
    update_pokemon,
};

pub fn pokemon_routes() -> Router<PgPool> {
    Router::new()
        .route("/api/pokemon", get(list_pokemon).post(create_pokemon))
        // la route littérale doit précéder {id}, sinon "favorites" serait lu
        // comme un identifiant
        .route("/api/pokemon/favorites", get(get_favorites))
        .route(
            "/api/pokemon/{id}",
            get(get_pokemon).put(update_pokemon).delete(delete_pokemon),
        )
        .route("/api/pokemon/{id}/favorite", patch(toggle_favorite))
}
