use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct CaughtPokemon {
    pub id: i32,
    pub name: String,
    pub nickname: Option<String>,
    pub r#type: Option<String>,
    pub level: i32,
    pub evolution_line: Option<String>,
    pub is_favorite: bool,
}

/// `name` reste optionnel dans l'enveloppe: son absence doit produire un 400
/// explicite du handler, pas un rejet de désérialisation.
#[derive(Debug, Deserialize)]
pub struct CreatePokemon {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub r#type: Option<String>,
    pub level: Option<i32>,
    pub evolution_line: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePokemon {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub r#type: Option<String>,
    pub level: Option<i32>,
    pub evolution_line: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub r#type: Option<String>,
    #[serde(rename = "minLevel")]
    pub min_level: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl ListParams {
    /// Un paramètre présent mais vide (`?type=`) est traité comme absent.
    pub fn type_filter(&self) -> Option<&str> {
        self.r#type.as_deref().filter(|t| !t.is_empty())
    }

    pub fn min_level(&self) -> Result<Option<i64>, std::num::ParseIntError> {
        match self.min_level.as_deref().filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse().map(Some),
            None => Ok(None),
        }
    }
}
