//! Construction de la requête de listing: filtres optionnels liés en `$n`,
//! tri validé par liste blanche avant toute interpolation dans le texte SQL.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Level,
    Name,
}

impl SortField {
    /// Toute valeur hors liste blanche (ou absente) retombe sur `level`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("name") => Self::Name,
            Some("level") => Self::Level,
            _ => Self::Level,
        }
    }

    fn column(self) -> &'static str {
        match self {
            Self::Level => "level",
            Self::Name => "name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            Some("asc") => Self::Asc,
            Some("desc") => Self::Desc,
            _ => Self::Desc,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Valeur à lier, dans l'ordre d'apparition des `$n` de la clause WHERE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind {
    Text(String),
    Int(i64),
}

#[derive(Debug)]
pub struct ListQuery {
    pub sql: String,
    pub binds: Vec<Bind>,
}

impl ListQuery {
    /// Les conditions sont jointes par AND; chaque valeur utilisateur passe
    /// par un paramètre lié, jamais concaténée. Seuls la colonne et le sens
    /// du tri, issus d'énumérations fermées, sont interpolés.
    pub fn build(
        type_filter: Option<&str>,
        min_level: Option<i64>,
        sort: SortField,
        order: SortOrder,
    ) -> Self {
        let mut sql = String::from("SELECT * FROM caught_pokemon");
        let mut binds = Vec::new();
        let mut conditions = Vec::new();

        if let Some(t) = type_filter {
            binds.push(Bind::Text(t.to_string()));
            conditions.push(format!("LOWER(type) = LOWER(${})", binds.len()));
        }

        if let Some(min) = min_level {
            binds.push(Bind::Int(min));
            conditions.push(format!("level >= ${}", binds.len()));
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        sql.push_str(" ORDER BY ");
        sql.push_str(sort.column());
        sql.push(' ');
        sql.push_str(order.keyword());

        Self { sql, binds }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sans_filtre_tri_par_defaut() {
        let q = ListQuery::build(None, None, SortField::parse(None), SortOrder::parse(None));
        assert_eq!(q.sql, "SELECT * FROM caught_pokemon ORDER BY level DESC");
        assert!(q.binds.is_empty());
    }

    #[test]
    fn filtre_type_seul() {
        let q = ListQuery::build(
            Some("fire"),
            None,
            SortField::parse(None),
            SortOrder::parse(None),
        );
        assert_eq!(
            q.sql,
            "SELECT * FROM caught_pokemon WHERE LOWER(type) = LOWER($1) ORDER BY level DESC"
        );
        assert_eq!(q.binds, vec![Bind::Text("fire".into())]);
    }

    #[test]
    fn filtre_min_level_seul() {
        let q = ListQuery::build(
            None,
            Some(10),
            SortField::parse(None),
            SortOrder::parse(None),
        );
        assert_eq!(
            q.sql,
            "SELECT * FROM caught_pokemon WHERE level >= $1 ORDER BY level DESC"
        );
        assert_eq!(q.binds, vec![Bind::Int(10)]);
    }

    #[test]
    fn filtres_combines_et_parametres_alignes() {
        let q = ListQuery::build(
            Some("water"),
            Some(25),
            SortField::parse(Some("name")),
            SortOrder::parse(Some("asc")),
        );
        assert_eq!(
            q.sql,
            "SELECT * FROM caught_pokemon WHERE LOWER(type) = LOWER($1) AND level >= $2 ORDER BY name ASC"
        );
        assert_eq!(q.binds, vec![Bind::Text("water".into()), Bind::Int(25)]);
    }

    #[test]
    fn tri_insensible_a_la_casse() {
        assert_eq!(SortField::parse(Some("NAME")), SortField::Name);
        assert_eq!(SortOrder::parse(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("Desc")), SortOrder::Desc);
    }

    #[test]
    fn valeurs_hors_liste_blanche_retombent_sur_les_defauts() {
        // une tentative d'injection via sort/order n'atteint jamais le SQL
        let q = ListQuery::build(
            None,
            None,
            SortField::parse(Some("level; DROP TABLE caught_pokemon")),
            SortOrder::parse(Some("asc; --")),
        );
        assert_eq!(q.sql, "SELECT * FROM caught_pokemon ORDER BY level DESC");
    }
}
