use std::{fmt, str::FromStr};

use sea_orm::{entity::prelude::*, ActiveValue::Unchanged, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "administrator")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub email: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password: String,
    pub profile: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Administrator role. Stored as its literal name in `profile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    Adm,
    Editor,
}

impl Profile {
    pub const ALL: [Profile; 2] = [Profile::Adm, Profile::Editor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Adm => "Adm",
            Profile::Editor => "Editor",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Exact, case-sensitive match on the literal names.
impl FromStr for Profile {
    type Err = errors::ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| errors::ModelError::Validation(format!("unknown profile: {s}")))
    }
}

impl Model {
    /// Parsed profile; `None` for rows that bypassed validation.
    pub fn profile(&self) -> Option<Profile> { self.profile.parse().ok() }
}

pub async fn create(db: &DatabaseConnection, email: &str, password_hash: &str, profile: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        email: Set(email.to_string()),
        password: Set(password_hash.to_string()),
        profile: Set(profile.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every column of the row keyed by `model.id`.
pub async fn update(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(model.id),
        email: Set(model.email),
        password: Set(model.password),
        profile: Set(model.profile),
    };
    Ok(am.update(db).await?)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

/// All rows with exactly this email, oldest first.
pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::Email.eq(email))
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_parsing_is_exact() {
        assert_eq!("Adm".parse::<Profile>().unwrap(), Profile::Adm);
        assert_eq!("Editor".parse::<Profile>().unwrap(), Profile::Editor);
        assert!("adm".parse::<Profile>().is_err());
        assert!("Admin".parse::<Profile>().is_err());
        assert!("".parse::<Profile>().is_err());
    }

    #[test]
    fn serialized_model_never_carries_password() {
        let m = Model { id: 7, email: "a@b.c".into(), password: "$argon2id$secret".into(), profile: "Adm".into() };
        let v = serde_json::to_value(&m).unwrap();
        assert!(v.get("password").is_none());
        assert_eq!(v["email"], "a@b.c");
    }
}
