use sea_orm::{
    entity::prelude::*,
    sea_query::{BinOper, Expr, Func, SimpleExpr},
    ActiveValue::Unchanged,
    DatabaseConnection, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Oldest manufacture year accepted on the validated path.
pub const MIN_YEAR: i32 = 1950;

const LIKE_ESCAPE: char = '!';

fn escape_like(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len());
    for c in needle.chars() {
        if c == LIKE_ESCAPE || c == '%' || c == '_' {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}

/// `LOWER(col) LIKE LOWER('%needle%') ESCAPE '!'`, wildcards in `needle` matched literally.
///
/// Both sides fold in the database so they agree on what `LOWER` covers
/// (SQLite folds ASCII only).
fn contains_ci(col: Column, needle: &str) -> SimpleExpr {
    let pattern = SimpleExpr::from(Func::lower(Expr::val(format!("%{}%", escape_like(needle)))))
        .binary(BinOper::Escape, SimpleExpr::Constant(LIKE_ESCAPE.into()));
    Expr::expr(Func::lower(Expr::col((Entity, col)))).binary(BinOper::Like, pattern)
}

/// Vehicles filtered by optional name/brand substrings (case-insensitive, ANDed), ordered by id.
/// Empty filters are ignored.
pub fn search(name: Option<&str>, brand: Option<&str>) -> Select<Entity> {
    let mut query = Entity::find();
    if let Some(n) = name.filter(|n| !n.is_empty()) {
        query = query.filter(contains_ci(Column::Name, n));
    }
    if let Some(b) = brand.filter(|b| !b.is_empty()) {
        query = query.filter(contains_ci(Column::Brand, b));
    }
    query.order_by_asc(Column::Id)
}

pub async fn create(db: &DatabaseConnection, name: &str, brand: &str, year: i32) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        name: Set(name.to_string()),
        brand: Set(brand.to_string()),
        year: Set(year),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite every column of the row keyed by `model.id`.
pub async fn update(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name),
        brand: Set(model.brand),
        year: Set(model.year),
    };
    Ok(am.update(db).await?)
}

/// Returns whether a row was removed.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_like_marks_wildcards() {
        assert_eq!(escape_like("civic"), "civic");
        assert_eq!(escape_like("50%_off!"), "50!%!_off!!");
    }
}
