use sea_orm::{
    entity::prelude::*, sea_query::Expr, ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Id carried by an entry that has not been persisted yet.
pub const UNASSIGNED_ID: i32 = 0;

/// Version a freshly inserted row starts at.
pub const INITIAL_VERSION: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "diary_entry")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created: DateTimeWithTimeZone,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// The user-owned columns; everything except `id` and `version`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryFields {
    pub title: String,
    pub content: String,
    pub created: DateTimeWithTimeZone,
}

/// All rows ordered by id, which is insertion order for a serial key.
pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    let rows = Entity::find().order_by_asc(Column::Id).all(db).await?;
    Ok(rows)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<Model>, errors::ModelError> {
    let row = Entity::find_by_id(id).one(db).await?;
    Ok(row)
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let n = Entity::find_by_id(id).count(db).await?;
    Ok(n > 0)
}

/// Insert a new row; the database assigns the id.
pub async fn insert<C: ConnectionTrait>(db: &C, fields: EntryFields) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        title: Set(fields.title),
        content: Set(fields.content),
        created: Set(fields.created),
        version: Set(INITIAL_VERSION),
    };
    let created = am.insert(db).await?;
    Ok(created)
}

/// Replace the user columns of row `id` only if its version still equals
/// `expected_version`. Returns `None` when no row matched, either because it
/// is gone or because another writer bumped the version first.
pub async fn replace_if_version<C: ConnectionTrait>(
    db: &C,
    id: i32,
    expected_version: i32,
    fields: EntryFields,
) -> Result<Option<Model>, errors::ModelError> {
    let mut rows = Entity::update_many()
        .col_expr(Column::Title, Expr::value(fields.title))
        .col_expr(Column::Content, Expr::value(fields.content))
        .col_expr(Column::Created, Expr::value(fields.created))
        .col_expr(Column::Version, Expr::col(Column::Version).add(1))
        .filter(Column::Id.eq(id))
        .filter(Column::Version.eq(expected_version))
        .exec_with_returning(db)
        .await?;
    Ok(rows.pop())
}
