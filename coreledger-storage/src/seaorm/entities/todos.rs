use coreledger_core::ToDo;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub description: String,

    pub is_completed: bool,

    pub created_at: ChronoDateTimeUtc,

    pub updated_at: Option<ChronoDateTimeUtc>,

    /// Set while the item is completed
    pub completed_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ToDo {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            description: model.description,
            is_completed: model.is_completed,
            created_at: model.created_at,
            updated_at: model.updated_at,
            completed_at: model.completed_at,
        }
    }
}

impl From<&ToDo> for ActiveModel {
    fn from(todo: &ToDo) -> Self {
        Self {
            id: if todo.id > 0 { Set(todo.id) } else { ActiveValue::NotSet },
            description: Set(todo.description.clone()),
            is_completed: Set(todo.is_completed),
            created_at: Set(todo.created_at),
            updated_at: Set(todo.updated_at),
            completed_at: Set(todo.completed_at),
        }
    }
}
