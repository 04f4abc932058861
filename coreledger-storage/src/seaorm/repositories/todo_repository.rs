use crate::seaorm::{
    connection::DatabaseConnection,
    entities::{ToDoActiveModel, ToDoColumn, ToDos},
};
use async_trait::async_trait;
use coreledger_core::{FaultResult, ToDo};
use coreledger_interfaces::ToDoRepository;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder};

/// SeaORM-backed todo storage
#[derive(Clone)]
pub struct SeaOrmToDoRepository {
    db: DatabaseConnection,
}

impl SeaOrmToDoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ToDoRepository for SeaOrmToDoRepository {
    async fn find_all(&self) -> FaultResult<Vec<ToDo>> {
        let query = ToDos::find()
            .order_by_desc(ToDoColumn::CreatedAt)
            .order_by_desc(ToDoColumn::Id)
            .all(self.db.get_connection());
        let todos = self.db.run("find_todos", query).await?;
        Ok(todos.into_iter().map(ToDo::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> FaultResult<Option<ToDo>> {
        let query = ToDos::find_by_id(id).one(self.db.get_connection());
        let todo = self.db.run("find_todo", query).await?;
        Ok(todo.map(ToDo::from))
    }

    async fn create(&self, todo: ToDo) -> FaultResult<ToDo> {
        let insert = ToDoActiveModel::from(&todo).insert(self.db.get_connection());
        let model = self.db.run("create_todo", insert).await?;
        Ok(model.into())
    }

    async fn update(&self, todo: ToDo) -> FaultResult<ToDo> {
        let update = ToDoActiveModel::from(&todo).update(self.db.get_connection());
        let model = self.db.run("update_todo", update).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> FaultResult<bool> {
        let delete = ToDos::delete_by_id(id).exec(self.db.get_connection());
        let result = self.db.run("delete_todo", delete).await?;
        Ok(result.rows_affected > 0)
    }
}
