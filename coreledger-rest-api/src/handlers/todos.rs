//! To-do item endpoints

use axum::{extract::State, http::StatusCode, Json};
use coreledger_api_types::{CreateToDoRequest, ToDoDto, UpdateToDoRequest};
use coreledger_core::{ClassifiedFault, ToDo};
use coreledger_web::{ApiResult, IdPath, ValidatedJson};
use tracing::info;

use crate::context::ToDosContext;

/// List all to-do items, newest first
pub async fn list_todos(State(ctx): State<ToDosContext>) -> ApiResult<Json<Vec<ToDoDto>>> {
    let todos = ctx.repositories.todo_repository().find_all().await?;
    Ok(Json(todos.into_iter().map(ToDoDto::from).collect()))
}

/// Get a specific to-do item by ID
pub async fn get_todo(State(ctx): State<ToDosContext>, IdPath(id): IdPath) -> ApiResult<Json<ToDoDto>> {
    let todo = ctx
        .repositories
        .todo_repository()
        .find_by_id(id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("ToDo", id))?;

    Ok(Json(ToDoDto::from(todo)))
}

pub async fn create_todo(
    State(ctx): State<ToDosContext>,
    ValidatedJson(request): ValidatedJson<CreateToDoRequest>,
) -> ApiResult<(StatusCode, Json<ToDoDto>)> {
    let created = ctx
        .repositories
        .todo_repository()
        .create(ToDo::create(&request.description)?)
        .await?;
    info!(todo_id = created.id, "Created to-do item");

    Ok((StatusCode::CREATED, Json(ToDoDto::from(created))))
}

/// Update the description and completion state of a to-do item
pub async fn update_todo(
    State(ctx): State<ToDosContext>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateToDoRequest>,
) -> ApiResult<StatusCode> {
    let repo = ctx.repositories.todo_repository();
    let mut todo = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ClassifiedFault::not_found("ToDo", id))?;

    todo.update_description(&request.description)?;
    todo.set_completed(request.is_completed)?;
    repo.update(todo).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_todo(State(ctx): State<ToDosContext>, IdPath(id): IdPath) -> ApiResult<StatusCode> {
    if !ctx.repositories.todo_repository().delete(id).await? {
        return Err(ClassifiedFault::not_found("ToDo", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
