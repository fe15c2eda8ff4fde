use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoPort;
use crate::external_connections::ExternalConnectivity;
use crate::persistence::db_todo_driven_ports::{DbTodoReader, DbTodoWriter};
use crate::routing_utils::{ApiError, Json};
use crate::{AppState, SharedData, domain, dto};
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(list_todos, todo_by_id, create_todo, update_todo, delete_todo),
    tags((name = "Todos", description = "Create, read, update and delete todos"))
)]
/// Defines the OpenAPI documentation for the todo API
pub struct TodoApi;
/// Constant used to group todo endpoints in OpenAPI documentation
pub const TODO_API_GROUP: &str = "Todos";

/// Builds a router for everything under "/api/todos"
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route(
            "/",
            get(|State(app_state): AppState| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};

                list_todos(&mut ext_cxn, &todo_service, &DbTodoReader).await
            })
            .post(
                |State(app_state): AppState, Json(input): Json<dto::TodoInput>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    create_todo(input, &mut ext_cxn, &todo_service, &DbTodoWriter).await
                },
            ),
        )
        .route(
            "/:id",
            get(
                |State(app_state): AppState, Path(id): Path<String>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    todo_by_id(&id, &mut ext_cxn, &todo_service, &DbTodoReader).await
                },
            )
            .put(
                |State(app_state): AppState,
                 Path(id): Path<String>,
                 Json(input): Json<dto::TodoInput>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    update_todo(
                        &id,
                        input,
                        &mut ext_cxn,
                        &todo_service,
                        &DbTodoReader,
                        &DbTodoWriter,
                    )
                    .await
                },
            )
            .delete(
                |State(app_state): AppState, Path(id): Path<String>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};

                    delete_todo(&id, &mut ext_cxn, &todo_service, &DbTodoReader, &DbTodoWriter)
                        .await
                },
            ),
        )
}

#[utoipa::path(
    get,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    responses(
        (status = 200, description = "Every stored todo", body = [dto::Todo]),
        (status = 500, description = "The todo store could not be reached", body = crate::routing_utils::ErrorMessage),
    ),
)]
#[tracing::instrument(skip_all)]
/// Retrieves every todo in the store
async fn list_todos(
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_read: &impl TodoReader,
) -> Result<Json<Vec<dto::Todo>>, ApiError> {
    info!("Listing todos");
    let todos = todo_service.list_todos(&mut *ext_cxn, todo_read).await?;

    Ok(Json(todos.into_iter().map(dto::Todo::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    tag = TODO_API_GROUP,
    params(("id" = String, Path, description = "Id of the todo")),
    responses(
        (status = 200, description = "The requested todo", body = dto::Todo),
        (status = 404, description = "No todo has that id", body = crate::routing_utils::ErrorMessage),
        (status = 500, description = "The todo store could not be reached", body = crate::routing_utils::ErrorMessage),
    ),
)]
#[tracing::instrument(skip(ext_cxn, todo_service, todo_read))]
/// Retrieves a single todo
async fn todo_by_id(
    id: &str,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_read: &impl TodoReader,
) -> Result<Json<dto::Todo>, ApiError> {
    info!("Fetching todo");
    let todo = todo_service.todo_by_id(id, &mut *ext_cxn, todo_read).await?;

    Ok(Json(dto::Todo::from(todo)))
}

#[utoipa::path(
    post,
    path = "/api/todos",
    tag = TODO_API_GROUP,
    request_body = dto::TodoInput,
    responses(
        (status = 201, description = "The todo was created", body = dto::Todo),
        (status = 400, description = "The input was invalid", body = crate::routing_utils::ErrorMessage),
        (status = 500, description = "The todo store could not be reached", body = crate::routing_utils::ErrorMessage),
    ),
)]
#[tracing::instrument(skip_all)]
/// Creates a todo. The input is validated before the todo service is involved.
async fn create_todo(
    input: dto::TodoInput,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_write: &impl TodoWriter,
) -> Result<(StatusCode, Json<dto::Todo>), ApiError> {
    let content = input.into_content()?;
    info!(title = %content.title, "Creating todo");

    let created = todo_service
        .create_todo(&content, &mut *ext_cxn, todo_write)
        .await?;

    Ok((StatusCode::CREATED, Json(dto::Todo::from(created))))
}

#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    tag = TODO_API_GROUP,
    params(("id" = String, Path, description = "Id of the todo")),
    request_body = dto::TodoInput,
    responses(
        (status = 200, description = "The todo was updated", body = dto::Todo),
        (status = 400, description = "The input was invalid", body = crate::routing_utils::ErrorMessage),
        (status = 404, description = "No todo has that id", body = crate::routing_utils::ErrorMessage),
        (status = 500, description = "The todo store could not be reached", body = crate::routing_utils::ErrorMessage),
    ),
)]
#[tracing::instrument(skip(input, ext_cxn, todo_service, todo_read, todo_write))]
/// Replaces the title and description of a todo
async fn update_todo(
    id: &str,
    input: dto::TodoInput,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_read: &impl TodoReader,
    todo_write: &impl TodoWriter,
) -> Result<Json<dto::Todo>, ApiError> {
    let content = input.into_content()?;
    info!(title = %content.title, "Updating todo");

    let updated = todo_service
        .update_todo(id, &content, &mut *ext_cxn, todo_read, todo_write)
        .await?;

    Ok(Json(dto::Todo::from(updated)))
}

#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    tag = TODO_API_GROUP,
    params(("id" = String, Path, description = "Id of the todo")),
    responses(
        (status = 200, description = "Confirmation that the todo was deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "No todo has that id", body = crate::routing_utils::ErrorMessage),
        (status = 500, description = "The todo store could not be reached", body = crate::routing_utils::ErrorMessage),
    ),
)]
#[tracing::instrument(skip(ext_cxn, todo_service, todo_read, todo_write))]
/// Deletes a todo, responding with a plain-text confirmation
async fn delete_todo(
    id: &str,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_read: &impl TodoReader,
    todo_write: &impl TodoWriter,
) -> Result<String, ApiError> {
    info!("Deleting todo");
    let confirmation = todo_service
        .delete_todo(id, &mut *ext_cxn, todo_read, todo_write)
        .await?;

    Ok(confirmation)
}
