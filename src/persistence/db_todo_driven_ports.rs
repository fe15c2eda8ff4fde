use crate::domain;
use crate::domain::todo::Todo;
use crate::external_connections::{ConnectionHandle, ExternalConnectivity};
use anyhow::{Context, Error};
use chrono::NaiveDate;
use sqlx::{FromRow, query, query_as};

pub struct DbTodoReader;

#[derive(FromRow)]
struct TodoRow {
    id: String,
    title: String,
    description: String,
    created_at: NaiveDate,
}

impl From<TodoRow> for domain::todo::Todo {
    fn from(value: TodoRow) -> Self {
        Todo {
            id: Some(value.id),
            title: value.title,
            description: value.description,
            created_at: value.created_at,
        }
    }
}

impl domain::todo::driven_ports::TodoReader for DbTodoReader {
    async fn all_todos(&self, ext_cxn: &mut impl ExternalConnectivity) -> Result<Vec<Todo>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todos: Vec<Todo> = query_as::<_, TodoRow>(
            "SELECT id, title, description, created_at FROM todos",
        )
        .fetch_all(cxn.borrow_connection())
        .await
        .context("trying to fetch all todos")?
        .into_iter()
        .map(Todo::from)
        .collect();

        Ok(todos)
    }

    async fn todo_by_id(
        &self,
        id: &str,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<Option<Todo>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todo = query_as::<_, TodoRow>(
            "SELECT id, title, description, created_at FROM todos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(cxn.borrow_connection())
        .await
        .context("trying to fetch a todo by id")?
        .map(Todo::from);

        Ok(todo)
    }
}

pub struct DbTodoWriter;

impl domain::todo::driven_ports::TodoWriter for DbTodoWriter {
    async fn save_todo(&self, todo: &Todo, ext_cxn: &mut impl ExternalConnectivity) -> Result<Todo, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let saved = match todo.id {
            None => query_as::<_, TodoRow>(
                "INSERT INTO todos(title, description, created_at) VALUES ($1, $2, $3) \
                 RETURNING id, title, description, created_at",
            )
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.created_at)
            .fetch_one(cxn.borrow_connection())
            .await
            .context("trying to insert a new todo")?,

            // Replacing keeps the stored creation date, whatever the caller passed in
            Some(ref id) => query_as::<_, TodoRow>(
                "INSERT INTO todos(id, title, description, created_at) VALUES ($1, $2, $3, $4) \
                 ON CONFLICT (id) DO UPDATE SET title = EXCLUDED.title, description = EXCLUDED.description \
                 RETURNING id, title, description, created_at",
            )
            .bind(id)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.created_at)
            .fetch_one(cxn.borrow_connection())
            .await
            .context("trying to replace a todo")?,
        };

        Ok(Todo::from(saved))
    }

    async fn delete_todo(&self, todo: &Todo, ext_cxn: &mut impl ExternalConnectivity) -> Result<(), Error> {
        // Never saved, so there is nothing to remove
        let Some(ref id) = todo.id else {
            return Ok(());
        };
        let mut cxn = ext_cxn.database_cxn().await?;

        query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to remove a todo from the database")?;

        Ok(())
    }
}
