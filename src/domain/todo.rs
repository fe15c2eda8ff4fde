use crate::external_connections::ExternalConnectivity;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use driven_ports::{TodoReader, TodoWriter};
use driving_ports::{TodoError, TodoPort};

/// A task somebody wants to get done
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Todo {
    /// Assigned by persistence the first time the todo is saved, so it's absent until then
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDate,
}

impl Todo {
    /// Builds a todo which hasn't been saved yet, dated today in the server's local time
    pub fn new(content: &TodoContent) -> Todo {
        Todo {
            id: None,
            title: content.title.clone(),
            description: content.description.clone(),
            created_at: Local::now().date_naive(),
        }
    }

    /// Replaces the editable fields. `id` and `created_at` are never touched after creation.
    fn overwrite_content(&mut self, content: &TodoContent) {
        self.title = content.title.clone();
        self.description = content.description.clone();
    }
}

/// The user-editable part of a todo. Only constructed from input that has passed validation.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TodoContent {
    pub title: String,
    pub description: String,
}

pub mod driven_ports {
    use super::*;
    use std::future::Future;

    pub trait TodoReader: Sync {
        fn all_todos(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> impl Future<Output = Result<Vec<Todo>, anyhow::Error>> + Send;
        fn todo_by_id(
            &self,
            id: &str,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> impl Future<Output = Result<Option<Todo>, anyhow::Error>> + Send;
    }

    pub trait TodoWriter: Sync {
        /// Inserts the todo if it has no id yet and returns it with the id the store assigned.
        /// Otherwise replaces the stored title and description, leaving the creation date alone.
        fn save_todo(
            &self,
            todo: &Todo,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> impl Future<Output = Result<Todo, anyhow::Error>> + Send;
        fn delete_todo(
            &self,
            todo: &Todo,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> impl Future<Output = Result<(), anyhow::Error>> + Send;
    }
}

pub mod driving_ports {
    use super::*;
    use std::future::Future;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("No todo with id {0}")]
        NotFound(String),
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }


    pub trait TodoPort: Sync {
        fn list_todos(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
        ) -> impl Future<Output = Result<Vec<Todo>, TodoError>> + Send;
        fn todo_by_id(
            &self,
            id: &str,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
        ) -> impl Future<Output = Result<Todo, TodoError>> + Send;
        fn create_todo(
            &self,
            content: &TodoContent,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> impl Future<Output = Result<Todo, TodoError>> + Send;
        fn update_todo(
            &self,
            id: &str,
            content: &TodoContent,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> impl Future<Output = Result<Todo, TodoError>> + Send;
        /// Removes a todo and returns a confirmation message naming it
        fn delete_todo(
            &self,
            id: &str,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> impl Future<Output = Result<String, TodoError>> + Send;
    }
}

pub struct TodoService {}

impl TodoPort for TodoService {
    async fn list_todos(
        &self,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Vec<Todo>, TodoError> {
        let todos = todo_read
            .all_todos(&mut *ext_cxn)
            .await
            .context("fetching all todos")?;

        Ok(todos)
    }

    async fn todo_by_id(
        &self,
        id: &str,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Todo, TodoError> {
        todo_read
            .todo_by_id(id, &mut *ext_cxn)
            .await
            .context("looking up a todo by id")?
            .ok_or_else(|| TodoError::NotFound(id.to_owned()))
    }

    async fn create_todo(
        &self,
        content: &TodoContent,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, TodoError> {
        let saved_todo = todo_write
            .save_todo(&Todo::new(content), &mut *ext_cxn)
            .await
            .context("saving a new todo")?;

        Ok(saved_todo)
    }

    async fn update_todo(
        &self,
        id: &str,
        content: &TodoContent,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
        todo_write: &impl TodoWriter,
    ) -> Result<Todo, TodoError> {
        let mut todo = self.todo_by_id(id, &mut *ext_cxn, todo_read).await?;
        todo.overwrite_content(content);

        let saved_todo = todo_write
            .save_todo(&todo, &mut *ext_cxn)
            .await
            .context("saving an updated todo")?;

        Ok(saved_todo)
    }

    async fn delete_todo(
        &self,
        id: &str,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
        todo_write: &impl TodoWriter,
    ) -> Result<String, TodoError> {
        let todo = self.todo_by_id(id, &mut *ext_cxn, todo_read).await?;
        todo_write
            .delete_todo(&todo, &mut *ext_cxn)
            .await
            .context("deleting a todo")?;

        Ok(format!("Deleted todo with id {id}"))
    }
}
