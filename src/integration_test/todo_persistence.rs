use super::test_util::prepare_db_and_test;
use crate::domain::todo::driving_ports::{TodoError, TodoPort};
use crate::domain::todo::{TodoContent, TodoService};
use crate::persistence::ExternalConnectivity;
use crate::persistence::db_todo_driven_ports::{DbTodoReader, DbTodoWriter};
use chrono::Local;
use speculoos::prelude::*;

fn content(title: &str, description: &str) -> TodoContent {
    TodoContent {
        title: title.to_owned(),
        description: description.to_owned(),
    }
}

#[test]
#[cfg_attr(not(feature = "integration_test"), ignore)]
fn created_todo_round_trips() {
    prepare_db_and_test(|db| async move {
        let mut ext_cxn = ExternalConnectivity::new(db);
        let service = TodoService {};

        let created = service
            .create_todo(&content("test", "test"), &mut ext_cxn, &DbTodoWriter)
            .await
            .expect("create should succeed");
        assert_that!(created.id).is_some();
        assert_eq!(Local::now().date_naive(), created.created_at);

        let id = created.id.clone().unwrap_or_default();
        let fetched = service.todo_by_id(&id, &mut ext_cxn, &DbTodoReader).await;
        assert_that!(fetched).is_ok_containing(created);
    });
}

#[test]
#[cfg_attr(not(feature = "integration_test"), ignore)]
fn lists_every_todo() {
    prepare_db_and_test(|db| async move {
        let mut ext_cxn = ExternalConnectivity::new(db);
        let service = TodoService {};

        let empty = service.list_todos(&mut ext_cxn, &DbTodoReader).await;
        assert_that!(empty).is_ok().is_empty();

        for title in ["Buy milk", "Walk the dog"] {
            service
                .create_todo(&content(title, ""), &mut ext_cxn, &DbTodoWriter)
                .await
                .expect("create should succeed");
        }

        let todos = service.list_todos(&mut ext_cxn, &DbTodoReader).await;
        assert_that!(todos).is_ok().has_length(2);
    });
}

#[test]
#[cfg_attr(not(feature = "integration_test"), ignore)]
fn update_keeps_id_and_creation_date() {
    prepare_db_and_test(|db| async move {
        let mut ext_cxn = ExternalConnectivity::new(db);
        let service = TodoService {};

        let created = service
            .create_todo(&content("first", "first"), &mut ext_cxn, &DbTodoWriter)
            .await
            .expect("create should succeed");
        let id = created.id.clone().unwrap_or_default();

        let updated = service
            .update_todo(&id, &content("second", "second"), &mut ext_cxn, &DbTodoReader, &DbTodoWriter)
            .await
            .expect("update should succeed");
        assert_eq!(created.id, updated.id);
        assert_eq!(created.created_at, updated.created_at);
        assert_eq!("second", updated.title);

        let fetched = service.todo_by_id(&id, &mut ext_cxn, &DbTodoReader).await;
        assert_that!(fetched).is_ok_containing(updated);
    });
}

#[test]
#[cfg_attr(not(feature = "integration_test"), ignore)]
fn deleted_todo_is_gone() {
    prepare_db_and_test(|db| async move {
        let mut ext_cxn = ExternalConnectivity::new(db);
        let service = TodoService {};

        let created = service
            .create_todo(&content("test", ""), &mut ext_cxn, &DbTodoWriter)
            .await
            .expect("create should succeed");
        let id = created.id.clone().unwrap_or_default();

        let deleted = service
            .delete_todo(&id, &mut ext_cxn, &DbTodoReader, &DbTodoWriter)
            .await;
        assert_that!(deleted).is_ok_containing(format!("Deleted todo with id {id}"));

        let deleted_again = service
            .delete_todo(&id, &mut ext_cxn, &DbTodoReader, &DbTodoWriter)
            .await;
        let Err(TodoError::NotFound(_)) = deleted_again else {
            panic!("Expected the second delete to fail, got {:#?}", deleted_again);
        };
    });
}
