use super::{FieldViolation, InvalidInput, OrderedValidate};
use crate::domain;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::validate_length;

const TITLE_MIN_CHARS: u64 = 3;
const TITLE_MAX_CHARS: u64 = 255;
const TITLE_REQUIRED: &str = "Title is required";
const TITLE_LENGTH: &str = "Title must be between 3 and 255 characters";

/// DTO for creating or updating a todo via the API
#[derive(Debug, Deserialize, ToSchema)]
#[cfg_attr(test, derive(Serialize))]
pub struct TodoInput {
    #[schema(example = "Buy groceries", min_length = 3, max_length = 255)]
    pub title: Option<String>,
    #[schema(example = "Milk, eggs and bread")]
    pub description: Option<String>,
}

impl OrderedValidate for TodoInput {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        let title = self.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            violations.push(FieldViolation::new("title", "required", TITLE_REQUIRED));
        } else if !validate_length(title, Some(TITLE_MIN_CHARS), Some(TITLE_MAX_CHARS), None) {
            let mut violation = FieldViolation::new("title", "length", TITLE_LENGTH);
            violation.error.add_param(Cow::Borrowed("min"), &TITLE_MIN_CHARS);
            violation.error.add_param(Cow::Borrowed("max"), &TITLE_MAX_CHARS);
            violations.push(violation);
        }

        violations
    }
}

impl TodoInput {
    /// Validates the input and hands back the content the domain works with. A missing
    /// description is stored as an empty one.
    pub fn into_content(self) -> Result<domain::todo::TodoContent, InvalidInput> {
        self.validate_ordered()?;

        Ok(domain::todo::TodoContent {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

/// DTO for a todo returned on the API
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(test, derive(Deserialize, PartialEq, Eq, Debug))]
pub struct Todo {
    #[schema(example = "0b5e8c8e-6d0a-4c8e-9f43-0d1c8d0f5a51")]
    pub id: Option<String>,
    #[schema(example = "Buy groceries")]
    pub title: String,
    #[schema(example = "Milk, eggs and bread")]
    pub description: String,
    #[schema(value_type = String, format = Date, example = "2024-05-21")]
    pub created_at: NaiveDate,
}

impl From<domain::todo::Todo> for Todo {
    fn from(value: domain::todo::Todo) -> Self {
        Todo {
            id: value.id,
            title: value.title,
            description: value.description,
            created_at: value.created_at,
        }
    }
}
