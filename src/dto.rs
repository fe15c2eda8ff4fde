use std::borrow::Cow;
use thiserror::Error;
use utoipa::OpenApi;
use validator::ValidationError;

mod todo;

pub use todo::*;

/// Collects the schemas of every DTO so they can be merged into the OpenAPI documentation
#[derive(OpenApi)]
#[openapi(components(schemas(Todo, TodoInput, crate::routing_utils::ErrorMessage)))]
pub struct OpenApiSchemas;

/// A single field constraint an inbound DTO failed
#[derive(Debug)]
pub struct FieldViolation {
    pub field: &'static str,
    pub error: ValidationError,
}

impl FieldViolation {
    pub fn new(field: &'static str, code: &'static str, message: &'static str) -> Self {
        let mut error = ValidationError::new(code);
        error.message = Some(Cow::Borrowed(message));
        FieldViolation { field, error }
    }

    /// The user-facing text for this violation, falling back to the validator code
    pub fn message(&self) -> Cow<'static, str> {
        match self.error.message {
            Some(ref message) => message.clone(),
            None => Cow::Owned(format!("{} is invalid ({})", self.field, self.error.code)),
        }
    }
}

/// Every constraint an inbound DTO failed, in the order its fields are declared
#[derive(Debug, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct InvalidInput(pub Vec<FieldViolation>);

impl InvalidInput {
    /// The violation reported back to API clients, which is the first one found
    pub fn first(&self) -> Option<&FieldViolation> {
        self.0.first()
    }
}

/// Validation for DTOs whose rules have to be checked in a fixed order. [validator::Validate]
/// reports failures in a map, which loses track of which field was checked first.
pub trait OrderedValidate {
    /// Checks every field in declaration order and returns each violation found
    fn violations(&self) -> Vec<FieldViolation>;

    fn validate_ordered(&self) -> Result<(), InvalidInput> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(InvalidInput(violations))
        }
    }
}
