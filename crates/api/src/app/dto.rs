use serde::Serialize;

use roster_core::FieldErrors;
use roster_people::Person;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct PersonListResponse {
    pub items: Vec<Person>,
}

#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub error: &'static str,
    pub message: String,
    pub fields: FieldErrors,
}

impl ValidationErrorResponse {
    pub fn new(fields: FieldErrors) -> Self {
        Self {
            error: "validation_error",
            message: format!("validation failed: {}", fields),
            fields,
        }
    }
}
