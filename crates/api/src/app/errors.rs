use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde_json::json;

use roster_core::{FieldErrors, PersonId};
use roster_infra::AccessError;
use roster_views::html;

use crate::app::dto;

pub fn access_error_to_response(err: AccessError) -> axum::response::Response {
    match err {
        AccessError::NotFound(id) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("person {id} not found"))
        }
        AccessError::Domain(e) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "domain_error", e.to_string())
        }
        AccessError::Unavailable(msg) => {
            tracing::error!(error = %msg, "people backend unavailable");
            json_error(StatusCode::SERVICE_UNAVAILABLE, "unavailable", msg)
        }
    }
}

pub fn validation_error(fields: FieldErrors) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(dto::ValidationErrorResponse::new(fields)),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// A request body axum could not read as the expected JSON.
pub fn json_rejection(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

pub fn parse_person_id(s: &str) -> Result<PersonId, axum::response::Response> {
    s.parse::<PersonId>()
        .map_err(|e| json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()))
}

/// A full HTML page with `content` under the navigation bar for `path`.
pub fn html_page(
    status: StatusCode,
    title: &str,
    path: &str,
    content: &str,
) -> axum::response::Response {
    (status, Html(html::document(title, path, content))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::DomainError;

    #[test]
    fn access_errors_map_to_statuses() {
        let status = |e| access_error_to_response(e).status();
        assert_eq!(status(AccessError::NotFound(PersonId::new(3))), StatusCode::NOT_FOUND);
        assert_eq!(
            status(AccessError::Domain(DomainError::invalid_id("x"))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(AccessError::Unavailable("down".to_string())),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
