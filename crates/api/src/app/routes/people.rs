//! JSON API over the five access-layer operations.
//!
//! Payloads go through the same field rules and normalization as the
//! browser form before they reach the access layer. Missing or `null`
//! fields count as empty, so they surface as field errors; bodies that
//! are not JSON objects at all get the `{"error","message"}` shape.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use roster_people::{NewPerson, Person, PersonForm};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_people).post(create_person))
        .route("/:id", get(get_person).put(update_person).delete(delete_person))
}

pub async fn list_people(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.people().list().await {
        Ok(items) => (StatusCode::OK, Json(dto::PersonListResponse { items })).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn get_person(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_person_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.people().get(id).await {
        Ok(Some(person)) => (StatusCode::OK, Json(person)).into_response(),
        Ok(None) => {
            errors::json_error(StatusCode::NOT_FOUND, "not_found", format!("person {id} not found"))
        }
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn create_person(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<PersonForm>, JsonRejection>,
) -> axum::response::Response {
    let data = match read_payload(payload) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.people().create(data).await {
        Ok(person) => (StatusCode::CREATED, Json(person)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn update_person(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    payload: Result<Json<PersonForm>, JsonRejection>,
) -> axum::response::Response {
    let id = match errors::parse_person_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let data = match read_payload(payload) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.people().update(Person::with_id(id, data)).await {
        Ok(person) => (StatusCode::OK, Json(person)).into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

pub async fn delete_person(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match errors::parse_person_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    match services.people().delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::access_error_to_response(e),
    }
}

fn read_payload(
    payload: Result<Json<PersonForm>, JsonRejection>,
) -> Result<NewPerson, axum::response::Response> {
    let Json(form) = payload.map_err(errors::json_rejection)?;
    form.to_new_person().map_err(errors::validation_error)
}
