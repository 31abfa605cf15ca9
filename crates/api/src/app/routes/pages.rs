//! Browser pages: list, add/edit form, delete confirmation.
//!
//! Handlers drive the view state machines through one access-layer round
//! trip and answer with the rendered page, or with a 303 redirect once a
//! mutation succeeded.

use std::sync::Arc;

use axum::{
    extract::{Extension, Form, OriginalUri, Path},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use roster_core::PersonId;
use roster_people::PersonForm;
use roster_views::{form, html, FormMode, FormView, ListView, Route};

use crate::app::errors::html_page;
use crate::app::services::AppServices;

pub async fn root() -> Redirect {
    Redirect::to(&Route::List.path())
}

pub async fn list_page(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let view = ListView::mount(services.people()).await;
    let status = if view.error().is_some() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };
    render_list(status, &view)
}

pub async fn confirm_delete_page(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found().await;
    };
    let mut view = ListView::mount(services.people()).await;
    view.request_delete(id);
    render_list(StatusCode::OK, &view)
}

pub async fn delete_submit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found().await;
    };
    let mut view = ListView::mount(services.people()).await;
    let known = view.people().iter().any(|p| p.id == id);

    view.request_delete(id);
    if view.confirm_delete(services.people()).await {
        return Redirect::to(&Route::List.path()).into_response();
    }

    let status = if known {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::NOT_FOUND
    };
    render_list(status, &view)
}

pub async fn add_page(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let view = FormView::mount(services.people(), FormMode::Create).await;
    render_form(StatusCode::OK, &view)
}

pub async fn add_submit(
    Extension(services): Extension<Arc<AppServices>>,
    Form(values): Form<PersonForm>,
) -> Response {
    let view = FormView::with_values(FormMode::Create, values);
    submit(services, view).await
}

pub async fn edit_page(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found().await;
    };
    let view = FormView::mount(services.people(), FormMode::Edit(id)).await;
    let status = match view.error() {
        None => StatusCode::OK,
        Some(form::NOT_FOUND) => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    render_form(status, &view)
}

pub async fn edit_submit(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Form(values): Form<PersonForm>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found().await;
    };
    let view = FormView::with_values(FormMode::Edit(id), values);
    submit(services, view).await
}

/// Requests no route matched. A known page reached through a non-canonical
/// path (trailing slash, padded id) is redirected to its canonical path.
pub async fn fallback(OriginalUri(uri): OriginalUri) -> Response {
    match Route::parse(uri.path()) {
        Some(route) if route.path() != uri.path() => {
            Redirect::permanent(&route.path()).into_response()
        }
        _ => not_found().await,
    }
}

pub async fn not_found() -> Response {
    html_page(
        StatusCode::NOT_FOUND,
        "Page not found",
        "",
        &format!(
            r#"<h1>Page not found</h1>{}<p><a href="{}">Back to the people list</a></p>"#,
            html::error_message("The page you requested does not exist."),
            Route::List.path()
        ),
    )
}

async fn submit(services: Arc<AppServices>, mut view: FormView) -> Response {
    if let Some(next) = view.submit(services.people()).await {
        return Redirect::to(&next.path()).into_response();
    }
    let status = if !view.errors().is_empty() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else if view.error() == Some(form::NOT_FOUND) {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    render_form(status, &view)
}

fn parse_id(raw: &str) -> Option<PersonId> {
    raw.parse().ok()
}

fn render_list(status: StatusCode, view: &ListView) -> Response {
    html_page(status, "People List", &Route::List.path(), &view.render())
}

fn render_form(status: StatusCode, view: &FormView) -> Response {
    let title = if view.mode().is_edit() { "Edit Person" } else { "Add Person" };
    html_page(status, title, &view.mode().route().path(), &view.render())
}
