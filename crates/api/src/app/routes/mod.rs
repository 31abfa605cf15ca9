use axum::{routing::get, Router};

pub mod pages;
pub mod people;
pub mod system;

/// Router for the browser pages and the JSON API.
pub fn router() -> Router {
    Router::new()
        .route("/", get(pages::root))
        .route("/people", get(pages::list_page))
        .route("/people/add", get(pages::add_page).post(pages::add_submit))
        .route("/people/edit/:id", get(pages::edit_page).post(pages::edit_submit))
        .route("/people/:id/delete", get(pages::confirm_delete_page).post(pages::delete_submit))
        .nest("/api/people", people::router())
}
