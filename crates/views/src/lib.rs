//! `roster-views`
//!
//! Browser views as explicit state machines plus their HTML rendering.
//!
//! Each view holds its own `loading` / `error` / data state and moves
//! between states through discrete transitions after an access-layer call
//! resolves. Rendering is a pure function of that state, so the HTTP layer
//! only drives transitions and ships the resulting markup.

pub mod form;
pub mod html;
pub mod list;
pub mod nav;
pub mod route;

pub use form::{FormMode, FormView, Submission};
pub use list::ListView;
pub use nav::{NavLink, Navbar, APP_TITLE};
pub use route::Route;

#[cfg(test)]
mod testing;
