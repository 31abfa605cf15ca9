//! Navigation bar.

use crate::route::Route;

pub const APP_TITLE: &str = "People Management";

/// One entry of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// Stateless title bar: brand link plus the list/add links, with the link
/// whose path equals the current path marked active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navbar<'a> {
    current_path: &'a str,
}

impl<'a> Navbar<'a> {
    pub fn new(current_path: &'a str) -> Self {
        Self { current_path }
    }

    pub fn links(&self) -> Vec<NavLink> {
        [("People List", Route::List), ("Add Person", Route::Add)]
            .into_iter()
            .map(|(label, route)| {
                let href = route.path();
                let active = href == self.current_path;
                NavLink { label, href, active }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::from(r#"<nav class="navbar">"#);
        out.push_str(&format!(
            r#"<div class="navbar-brand"><a href="{}">{}</a></div>"#,
            Route::List.path(),
            APP_TITLE
        ));
        out.push_str(r#"<div class="navbar-menu">"#);
        for link in self.links() {
            let class = if link.active { "active" } else { "" };
            out.push_str(&format!(
                r#"<a href="{}" class="{}">{}</a>"#,
                link.href, class, link.label
            ));
        }
        out.push_str("</div></nav>");
        out
    }
}
