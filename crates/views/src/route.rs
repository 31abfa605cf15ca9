use roster_core::PersonId;

/// A page of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Add,
    Edit(PersonId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/people".to_string(),
            Route::Add => "/people/add".to_string(),
            Route::Edit(id) => format!("/people/edit/{}", id),
        }
    }

    /// Match a request path against the known pages.
    ///
    /// A trailing slash is tolerated and an edit path must carry a numeric
    /// id. The server redirects such paths to [`Route::path`].
    pub fn parse(path: &str) -> Option<Route> {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        match path {
            "/people" => Some(Route::List),
            "/people/add" => Some(Route::Add),
            _ => path
                .strip_prefix("/people/edit/")
                .and_then(|id| id.parse().ok())
                .map(Route::Edit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_back_to_routes() {
        for route in [Route::List, Route::Add, Route::Edit(PersonId::new(12))] {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn unknown_or_malformed_paths_do_not_match() {
        assert_eq!(Route::parse("/"), None);
        assert_eq!(Route::parse("/people/edit/"), None);
        assert_eq!(Route::parse("/people/edit/abc"), None);
        assert_eq!(Route::parse("/people/remove/1"), None);
    }

    #[test]
    fn non_canonical_paths_map_to_canonical_routes() {
        let route = Route::parse("/people/edit/007");
        assert_eq!(route, Some(Route::Edit(PersonId::new(7))));
        assert_eq!(route.map(|r| r.path()).as_deref(), Some("/people/edit/7"));
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::parse("/people/"), Some(Route::List));
        assert_eq!(Route::parse("/people/edit/3/"), Some(Route::Edit(PersonId::new(3))));
    }
}
