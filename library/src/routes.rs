use crate::domain::Account;
use std::fmt;
use tracing::debug;

/// Screens the client can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Users,
    UserDetail { id: String },
    NewUser,
    Books,
    Loans,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Users => "/users".to_string(),
            Route::UserDetail { id } => format!("/users/{id}"),
            Route::NewUser => "/users/new".to_string(),
            Route::Books => "/books".to_string(),
            Route::Loans => "/loans".to_string(),
        }
    }

    /// Match a path against the route table. Trailing slashes are ignored and
    /// the bare root lands on the user list.
    pub fn parse(path: &str) -> Option<Route> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["users"] => Some(Route::Users),
            ["login"] => Some(Route::Login),
            ["users", "new"] => Some(Route::NewUser),
            ["users", id] => Some(Route::UserDetail { id: id.to_string() }),
            ["books"] => Some(Route::Books),
            ["loans"] => Some(Route::Loans),
            _ => None,
        }
    }

    /// Every screen except login requires a signed-in account.
    pub fn is_private(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Route actually shown for `requested` given the current account.
    pub fn resolve(requested: Route, account: Option<&Account>) -> Route {
        if requested.is_private() && account.is_none() {
            debug!("No current account, redirecting {} to login", requested);
            return Route::Login;
        }
        requested
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_and_parse_agree() {
        let routes = [
            Route::Login,
            Route::Users,
            Route::UserDetail {
                id: "u1".to_string(),
            },
            Route::NewUser,
            Route::Books,
            Route::Loans,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_edge_cases() {
        assert_eq!(Route::parse("/"), Some(Route::Users));
        assert_eq!(Route::parse("/books/"), Some(Route::Books));
        assert_eq!(Route::parse("/users/new"), Some(Route::NewUser));
        assert_eq!(Route::parse("/users/u1/loans"), None);
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn test_resolve_redirects_without_account() {
        assert_eq!(Route::resolve(Route::Books, None), Route::Login);
        assert_eq!(Route::resolve(Route::Login, None), Route::Login);

        let account = Account {
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
        };
        assert_eq!(Route::resolve(Route::Books, Some(&account)), Route::Books);
    }
}
