//! Client views and the route guard.

use std::fmt;

/// A view the client can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Sign-in form. The only public view.
    #[default]
    Login,
    /// Landing page after sign-in.
    Dashboard,
    /// User management.
    Users,
    /// Access point management.
    AccessPoints,
    /// The signed-in user's profile.
    Profile,
}

impl Route {
    /// URL path of the view.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Users => "/users",
            Self::AccessPoints => "/access-points",
            Self::Profile => "/profile",
        }
    }

    /// Resolves a URL path to a view.
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "/login" => Some(Self::Login),
            "" => Some(Self::Dashboard),
            "/users" => Some(Self::Users),
            "/access-points" => Some(Self::AccessPoints),
            "/profile" => Some(Self::Profile),
            _ => None,
        }
    }

    /// Whether the view requires an authenticated session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Self::Login)
    }

    /// The view actually shown when navigating to `self`.
    pub fn guard(self, authenticated: bool) -> Self {
        if self.is_protected() && !authenticated {
            Self::Login
        } else {
            self
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
