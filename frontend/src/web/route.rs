//! Route definitions - domain model.
//!
//! Pure business layer with no DOM dependency: the full set of client routes,
//! URL parsing and printing, and the access rules the router enforces.

use std::fmt::Display;

/// Client-side routes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Landing screen with popular destinations and favorites.
    #[default]
    Home,
    /// Catalogue with category and free-text filtering. Carries the
    /// pre-selected category when entered through a category tile.
    Explore(Option<String>),
    /// Region map of every destination.
    Maps,
    /// Single destination by id.
    Detail(u32),
    Profile,
    Settings,
    Login,
    Register,
}

impl AppRoute {
    /// Parse a `pathname?search` pair. Anything unrecognized — including a
    /// `/detail/` with a malformed id — lands on the home screen; there is
    /// no dedicated not-found page.
    pub fn from_path(path: &str) -> Self {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        match path.trim_end_matches('/') {
            "" => Self::Home,
            "/explore" => Self::Explore(query_param(query, "category")),
            "/maps" => Self::Maps,
            "/profile" => Self::Profile,
            "/settings" => Self::Settings,
            "/login" => Self::Login,
            "/register" => Self::Register,
            other => match other
                .strip_prefix("/detail/")
                .and_then(|id| id.parse::<u32>().ok())
            {
                Some(id) => Self::Detail(id),
                None => Self::Home,
            },
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Explore(None) => "/explore".to_string(),
            Self::Explore(Some(kategori)) => format!("/explore?category={kategori}"),
            Self::Maps => "/maps".to_string(),
            Self::Detail(id) => format!("/detail/{id}"),
            Self::Profile => "/profile".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
        }
    }

    /// Everything except the auth screens requires a session.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }

    /// Auth screens are pointless once signed in.
    pub fn guest_only(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Minimal query-string lookup; values are taken verbatim.
fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}

// =========================================================
// Access rules
// =========================================================

/// Router verdict for one navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Redirect(AppRoute),
}

/// **The route guard.** Evaluated on every navigation, never cached: a guest
/// heading anywhere protected is sent to the login screen, a signed-in user
/// heading to an auth screen is sent home.
pub fn check_access(target: &AppRoute, is_authenticated: bool) -> Access {
    if target.requires_auth() && !is_authenticated {
        return Access::Redirect(AppRoute::Login);
    }
    if target.guest_only() && is_authenticated {
        return Access::Redirect(AppRoute::Home);
    }
    Access::Granted
}

#[cfg(test)]
mod tests;
