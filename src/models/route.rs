//! Hash-based routing for the site.

/// Application routes, one per page.
///
/// URL format: `#/members`, `#/projects`, `#/add-blog`, ... An empty or
/// unrecognized hash falls back to [`Route::Home`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Landing page: `#/` or empty hash
    Home,
    Members,
    Projects,
    Gallery,
    Blogs,
    Login,
    AddMember,
    AddProject,
    AddImage,
    AddBlog,
}

impl Route {
    /// Parse a URL hash into a Route.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "" => Self::Home,
            "members" => Self::Members,
            "projects" => Self::Projects,
            "gallery" => Self::Gallery,
            "blogs" => Self::Blogs,
            "login" => Self::Login,
            "add-member" => Self::AddMember,
            "add-project" => Self::AddProject,
            "add-image" => Self::AddImage,
            "add-blog" => Self::AddBlog,
            _ => Self::Home,
        }
    }

    /// Convert a Route to a URL hash.
    pub fn to_hash(&self) -> String {
        let path = match self {
            Self::Home => "",
            Self::Members => "members",
            Self::Projects => "projects",
            Self::Gallery => "gallery",
            Self::Blogs => "blogs",
            Self::Login => "login",
            Self::AddMember => "add-member",
            Self::AddProject => "add-project",
            Self::AddImage => "add-image",
            Self::AddBlog => "add-blog",
        };
        format!("#/{}", path)
    }

    /// Whether this route requires a signed-in session.
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::AddMember | Self::AddProject | Self::AddImage | Self::AddBlog
        )
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route by setting the URL hash.
    ///
    /// Setting the hash fires `hashchange`, which the router listens for, so
    /// this is the single programmatic navigation path.
    pub fn navigate(&self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&self.to_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/members"), Route::Members);
        assert_eq!(Route::from_hash("#/projects/"), Route::Projects);
        assert_eq!(Route::from_hash("#/add-blog"), Route::AddBlog);
        // Unknown paths fall back to Home.
        assert_eq!(Route::from_hash("#/no-such-page"), Route::Home);
    }

    #[test]
    fn test_round_trip() {
        for route in [
            Route::Home,
            Route::Members,
            Route::Projects,
            Route::Gallery,
            Route::Blogs,
            Route::Login,
            Route::AddMember,
            Route::AddProject,
            Route::AddImage,
            Route::AddBlog,
        ] {
            assert_eq!(Route::from_hash(&route.to_hash()), route);
        }
    }

    #[test]
    fn test_auth_gating() {
        assert!(Route::AddProject.requires_auth());
        assert!(!Route::Projects.requires_auth());
        assert!(!Route::Login.requires_auth());
    }
}
