//! Registered site routes
//!
//! The router maps a fixed, enumerable set of paths to one page each.
//! There are no parameters, nested routes, guards or redirects.

use std::fmt;

/// A page registered with the client-side router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Store,
    ShaPhone,
    ShaBook,
    ShaPad,
    ShaWatch,
    Accessories,
    Support,
}

impl Route {
    /// Every registered route, in navigation order
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Store,
        Route::ShaPhone,
        Route::ShaBook,
        Route::ShaPad,
        Route::ShaWatch,
        Route::Accessories,
        Route::Support,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Store => "/store",
            Route::ShaPhone => "/shaphone",
            Route::ShaBook => "/shabook",
            Route::ShaPad => "/shapad",
            Route::ShaWatch => "/shawatch",
            Route::Accessories => "/accessories",
            Route::Support => "/support",
        }
    }

    /// Document title shown in the browser tab
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "ShaVolts",
            Route::Store => "ShaStore - ShaVolts",
            Route::ShaPhone => "ShaPhone - ShaVolts",
            Route::ShaBook => "ShaBook - ShaVolts",
            Route::ShaPad => "ShaPad - ShaVolts",
            Route::ShaWatch => "ShaWatch - ShaVolts",
            Route::Accessories => "ShaAccessories - ShaVolts",
            Route::Support => "ShaSupport - ShaVolts",
        }
    }

    /// Resolve a location pathname to a registered route.
    ///
    /// A single trailing slash is tolerated (`/store/` resolves like `/store`).
    /// Anything else that is not registered yields `None`; link targets such as
    /// `/bag` or `/shacare` are allowed to point nowhere.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Route::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        assert_eq!(Route::from_path("/shawatch/"), Some(Route::ShaWatch));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
    }

    #[test]
    fn test_unregistered_paths_do_not_resolve() {
        assert_eq!(Route::from_path("/bag"), None);
        assert_eq!(Route::from_path("/shacare"), None);
        assert_eq!(Route::from_path("/store/extra"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Route::ALL.iter().map(|r| r.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Route::ALL.len());
    }
}
