//! Page shell layout
//!
//! Header and footer render on every location. The body is the resolved
//! page, or nothing for paths the router doesn't know.

use shavolts_core::Route;
use tracing::debug;

/// The page to render for `path`, or `None` for an empty body
pub fn resolve(path: &str) -> Option<Route> {
    let route = Route::from_path(path);
    if route.is_none() {
        debug!("no route for {:?}, rendering empty body", path);
    }
    route
}

/// Browser tab title for `path`
pub fn document_title(path: &str) -> &'static str {
    Route::from_path(path).unwrap_or(Route::Home).title()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_resolves_from_its_own_path() {
        for route in Route::ALL {
            assert_eq!(resolve(route.path()), Some(route));
        }
    }

    #[test]
    fn test_unknown_path_has_no_body() {
        assert_eq!(resolve("/bag"), None);
        assert_eq!(resolve("/shaphone16pro"), None);
    }

    #[test]
    fn test_document_title() {
        assert_eq!(document_title("/shapad"), "ShaPad - ShaVolts");
        assert_eq!(document_title("/nowhere"), "ShaVolts");
    }
}
