//! Named-route navigation stack

use crate::{Error, Result};

/// Application routes
///
/// Closed set of five named destinations. The string identifiers are the only
/// wire format in the application and are matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Main menu, the navigation root
    MainMenu,
    /// Add contact form
    AddContact,
    /// Read-only contact search
    SearchContact,
    /// Filtered list with immediate per-row delete
    DeleteContact,
    /// Full list with confirm-before-delete
    ListContacts,
}

impl Route {
    /// All routes in menu order
    pub fn all() -> Vec<Self> {
        vec![
            Self::MainMenu,
            Self::AddContact,
            Self::SearchContact,
            Self::DeleteContact,
            Self::ListContacts,
        ]
    }

    /// String identifier for this route
    pub fn id(&self) -> &'static str {
        match self {
            Self::MainMenu => "menu-principal",
            Self::AddContact => "agregar-contacto",
            Self::SearchContact => "buscar-contacto",
            Self::DeleteContact => "eliminar-contacto",
            Self::ListContacts => "listar-contactos",
        }
    }

    /// Parse a route from its string identifier
    pub fn from_id(id: &str) -> Result<Self> {
        match id {
            "menu-principal" => Ok(Self::MainMenu),
            "agregar-contacto" => Ok(Self::AddContact),
            "buscar-contacto" => Ok(Self::SearchContact),
            "eliminar-contacto" => Ok(Self::DeleteContact),
            "listar-contactos" => Ok(Self::ListContacts),
            other => Err(Error::UnknownRoute(other.to_string())),
        }
    }
}

/// Navigation stack with push/pop semantics
///
/// The stack starts at [`Route::MainMenu`] and is never empty: the root route
/// cannot be popped. The top of the stack is the currently visible screen.
#[derive(Debug)]
pub struct Router {
    stack: Vec<Route>,
}

impl Router {
    /// Create a router positioned at the main menu
    pub fn new() -> Self {
        Self {
            stack: vec![Route::MainMenu],
        }
    }

    /// Push a route; it becomes the current screen
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(route = route.id(), "navigate");
        self.stack.push(route);
    }

    /// Push a route by string identifier, ignoring unknown identifiers
    pub fn navigate_id(&mut self, id: &str) {
        match Route::from_id(id) {
            Ok(route) => self.navigate(route),
            Err(_) => tracing::warn!(route = id, "ignoring unknown route"),
        }
    }

    /// Pop the current route, revealing the previous one
    ///
    /// Silent no-op when only the root is left.
    pub fn back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// The currently visible route
    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::MainMenu)
    }

    /// Current stack depth
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_route_is_main_menu() {
        let router = Router::new();
        assert_eq!(router.current(), Route::MainMenu);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_navigate_then_current() {
        let mut router = Router::new();
        router.navigate(Route::AddContact);
        assert_eq!(router.current(), Route::AddContact);
    }

    #[test]
    fn test_back_returns_to_previous() {
        let mut router = Router::new();
        router.navigate(Route::SearchContact);
        router.back();
        assert_eq!(router.current(), Route::MainMenu);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut router = Router::new();
        router.back();
        assert_eq!(router.current(), Route::MainMenu);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_route_ids_round_trip() {
        for route in Route::all() {
            assert_eq!(Route::from_id(route.id()).unwrap(), route);
        }
    }

    #[test]
    fn test_unknown_route_id_is_rejected() {
        assert!(Route::from_id("menu-secundario").is_err());
        assert!(Route::from_id("MENU-PRINCIPAL").is_err());
    }

    #[test]
    fn test_navigate_id_ignores_unknown() {
        let mut router = Router::new();
        router.navigate_id("ruta-inexistente");
        assert_eq!(router.depth(), 1);
        router.navigate_id("listar-contactos");
        assert_eq!(router.current(), Route::ListContacts);
    }
}
