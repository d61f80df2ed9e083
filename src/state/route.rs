// ============================================================================
// ROUTE - Vistas de la aplicación y navegación
// ============================================================================

use std::rc::Rc;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    /// `/` - login (también es "home")
    Login,
    /// `/dashboard` - formulario de anuncio (protegida)
    Dashboard,
}

impl Route {
    /// Destino tras publicar un anuncio
    pub const HOME: Route = Route::Login;

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Rutas desconocidas caen en el login
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/dashboard" => Route::Dashboard,
            _ => Route::Login,
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

/// Navegación entre vistas. `navigate` añade una entrada al historial,
/// `replace` sustituye la actual (redirecciones).
pub trait Navigator {
    fn navigate(&self, route: Route);
    fn replace(&self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for Rc<N> {
    fn navigate(&self, route: Route) {
        (**self).navigate(route)
    }

    fn replace(&self, route: Route) {
        (**self).replace(route)
    }
}
