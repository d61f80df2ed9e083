// ============================================================================
// NAVIGATION - History API del navegador
// ============================================================================

use wasm_bindgen::JsValue;
use web_sys::History;

use crate::state::{Navigator, ReactiveState, Route};

/// Navegador real: actualiza la URL y el estado `route` (la App está
/// suscrita y re-renderiza).
#[derive(Clone)]
pub struct BrowserNavigator {
    route: ReactiveState<Route>,
}

impl BrowserNavigator {
    pub fn new(route: ReactiveState<Route>) -> Self {
        Self { route }
    }

    fn go(&self, route: Route, replace: bool) {
        if let Some(history) = history() {
            let result = if replace {
                history.replace_state_with_url(&JsValue::NULL, "", Some(route.path()))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(route.path()))
            };
            if let Err(e) = result {
                log::warn!("⚠️ [NAV] No se pudo actualizar el historial: {:?}", e);
            }
        }

        log::info!("🧭 [NAV] {} {}", if replace { "replace" } else { "push" }, route.path());
        self.route.set(route);
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        self.go(route, false);
    }

    fn replace(&self, route: Route) {
        self.go(route, true);
    }
}

fn history() -> Option<History> {
    web_sys::window()?.history().ok()
}

/// Ruta correspondiente a la URL actual
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Login)
}
