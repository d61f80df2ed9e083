// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Monta la superficie de toasts una vez y re-renderiza la vista cada vez que
// cambia la ruta. La vista anterior se desmonta antes de construir la nueva.
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{app_root, append_child, clear_children, ElementBuilder};
use crate::services::{current_route, ApiClient, BrowserNavigator};
use crate::state::AppState;
use crate::views::{mount_toast_surface, render_route};

/// Aplicación principal
pub struct App {
    state: AppState,
    api: Rc<ApiClient>,
    navigator: BrowserNavigator,
    view_root: Element,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = app_root()?;
        clear_children(&root);

        let state = AppState::new(current_route());
        mount_toast_surface(&state.notifications, &root)?;

        let view_root = ElementBuilder::new("main")?.class("view-root").build();
        append_child(&root, &view_root)?;

        // Cada cambio de ruta re-renderiza en el siguiente tick, fuera del
        // borrow actual de la App
        state.route.subscribe(move || {
            Timeout::new(0, crate::rerender_app).forget();
        });

        let navigator = BrowserNavigator::new(state.route.clone());
        Ok(Self {
            state,
            api: Rc::new(ApiClient::new()),
            navigator,
            view_root,
            teardown: None,
        })
    }

    /// Renderizar la vista de la ruta actual
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
        clear_children(&self.view_root);

        let route = self.state.current_route();
        log::info!(
            "🎬 [APP] Render {}{}",
            route.path(),
            if route.is_protected() { " (protegida)" } else { "" }
        );

        if let Some(view) = render_route(&self.state, &self.api, &self.navigator)? {
            append_child(&self.view_root, &view.element)?;
            self.teardown = Some(view.teardown);
        }
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
