// ============================================================================
// APP VIEW - Vista según la ruta actual
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::services::{ApiClient, BrowserNavigator, LocalTokenStore, SessionGuard};
use crate::state::{AppState, Route};
use crate::views::{render_dashboard, render_login, ListingVm, LoginVm};

/// Vista montada y cómo desmontarla
pub struct RenderedView {
    pub element: Element,
    pub teardown: Box<dyn FnOnce()>,
}

/// Construye la vista de la ruta actual. `None` si el guard redirigió (la
/// redirección cambia la ruta y dispara otro render).
pub fn render_route(
    state: &AppState,
    api: &Rc<ApiClient>,
    navigator: &BrowserNavigator,
) -> Result<Option<RenderedView>, JsValue> {
    match state.current_route() {
        Route::Login => {
            let vm = Rc::new(LoginVm::new(
                api.clone(),
                LocalTokenStore::default(),
                navigator.clone(),
                state.notifications.clone(),
            ));
            let element = render_login(vm.clone())?;
            Ok(Some(RenderedView { element, teardown: Box::new(move || vm.unmount()) }))
        }
        Route::Dashboard => {
            let guard = SessionGuard::new(LocalTokenStore::default());
            guard
                .enter(navigator, |token| -> Result<RenderedView, JsValue> {
                    let vm = Rc::new(ListingVm::new(
                        api.clone(),
                        navigator.clone(),
                        state.notifications.clone(),
                    ));
                    let element = render_dashboard(vm.clone(), token)?;
                    Ok(RenderedView { element, teardown: Box::new(move || vm.unmount()) })
                })
                .transpose()
        }
    }
}
