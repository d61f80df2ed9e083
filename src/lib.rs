// ============================================================================
// CAR LISTING APP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado de formulario + lógica UI
// - Services: HTTP, storage, navegación y notificaciones
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

mod config;
mod error;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::services::current_route;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Car Listing App - Rust Puro + MVVM ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Botones atrás/adelante del navegador. Solo se registra una vez aquí.
    if let Some(win) = web_sys::window() {
        crate::dom::listen(&win, "popstate", move |_| {
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.state().route.set(current_route());
                }
            });
        })?;
    }

    Ok(())
}

/// Re-render completo de la vista actual
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [APP] App no está inicializada");
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
