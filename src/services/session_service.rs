// ============================================================================
// SESSION SERVICE - Token persistido + guard de vistas protegidas
// ============================================================================
// La presencia del token es la única condición para entrar al dashboard.
// No hay logout ni expiración.
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::error::{ApiError, ApiResult};
use crate::state::{Navigator, Route};
use crate::utils::{load_from_storage, save_to_storage};

/// Almacenamiento durable del token de sesión
pub trait TokenStore {
    fn read_token(&self) -> Option<String>;
    fn write_token(&self, token: &str) -> ApiResult<()>;
}

impl<T: TokenStore + ?Sized> TokenStore for Rc<T> {
    fn read_token(&self) -> Option<String> {
        (**self).read_token()
    }

    fn write_token(&self, token: &str) -> ApiResult<()> {
        (**self).write_token(token)
    }
}

/// Token en localStorage bajo una clave fija
#[derive(Clone, Debug)]
pub struct LocalTokenStore {
    key: String,
}

impl LocalTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new(CONFIG.session_storage_key.clone())
    }
}

impl TokenStore for LocalTokenStore {
    fn read_token(&self) -> Option<String> {
        load_from_storage(&self.key).filter(|token| !token.is_empty())
    }

    fn write_token(&self, token: &str) -> ApiResult<()> {
        save_to_storage(&self.key, token).map_err(ApiError::Storage)?;
        log::info!("💾 [SESSION] Token guardado");
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum GuardDecision {
    Allow(String),
    Redirect(Route),
}

/// Comprueba el token al entrar a una vista protegida
pub struct SessionGuard<S> {
    store: S,
}

impl<S: TokenStore> SessionGuard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lectura síncrona del token
    pub fn check(&self) -> GuardDecision {
        match self.store.read_token() {
            Some(token) => GuardDecision::Allow(token),
            None => GuardDecision::Redirect(Route::Login),
        }
    }

    /// Ejecuta `render` solo si hay sesión; si no, redirige (replace) y
    /// `render` no se llama nunca.
    pub fn enter<N, T>(&self, navigator: &N, render: impl FnOnce(&str) -> T) -> Option<T>
    where
        N: Navigator + ?Sized,
    {
        match self.check() {
            GuardDecision::Allow(token) => Some(render(&token)),
            GuardDecision::Redirect(route) => {
                log::warn!("🔒 [GUARD] Sin token de sesión, redirigiendo a {}", route.path());
                navigator.replace(route);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MemoryTokenStore, NavKind, RecordingNavigator};
    use std::cell::Cell;

    #[test]
    fn missing_token_redirects_without_rendering() {
        let guard = SessionGuard::new(MemoryTokenStore::default());
        let navigator = RecordingNavigator::default();
        let protected_calls = Cell::new(0);

        let rendered = guard.enter(&navigator, |_| protected_calls.set(protected_calls.get() + 1));

        assert!(rendered.is_none());
        assert_eq!(protected_calls.get(), 0);
        assert_eq!(navigator.history(), vec![(NavKind::Replace, Route::Login)]);
    }

    #[test]
    fn stored_token_renders_without_redirect() {
        let guard = SessionGuard::new(MemoryTokenStore::with_token("ali@cars.pk"));
        let navigator = RecordingNavigator::default();

        let rendered = guard.enter(&navigator, |token| format!("dashboard for {}", token));

        assert_eq!(rendered.as_deref(), Some("dashboard for ali@cars.pk"));
        assert!(navigator.history().is_empty());
    }

    #[test]
    fn check_reports_decision() {
        assert_eq!(
            SessionGuard::new(MemoryTokenStore::default()).check(),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(
            SessionGuard::new(MemoryTokenStore::with_token("t")).check(),
            GuardDecision::Allow("t".into())
        );
    }
}
