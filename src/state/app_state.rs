// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::config::CONFIG;
use crate::services::NotificationChannel;
use crate::state::{ReactiveState, Route};

/// Estado global de la aplicación (clonable, los clones comparten todo)
#[derive(Clone)]
pub struct AppState {
    /// Vista actual. La App está suscrita y re-renderiza al cambiar.
    pub route: ReactiveState<Route>,
    /// Canal único de notificaciones, inyectado en vistas y viewmodels
    pub notifications: NotificationChannel,
}

impl AppState {
    pub fn new(initial: Route) -> Self {
        Self::with_channel(initial, NotificationChannel::new(CONFIG.notification_ttl_ms))
    }

    pub fn with_channel(initial: Route, notifications: NotificationChannel) -> Self {
        Self {
            route: ReactiveState::new(initial),
            notifications,
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_route_and_channel() {
        let state = AppState::with_channel(Route::Login, NotificationChannel::new(500));
        let other = state.clone();

        other.route.set(Route::Dashboard);
        other.notifications.attach(|_| {});

        assert_eq!(state.current_route(), Route::Dashboard);
        assert!(state.notifications.is_attached());
        assert_eq!(state.notifications.ttl_ms(), 500);
    }
}
