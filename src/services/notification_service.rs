// ============================================================================
// NOTIFICATION CHANNEL - Un único slot global para toasts
// ============================================================================
// Se crea al arrancar la app y se inyecta (clonado) en vistas y viewmodels.
// La superficie de toasts se engancha con `attach`; antes de eso `notify` no
// hace nada (no hay cola ni garantía de entrega).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ApiError;
use crate::models::{NotificationEvent, Severity};

type Surface = Rc<dyn Fn(NotificationEvent)>;

#[derive(Clone)]
pub struct NotificationChannel {
    slot: Rc<RefCell<Option<Surface>>>,
    ttl_ms: u32,
}

impl NotificationChannel {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            ttl_ms,
        }
    }

    pub fn ttl_ms(&self) -> u32 {
        self.ttl_ms
    }

    /// Enganchar la superficie de visualización (reemplaza la anterior)
    pub fn attach<F>(&self, surface: F)
    where
        F: Fn(NotificationEvent) + 'static,
    {
        let previous = self.slot.borrow_mut().replace(Rc::new(surface));
        if previous.is_some() {
            log::warn!("⚠️ [TOAST] Superficie reemplazada");
        }
    }

    pub fn detach(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn is_attached(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Publicar una notificación. Devuelve `true` si había superficie.
    pub fn notify(&self, severity: Severity, title: impl Into<String>, body: impl Into<String>) -> bool {
        // Clonar el Rc para no mantener el borrow mientras la superficie pinta
        let surface = self.slot.borrow().clone();
        let Some(surface) = surface else {
            log::debug!("🔕 [TOAST] Sin superficie montada, notificación descartada");
            return false;
        };

        surface(NotificationEvent {
            severity,
            title: title.into(),
            body: body.into(),
            ttl_ms: self.ttl_ms,
        });
        true
    }

    pub fn success(&self, title: impl Into<String>, body: impl Into<String>) -> bool {
        self.notify(Severity::Success, title, body)
    }

    pub fn info(&self, title: impl Into<String>, body: impl Into<String>) -> bool {
        self.notify(Severity::Info, title, body)
    }

    pub fn warn(&self, title: impl Into<String>, body: impl Into<String>) -> bool {
        self.notify(Severity::Warn, title, body)
    }

    pub fn error(&self, title: impl Into<String>, body: impl Into<String>) -> bool {
        self.notify(Severity::Error, title, body)
    }

    /// Error operacional -> toast de error
    pub fn report(&self, err: &ApiError) -> bool {
        log::error!("❌ {}", err);
        self.error(err.title(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notify_before_attach_is_a_noop() {
        let channel = NotificationChannel::new(3000);
        assert!(!channel.is_attached());
        assert!(!channel.info("Hello", "nobody is listening"));
    }

    #[test]
    fn attached_surface_receives_each_event_once() {
        let channel = NotificationChannel::new(1500);
        let received = Rc::new(RefCell::new(Vec::new()));
        {
            let received = received.clone();
            channel.attach(move |event| received.borrow_mut().push(event));
        }

        let publisher = channel.clone();
        assert!(publisher.success("Saved", "Listing created"));
        assert!(publisher.report(&ApiError::Timeout(30_000)));

        let events = received.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].severity, Severity::Success);
        assert_eq!(events[0].ttl_ms, 1500);
        assert_eq!(events[1].severity, Severity::Error);
        assert_eq!(events[1].title, "Network error");
    }

    #[test]
    fn detach_silences_the_channel() {
        let channel = NotificationChannel::new(3000);
        channel.attach(|_| {});
        channel.detach();
        assert!(!channel.warn("Gone", "surface unmounted"));
    }

    #[test]
    fn surface_may_publish_while_handling_an_event() {
        let channel = NotificationChannel::new(3000);
        let count = Rc::new(RefCell::new(0));
        {
            let count = count.clone();
            let inner = channel.clone();
            channel.attach(move |event| {
                *count.borrow_mut() += 1;
                if event.severity == Severity::Error {
                    inner.info("Retry", "follow-up");
                }
            });
        }
        channel.error("Boom", "first");
        assert_eq!(*count.borrow(), 2);
    }
}
