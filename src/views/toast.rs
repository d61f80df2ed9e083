// ============================================================================
// TOAST SURFACE - Muestra lo que llega por el canal de notificaciones
// ============================================================================
// Se monta una sola vez al arrancar. Cada toast se apila y se quita solo
// tras su `ttl_ms`.
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::NotificationEvent;
use crate::services::NotificationChannel;

/// Crea el contenedor de toasts dentro de `parent` y lo engancha al canal
pub fn mount_toast_surface(channel: &NotificationChannel, parent: &Element) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .class("toast-container")
        .id("toasts")?
        .attr("aria-live", "polite")?
        .build();
    append_child(parent, &container)?;

    let surface = container.clone();
    channel.attach(move |event| {
        if let Err(e) = show_toast(&surface, event) {
            log::warn!("⚠️ [TOAST] No se pudo mostrar: {:?}", e);
        }
    });
    log::info!("🍞 [TOAST] Superficie montada");
    Ok(container)
}

fn show_toast(container: &Element, event: NotificationEvent) -> Result<(), JsValue> {
    log::debug!("🍞 [TOAST] {} {}: {}", event.severity.as_str(), event.title, event.body);

    let toast = ElementBuilder::new("div")?
        .class(&format!("toast toast-{}", event.severity.as_str()))
        .attr("role", "status")?
        .child(ElementBuilder::new("strong")?.class("toast-title").text(&event.title).build())?
        .child(ElementBuilder::new("p")?.class("toast-body").text(&event.body).build())?
        .build();
    append_child(container, &toast)?;

    // Click cierra antes de tiempo
    {
        let target = toast.clone();
        on_click(&toast, move |_| target.remove())?;
    }

    Timeout::new(event.ttl_ms, move || toast.remove()).forget();
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::dom::create_element;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn toasts_stack_in_the_container() {
        let parent = create_element("div").unwrap();
        let channel = NotificationChannel::new(60_000);

        let container = mount_toast_surface(&channel, &parent).unwrap();
        assert!(channel.success("Saved", "first"));
        assert!(channel.error("Failed", "second"));

        assert_eq!(container.child_element_count(), 2);
        let last = container.last_element_child().unwrap();
        assert!(last.class_list().contains("toast-error"));
        assert_eq!(last.text_content().unwrap(), "Failedsecond");
    }
}
