// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().add_1(class)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> Result<(), JsValue> {
    element.class_list().remove_1(class)
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Vaciar un contenedor
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Habilitar/deshabilitar un control (button, input, select)
pub fn set_disabled(element: &Element, disabled: bool) -> Result<(), JsValue> {
    if disabled {
        element.set_attribute("disabled", "")
    } else {
        element.remove_attribute("disabled")
    }
}

/// Texto de error bajo un campo. `None` lo oculta.
pub fn set_field_error(element: &Element, message: Option<&str>) -> Result<(), JsValue> {
    match message {
        Some(text) => {
            element.set_text_content(Some(text));
            remove_class(element, "hidden")
        }
        None => {
            element.set_text_content(None);
            add_class(element, "hidden")
        }
    }
}

/// Valor actual de un `<input>` o `<select>`
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.dyn_ref::<HtmlSelectElement>().map(|select| select.value())
}

/// Borrar la selección de un `<input type="file">`
pub fn reset_file_input(element: &Element) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value("");
    }
}

/// Archivos elegidos en un `<input type="file">`
pub fn selected_files(element: &Element) -> Vec<web_sys::File> {
    let Some(list) = element.dyn_ref::<HtmlInputElement>().and_then(|input| input.files()) else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Elemento raíz de la app (`#app`, o `body` si no existe)
pub fn app_root() -> Result<Element, JsValue> {
    if let Some(root) = get_element_by_id("app") {
        return Ok(root);
    }
    document()
        .and_then(|doc| doc.body())
        .map(Element::from)
        .ok_or_else(|| JsValue::from_str("No app root"))
}
