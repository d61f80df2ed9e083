// ============================================================================
// FORM FIELDS - Grupos label + control + texto de error
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, set_disabled, set_field_error, ElementBuilder};
use crate::state::{FormPhase, FormState};

pub struct FieldParts {
    pub group: Element,
    pub control: Element,
    pub error: Element,
}

/// `<input>` con label y párrafo de error oculto
pub fn input_field(id: &str, label: &str, input_type: &str, placeholder: &str) -> Result<FieldParts, JsValue> {
    let control = ElementBuilder::new("input")?
        .class("form-input")
        .id(id)?
        .attr("type", input_type)?
        .attr("name", id)?
        .attr("placeholder", placeholder)?
        .build();
    wrap(id, label, control)
}

/// `<select>` con una opción por `(value, text)`. La primera queda elegida.
pub fn select_field(id: &str, label: &str, options: &[(String, String)]) -> Result<FieldParts, JsValue> {
    let mut select = ElementBuilder::new("select")?
        .class("form-select")
        .id(id)?
        .attr("name", id)?;
    for (value, text) in options {
        let option = ElementBuilder::new("option")?.attr("value", value)?.text(text).build();
        select = select.child(option)?;
    }
    wrap(id, label, select.build())
}

fn wrap(id: &str, label: &str, control: Element) -> Result<FieldParts, JsValue> {
    let error = ElementBuilder::new("p")?
        .class("field-error hidden")
        .id(&format!("{}-error", id))?
        .build();
    let group = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(control.clone())?
        .child(error.clone())?
        .build();
    Ok(FieldParts { group, control, error })
}

pub fn append_all(parent: &Element, children: &[&Element]) -> Result<(), JsValue> {
    for child in children {
        append_child(parent, child)?;
    }
    Ok(())
}

/// Pinta los errores de campo cada vez que el mapa cambia
pub fn bind_errors<D, F>(form: &FormState<D, F>, targets: Vec<(F, Element)>)
where
    D: Clone + 'static,
    F: Ord + Copy + 'static,
{
    let reader = form.clone();
    let targets = Rc::new(targets);
    form.subscribe_errors(move || {
        let errors = reader.errors();
        for (field, element) in targets.iter() {
            if let Err(e) = set_field_error(element, errors.message(*field)) {
                log::warn!("⚠️ [FORM] No se pudo pintar el error: {:?}", e);
            }
        }
    });
}

/// Deshabilita los controles (y el botón) mientras el formulario no está en
/// `Editing`.
pub fn bind_busy<D, F>(form: &FormState<D, F>, controls: Vec<Element>, submit: Element, idle_label: &str, busy_label: &str)
where
    D: Clone + 'static,
    F: Ord + Copy + 'static,
{
    let reader = form.clone();
    let idle_label = idle_label.to_string();
    let busy_label = busy_label.to_string();
    form.subscribe_phase(move || {
        let phase = reader.phase();
        let busy = !reader.is_editable();
        for control in controls.iter().chain(std::iter::once(&submit)) {
            if let Err(e) = set_disabled(control, busy) {
                log::warn!("⚠️ [FORM] No se pudo cambiar disabled: {:?}", e);
            }
        }
        let label = if phase == FormPhase::Submitting { &busy_label } else { &idle_label };
        submit.set_text_content(Some(label.as_str()));
    });
}
