// ============================================================================
// DASHBOARD VIEW - Formulario de anuncio (vista protegida)
// ============================================================================
// Todos los eventos pasan por `ListingViewModel::dispatch`.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, File};

use crate::config::CONFIG;
use crate::dom::{
    clear_children, control_value, on_change, on_input, on_submit, reset_file_input, selected_files,
    set_disabled, set_field_error, ElementBuilder,
};
use crate::models::{City, ListingField, ListingFieldKey};
use crate::viewmodels::{DispatchOutcome, ListingEvent, UploadOutcome};
use crate::views::form_fields::{append_all, bind_busy, bind_errors, input_field, select_field, FieldParts};
use crate::views::ListingVm;

fn dispatch(vm: &Rc<ListingVm>, event: ListingEvent<File>, after: impl FnOnce(DispatchOutcome) + 'static) {
    let vm = vm.clone();
    spawn_local(async move {
        let outcome = vm.dispatch(event).await;
        after(outcome);
    });
}

/// Campo de texto enlazado a un `ListingField`
fn bind_text(vm: &Rc<ListingVm>, field: &FieldParts, to_change: fn(String) -> ListingField) -> Result<(), JsValue> {
    let vm = vm.clone();
    let input = field.control.clone();
    on_input(&field.control, move |_| {
        if let Some(value) = control_value(&input) {
            dispatch(&vm, ListingEvent::FieldChanged(to_change(value)), |_| {});
        }
    })
}

/// Renderizar el dashboard. `session` es el token que dejó pasar el guard.
pub fn render_dashboard(vm: Rc<ListingVm>, session: &str) -> Result<Element, JsValue> {
    log::info!("🎬 [DASHBOARD] render_dashboard() para {}", session);

    let screen = ElementBuilder::new("div")?.class("dashboard-screen").build();
    let header = ElementBuilder::new("div")?
        .class("dashboard-header")
        .child(ElementBuilder::new("h1")?.text("Sell your car").build())?
        .child(ElementBuilder::new("p")?.class("session-user").text(session).build())?
        .build();

    let form = ElementBuilder::new("form")?.class("listing-form").attr("novalidate", "")?.build();
    let model = input_field(ListingFieldKey::Model.as_str(), "Car model", "text", "e.g. Civic")?;
    let price = input_field(ListingFieldKey::Price.as_str(), "Price", "text", "e.g. 1500000")?;
    let phone = input_field(ListingFieldKey::Phone.as_str(), "Phone", "tel", "11 digits")?;

    let cities: Vec<(String, String)> = City::ALL
        .iter()
        .map(|c| (c.as_str().to_string(), c.as_str().to_string()))
        .collect();
    let city = select_field("city", "City", &cities)?;

    let copies: Vec<(String, String)> = (1..=CONFIG.max_copy_count)
        .map(|n| (n.to_string(), n.to_string()))
        .collect();
    let copy_count = select_field("copy-count", "Number of images", &copies)?;

    let images = ElementBuilder::new("input")?
        .class("form-input")
        .id("images")?
        .attr("type", "file")?
        .attr("accept", "image/*")?
        .attr("multiple", "")?
        .build();
    let upload_message = ElementBuilder::new("p")?.class("upload-message hidden").build();
    let image_list = ElementBuilder::new("ul")?.class("image-paths").build();
    let images_group = ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", "images")?.text("Images").build())?
        .child(images.clone())?
        .child(upload_message.clone())?
        .child(image_list.clone())?
        .build();

    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Submit")
        .build();

    bind_text(&vm, &model, ListingField::Model)?;
    bind_text(&vm, &price, ListingField::Price)?;
    bind_text(&vm, &phone, ListingField::Phone)?;

    {
        let vm = vm.clone();
        let select = city.control.clone();
        on_change(&city.control, move |_| match control_value(&select).map(|v| v.parse::<City>()) {
            Some(Ok(city)) => dispatch(&vm, ListingEvent::FieldChanged(ListingField::City(city)), |_| {}),
            Some(Err(e)) => log::warn!("⚠️ [DASHBOARD] {}", e),
            None => {}
        })?;
    }
    {
        let vm = vm.clone();
        let select = copy_count.control.clone();
        on_change(&copy_count.control, move |_| {
            if let Some(Ok(count)) = control_value(&select).map(|v| v.parse::<u32>()) {
                dispatch(&vm, ListingEvent::FieldChanged(ListingField::CopyCount(count)), |_| {});
            }
        })?;
    }

    // Mensaje de límite de archivos
    {
        let uploads = vm.uploads().clone();
        let target = upload_message.clone();
        vm.uploads().subscribe_message(move || {
            if let Err(e) = set_field_error(&target, uploads.message().as_deref()) {
                log::warn!("⚠️ [UPLOAD] No se pudo pintar el mensaje: {:?}", e);
            }
        });
    }

    {
        let vm = vm.clone();
        let input = images.clone();
        let list = image_list.clone();
        on_change(&images, move |_| {
            let files = selected_files(&input);
            if let Err(e) = set_disabled(&input, true) {
                log::warn!("⚠️ [UPLOAD] No se pudo bloquear el input: {:?}", e);
            }
            let input = input.clone();
            let list = list.clone();
            let reader = vm.clone();
            dispatch(&vm, ListingEvent::FilesSelected(files), move |outcome| {
                // Si hay un envío en vuelo el input sigue bloqueado por `bind_busy`
                if let Err(e) = set_disabled(&input, !reader.form().is_editable()) {
                    log::warn!("⚠️ [UPLOAD] No se pudo desbloquear el input: {:?}", e);
                }
                match outcome {
                    DispatchOutcome::Upload(UploadOutcome::Rejected) => reset_file_input(&input),
                    DispatchOutcome::Upload(UploadOutcome::Uploaded(_)) => {
                        let paths = reader.form().with_draft(|draft| draft.image_paths.clone());
                        if let Err(e) = render_paths(&list, &paths) {
                            log::warn!("⚠️ [UPLOAD] No se pudo pintar la lista: {:?}", e);
                        }
                    }
                    _ => {}
                }
            });
        })?;
    }

    bind_errors(
        vm.form(),
        vec![
            (ListingFieldKey::Model, model.error.clone()),
            (ListingFieldKey::Price, price.error.clone()),
            (ListingFieldKey::Phone, phone.error.clone()),
        ],
    );
    bind_busy(
        vm.form(),
        vec![
            model.control.clone(),
            price.control.clone(),
            phone.control.clone(),
            city.control.clone(),
            copy_count.control.clone(),
            images.clone(),
        ],
        submit.clone(),
        "Submit",
        "Submitting...",
    );

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            dispatch(&vm, ListingEvent::Submit, |outcome| {
                log::debug!("📬 [DASHBOARD] submit -> {:?}", outcome);
            });
        })?;
    }

    append_all(
        &form,
        &[&model.group, &price.group, &phone.group, &city.group, &copy_count.group, &images_group, &submit],
    )?;
    append_all(&screen, &[&header, &form])?;
    Ok(screen)
}

fn render_paths(list: &Element, paths: &[String]) -> Result<(), JsValue> {
    clear_children(list);
    for path in paths {
        let item = ElementBuilder::new("li")?.text(path).build();
        list.append_child(&item)?;
    }
    Ok(())
}
