// ============================================================================
// LOGIN VIEW - Formulario email + password
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{control_value, on_input, on_submit, ElementBuilder};
use crate::models::{LoginField, LoginFieldKey};
use crate::views::form_fields::{append_all, bind_busy, bind_errors, input_field};
use crate::views::LoginVm;

/// Renderizar vista de login
pub fn render_login(vm: Rc<LoginVm>) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login()");

    let screen = ElementBuilder::new("div")?.class("login-screen").build();
    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(ElementBuilder::new("h1")?.text("Login").build())?
        .child(ElementBuilder::new("p")?.text("Sign in to list your car").build())?
        .build();

    let form = ElementBuilder::new("form")?.class("login-form").attr("novalidate", "")?.build();
    let email = input_field(LoginFieldKey::Email.as_str(), "Email", "email", "you@example.com")?;
    let password = input_field(LoginFieldKey::Password.as_str(), "Password", "password", "At least 6 characters")?;
    let submit = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text("Login")
        .build();

    {
        let vm = vm.clone();
        let input = email.control.clone();
        on_input(&email.control, move |_| {
            if let Some(value) = control_value(&input) {
                vm.field_changed(LoginField::Email(value));
            }
        })?;
    }
    {
        let vm = vm.clone();
        let input = password.control.clone();
        on_input(&password.control, move |_| {
            if let Some(value) = control_value(&input) {
                vm.field_changed(LoginField::Password(value));
            }
        })?;
    }

    bind_errors(
        vm.form(),
        vec![
            (LoginFieldKey::Email, email.error.clone()),
            (LoginFieldKey::Password, password.error.clone()),
        ],
    );
    bind_busy(
        vm.form(),
        vec![email.control.clone(), password.control.clone()],
        submit.clone(),
        "Login",
        "Logging in...",
    );

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                let outcome = vm.submit().await;
                log::debug!("📬 [LOGIN] submit -> {:?}", outcome);
            });
        })?;
    }

    append_all(&form, &[&email.group, &password.group, &submit])?;
    append_all(&screen, &[&header, &form])?;
    Ok(screen)
}
