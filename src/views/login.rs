// ============================================================================
// LOGIN VIEW - Formulario de correo + contraseña
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    add_class, append_child, navigate_to, on_input_value, on_submit, remove_attribute,
    remove_class, set_attribute, set_text_content, ElementBuilder,
};
use crate::viewmodels::LoginViewModel;

const SUBMIT_TEXT: &str = "Iniciar Sesión";
const SUBMIT_LOADING_TEXT: &str = "Iniciando sesión...";

/// Renderizar vista de login
pub fn render_login(vm: &LoginViewModel) -> Result<Element, JsValue> {
    log::debug!("🎬 [LOGIN] render_login()");

    let email = Rc::new(RefCell::new(String::new()));
    let password = Rc::new(RefCell::new(String::new()));

    let screen = ElementBuilder::new("div")?.class("login-screen").build();

    let header = ElementBuilder::new("div")?
        .class("login-header")
        .child(&ElementBuilder::new("h2")?.text("Sistema de Asistencia").build())?
        .child(
            &ElementBuilder::new("p")?
                .text("Ingresa tus credenciales para acceder")
                .build(),
        )?
        .build();

    let form = ElementBuilder::new("form")?.class("login-form").build();

    let email_group = create_input_group(
        "correo",
        "Correo electrónico",
        "email",
        "ejemplo@colegio.edu",
        email.clone(),
    )?;
    let password_group = create_input_group(
        "password",
        "Contraseña",
        "password",
        "Tu contraseña",
        password.clone(),
    )?;

    let error_box = ElementBuilder::new("div")?
        .class("login-error hidden")
        .attr("role", "alert")?
        .build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-primary")
        .text(SUBMIT_TEXT)
        .build();

    {
        let vm = vm.clone();
        let error_box = error_box.clone();
        let submit_btn = submit_btn.clone();

        on_submit(&form, move || {
            if vm.is_loading() {
                return;
            }

            let email_val = email.borrow().clone();
            let password_val = password.borrow().clone();
            let vm = vm.clone();
            let error_box = error_box.clone();
            let submit_btn = submit_btn.clone();

            let _ = add_class(&error_box, "hidden");
            set_loading(&submit_btn, true);

            spawn_local(async move {
                match vm.submit(&email_val, &password_val).await {
                    Ok(route) => {
                        if let Err(e) = navigate_to(route) {
                            log::error!("❌ [LOGIN] No se pudo redirigir a {}: {:?}", route, e);
                        }
                    }
                    Err(e) => {
                        set_text_content(&error_box, &e.to_string());
                        let _ = remove_class(&error_box, "hidden");
                    }
                }
                set_loading(&submit_btn, false);
            });
        })?;
    }

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &error_box)?;
    append_child(&form, &submit_btn)?;

    append_child(&screen, &header)?;
    append_child(&screen, &form)?;

    Ok(screen)
}

fn set_loading(button: &Element, loading: bool) {
    if loading {
        let _ = set_attribute(button, "disabled", "true");
        set_text_content(button, SUBMIT_LOADING_TEXT);
    } else {
        let _ = remove_attribute(button, "disabled");
        set_text_content(button, SUBMIT_TEXT);
    }
}

/// Label + input que vuelca su valor en `value`
fn create_input_group(
    id: &str,
    label_text: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input = ElementBuilder::new("input")?
        .class("input-field")
        .id(id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .attr("placeholder", placeholder)?
        .attr("required", "true")?
        .build();

    on_input_value(&input, move |text| {
        *value.borrow_mut() = text;
    })?;

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(&label)?
        .child(&input)?
        .build())
}
