// ============================================================================
// APP VIEW - Login o cabecera de sesión según el estado del store
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, ElementBuilder};
use crate::state::SessionStore;
use crate::viewmodels::LoginViewModel;
use crate::views::{render_login, render_session_banner};

pub fn render_app(
    root: &Element,
    store: &SessionStore,
    login_vm: &LoginViewModel,
) -> Result<(), JsValue> {
    clear_children(root);

    // Antes de restore() "sin usuario" todavía no significa deslogueado
    let content = if !store.is_ready() {
        ElementBuilder::new("div")?
            .class("app-loading")
            .text("Cargando...")
            .build()
    } else if store.is_authenticated() {
        render_session_banner(store)?
    } else {
        render_login(login_vm)?
    };

    append_child(root, &content)
}
