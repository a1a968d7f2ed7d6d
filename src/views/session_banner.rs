use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, navigate_to, on_click, ElementBuilder};
use crate::state::SessionStore;
use crate::utils::constants::ROUTE_DEFAULT;

/// Cabecera con el usuario logueado y botón de cerrar sesión
pub fn render_session_banner(store: &SessionStore) -> Result<Element, JsValue> {
    let banner = ElementBuilder::new("header")?.class("session-banner").build();

    let Some(user) = store.current_user() else {
        return Ok(banner);
    };

    let who = ElementBuilder::new("span")?
        .class("session-user")
        .text(&format!("{} · {}", user.display_name(), user.role))
        .build();

    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-logout")
        .text("Cerrar sesión")
        .build();

    {
        let store = store.clone();
        on_click(&logout_btn, move |_| {
            if let Err(e) = store.logout() {
                log::error!("❌ [SESSION] Error cerrando sesión: {}", e);
                return;
            }
            if let Err(e) = navigate_to(ROUTE_DEFAULT) {
                log::error!("❌ [SESSION] No se pudo redirigir: {:?}", e);
            }
        })?;
    }

    append_child(&banner, &who)?;
    append_child(&banner, &logout_btn)?;
    Ok(banner)
}
