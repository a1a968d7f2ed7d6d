// ============================================================================
// SIGUE - Cliente web del sistema de asistencia escolar (Rust + WASM)
// ============================================================================
// - State: SessionStore (usuario logueado, persistido en localStorage)
// - Services: ApiClient + grupos de recursos (SOLO comunicación HTTP)
// - ViewModels: lógica de login
// - Views/DOM: render con web-sys
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

mod app;
mod dom;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;

pub use crate::error::{ApiError, LoginError, PersistedStateError, StorageError};
pub use crate::models::{EntityId, Role, User};
pub use crate::services::ApiClient;
pub use crate::state::SessionStore;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 SIGUE - Sistema de Asistencia");

    let app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
            }
        } else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
        }
    });
}

/// Cerrar sesión desde JavaScript
#[wasm_bindgen]
pub fn logout() {
    APP.with(|app_cell| {
        if let Some(ref app) = *app_cell.borrow() {
            if let Err(e) = app.store().logout() {
                log::error!("❌ [SESSION] Error cerrando sesión: {}", e);
            }
        }
    });
}
