// ============================================================================
// APP - Arma store, cliente API y viewmodels; renderiza en #app
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::get_element_by_id;
use crate::services::ApiClient;
use crate::state::SessionStore;
use crate::viewmodels::LoginViewModel;
use crate::views::render_app;

pub struct App {
    store: SessionStore,
    login_vm: LoginViewModel,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let store = SessionStore::browser();
        store.restore();

        let api_client = ApiClient::new();
        log::info!("🌐 [APP] Backend: {}", api_client.base_url());
        let login_vm = LoginViewModel::new(api_client, store.clone());

        // Re-render en el siguiente tick tras cada login/logout
        store.subscribe(|| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self {
            store,
            login_vm,
            root,
        })
    }

    pub fn render(&self) -> Result<(), JsValue> {
        render_app(&self.root, &self.store, &self.login_vm)
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}
