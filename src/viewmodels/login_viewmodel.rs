// ============================================================================
// LOGIN VIEWMODEL - Validación, autenticación y ruta de inicio por rol
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::error::LoginError;
use crate::services::ApiClient;
use crate::state::SessionStore;

#[derive(Clone)]
pub struct LoginViewModel {
    api_client: ApiClient,
    store: SessionStore,
    loading: Rc<Cell<bool>>,
}

impl LoginViewModel {
    pub fn new(api_client: ApiClient, store: SessionStore) -> Self {
        Self {
            api_client,
            store,
            loading: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Autentica, guarda el usuario en el store y devuelve su ruta de inicio
    pub async fn submit(&self, email: &str, password: &str) -> Result<&'static str, LoginError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        self.loading.set(true);
        let result = self.authenticate(email.trim(), password).await;
        self.loading.set(false);
        result
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<&'static str, LoginError> {
        let response = self
            .api_client
            .auth()
            .login(email, password)
            .await
            .map_err(|e| {
                log::error!("❌ [LOGIN] Error al hacer login: {}", e);
                LoginError::Failed
            })?;

        let user = response.user.ok_or_else(|| {
            log::warn!("⚠️ [LOGIN] Respuesta sin usuario");
            LoginError::InvalidCredentials
        })?;

        let route = user.role.landing_route();
        self.store.login(user).map_err(|e| {
            log::error!("❌ [LOGIN] No se pudo guardar la sesión: {}", e);
            LoginError::Failed
        })?;

        log::info!("✅ [LOGIN] Login exitoso, redirigiendo a {}", route);
        Ok(route)
    }
}
