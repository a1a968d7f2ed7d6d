// ============================================================================
// SESSION STORE - Única fuente de verdad sobre "quién está logueado"
// ============================================================================
// Memoria y localStorage se actualizan en la misma operación: si el storage
// rechaza la escritura, el estado en memoria no cambia.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{PersistedStateError, StorageError};
use crate::models::{Role, User};
use crate::state::Subscribers;
use crate::utils::constants::STORAGE_KEY_USUARIO;
use crate::utils::storage::{KeyValueStorage, LocalStorage, MemoryStorage};

/// Recibe los fallos recuperados localmente durante `restore()`
pub type DiagnosticSink = Rc<dyn Fn(&PersistedStateError)>;

fn log_diagnostic(error: &PersistedStateError) {
    log::warn!("⚠️ [SESSION] {}", error);
}

#[derive(Clone)]
pub struct SessionStore {
    user: Rc<RefCell<Option<User>>>,
    ready: Rc<RefCell<bool>>,
    storage: Rc<dyn KeyValueStorage>,
    diagnostics: DiagnosticSink,
    subscribers: Subscribers,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStorage>) -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            ready: Rc::new(RefCell::new(false)),
            storage,
            diagnostics: Rc::new(log_diagnostic),
            subscribers: Subscribers::new(),
        }
    }

    /// Store sobre localStorage; si el navegador no lo expone, la sesión vive solo en memoria
    pub fn browser() -> Self {
        match LocalStorage::available() {
            Some(storage) => Self::new(Rc::new(storage)),
            None => {
                log::warn!("⚠️ [SESSION] localStorage no disponible, sesión solo en memoria");
                Self::new(Rc::new(MemoryStorage::new()))
            }
        }
    }

    pub fn with_diagnostics<F>(mut self, sink: F) -> Self
    where
        F: Fn(&PersistedStateError) + 'static,
    {
        self.diagnostics = Rc::new(sink);
        self
    }

    /// Cargar el usuario guardado. Se llama una vez al iniciar la app.
    /// Nunca falla: una sesión ilegible se descarta y se reporta al sumidero.
    pub fn restore(&self) {
        let restored = match self.storage.get_item(STORAGE_KEY_USUARIO) {
            Ok(Some(json)) => match serde_json::from_str::<User>(&json) {
                Ok(user) => {
                    log::info!("💾 [SESSION] Usuario restaurado (rol: {})", user.role);
                    Some(user)
                }
                Err(source) => {
                    (self.diagnostics)(&PersistedStateError::Malformed { source });
                    if let Err(e) = self.storage.remove_item(STORAGE_KEY_USUARIO) {
                        (self.diagnostics)(&PersistedStateError::DiscardFailed(e));
                    }
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                (self.diagnostics)(&PersistedStateError::Unreadable(e));
                None
            }
        };

        *self.user.borrow_mut() = restored;
        *self.ready.borrow_mut() = true;
        self.subscribers.notify();
    }

    /// Iniciar sesión con el perfil devuelto por el backend
    pub fn login(&self, user: User) -> Result<(), StorageError> {
        let json =
            serde_json::to_string(&user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set_item(STORAGE_KEY_USUARIO, &json)?;

        log::info!("✅ [SESSION] Sesión iniciada (rol: {})", user.role);
        *self.user.borrow_mut() = Some(user);
        self.subscribers.notify();
        Ok(())
    }

    /// Cerrar sesión
    pub fn logout(&self) -> Result<(), StorageError> {
        self.storage.remove_item(STORAGE_KEY_USUARIO)?;

        log::info!("👋 [SESSION] Sesión cerrada");
        *self.user.borrow_mut() = None;
        self.subscribers.notify();
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.borrow().is_some()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.user.borrow().as_ref().map(|user| user.role.clone())
    }

    pub fn current_user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    /// true cuando `restore()` terminó; antes de eso "sin usuario" no significa "deslogueado"
    pub fn is_ready(&self) -> bool {
        *self.ready.borrow()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback);
    }
}
