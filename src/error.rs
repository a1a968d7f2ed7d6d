// ============================================================================
// ERRORES - Taxonomía de errores del cliente
// ============================================================================
// Solo PersistedStateError se recupera localmente (SessionStore::restore).
// El resto sube hasta la vista que hizo la llamada.
// ============================================================================

use thiserror::Error;

/// Errores del API Gateway (dispatch + grupos de recursos)
#[derive(Debug, Error)]
pub enum ApiError {
    /// Fallo de red (conexión rechazada, DNS, CORS...). Se propaga sin reintentos.
    #[error("Error de red: {source}")]
    Transport {
        #[source]
        source: Box<dyn std::error::Error>,
    },

    /// Respuesta con status fuera de 2xx
    #[error("Error {status}: {body}")]
    Request { status: u16, body: String },

    /// Respuesta exitosa cuyo cuerpo no es el JSON esperado
    #[error("Respuesta inválida del servidor: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// El cuerpo tipado de la petición no se pudo serializar
    #[error("Error serializando el cuerpo de la petición: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn transport<E>(error: E) -> Self
    where
        E: std::error::Error + 'static,
    {
        Self::Transport {
            source: Box::new(error),
        }
    }

    /// Status HTTP si el error viene del backend
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errores del almacenamiento clave-valor (localStorage)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("localStorage no disponible")]
    Unavailable,

    #[error("Error leyendo '{key}' de localStorage")]
    Read { key: String },

    #[error("Error guardando '{key}' en localStorage")]
    Write { key: String },

    #[error("Error eliminando '{key}' de localStorage")]
    Remove { key: String },

    #[error("Error serializando datos: {0}")]
    Serialize(String),
}

/// Sesión guardada que no se pudo adoptar al iniciar.
/// Nunca llega al llamador: se entrega al sumidero de diagnósticos del SessionStore.
#[derive(Debug, Error)]
pub enum PersistedStateError {
    #[error("No se pudo leer la sesión guardada: {0}")]
    Unreadable(#[from] StorageError),

    #[error("Sesión guardada corrupta: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    #[error("No se pudo descartar la sesión corrupta: {0}")]
    DiscardFailed(StorageError),
}

/// Resultado de un intento de login tal como lo ve el usuario
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Por favor, completa todos los campos")]
    MissingFields,

    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    #[error("Error al iniciar sesión. Verifica tus credenciales.")]
    Failed,
}
