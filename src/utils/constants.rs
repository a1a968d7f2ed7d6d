/// URL base del backend cuando no se define BACKEND_URL
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001/api";

/// Clave de localStorage donde vive el usuario logueado
pub const STORAGE_KEY_USUARIO: &str = "usuario";

// Rutas de inicio por rol
pub const ROUTE_DEFAULT: &str = "/";
pub const ROUTE_TUTOR: &str = "/inicio-tutor";
pub const ROUTE_DOCENTE: &str = "/inicio-docente";
pub const ROUTE_APODERADO: &str = "/inicio-apoderado";
pub const ROUTE_DIRECTOR: &str = "/inicio-director";
pub const ROUTE_ADMIN: &str = "/inicio-admin";
