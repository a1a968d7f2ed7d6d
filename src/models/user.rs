use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::constants::{
    ROUTE_ADMIN, ROUTE_APODERADO, ROUTE_DEFAULT, ROUTE_DIRECTOR, ROUTE_DOCENTE, ROUTE_TUTOR,
};

// ============================================================================
// USUARIO - Perfil del usuario logueado (la "sesión" del cliente)
// ============================================================================

/// Identificador tal como lo envía el backend (numérico o texto)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Rol del usuario. Un rol desconocido se conserva tal cual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Tutor,
    Docente,
    Apoderado,
    Director,
    Administrador,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tutor => "tutor",
            Self::Docente => "docente",
            Self::Apoderado => "apoderado",
            Self::Director => "director",
            Self::Administrador => "administrador",
            Self::Other(other) => other,
        }
    }

    /// Ruta de inicio a la que se redirige tras el login
    pub fn landing_route(&self) -> &'static str {
        match self {
            Self::Tutor => ROUTE_TUTOR,
            Self::Docente => ROUTE_DOCENTE,
            Self::Apoderado => ROUTE_APODERADO,
            Self::Director => ROUTE_DIRECTOR,
            Self::Administrador => ROUTE_ADMIN,
            Self::Other(_) => ROUTE_DEFAULT,
        }
    }
}

/// Sin rol: se conserva la sesión y se redirige a la ruta por defecto
impl Default for Role {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tutor" => Self::Tutor,
            "docente" => Self::Docente,
            "apoderado" => Self::Apoderado,
            "director" => Self::Director,
            "administrador" => Self::Administrador,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Usuario autenticado tal como lo devuelve el backend.
/// Los campos que no son id/rol se guardan sin interpretar en `profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, rename = "rol", alias = "role")]
    pub role: Role,

    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    pub fn new(id: impl Into<EntityId>, role: impl Into<Role>) -> Self {
        Self {
            id: Some(id.into()),
            role: role.into(),
            profile: Map::new(),
        }
    }

    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.profile.insert(key.to_string(), value.into());
        self
    }

    fn profile_str(&self, key: &str) -> Option<&str> {
        self.profile.get(key).and_then(Value::as_str)
    }

    /// Nombre para mostrar: nombre, correo o id, en ese orden
    pub fn display_name(&self) -> String {
        ["nombre", "name", "correo", "email"]
            .iter()
            .find_map(|key| self.profile_str(key))
            .map(str::to_string)
            .or_else(|| self.id.as_ref().map(ToString::to_string))
            .unwrap_or_default()
    }

    /// Token emitido por el backend, si viene dentro del perfil
    pub fn token(&self) -> Option<&str> {
        self.profile_str("token")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn known_roles_map_to_their_landing_route() {
        assert_eq!(Role::from("tutor").landing_route(), "/inicio-tutor");
        assert_eq!(Role::from("docente").landing_route(), "/inicio-docente");
        assert_eq!(Role::from("apoderado").landing_route(), "/inicio-apoderado");
        assert_eq!(Role::from("director").landing_route(), "/inicio-director");
        assert_eq!(Role::from("administrador").landing_route(), "/inicio-admin");
    }

    #[test]
    fn unknown_role_goes_to_default_route() {
        let role = Role::from("conserje");
        assert_eq!(role, Role::Other("conserje".to_string()));
        assert_eq!(role.landing_route(), "/");
        assert_eq!(role.to_string(), "conserje");
    }

    #[test]
    fn user_keeps_opaque_profile_fields() {
        let raw = json!({
            "id": 7,
            "rol": "docente",
            "nombre": "Ana Torres",
            "cursos": ["3A", "4B"]
        });
        let user: User = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(user.id, Some(EntityId::Number(7)));
        assert_eq!(user.role, Role::Docente);
        assert_eq!(user.display_name(), "Ana Torres");
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn role_key_is_accepted_as_alias() {
        let user: User = serde_json::from_value(json!({"id": "u-1", "role": "director"})).unwrap();
        assert_eq!(user.role, Role::Director);
        assert_eq!(user.id, Some(EntityId::from("u-1")));
        assert_eq!(user.display_name(), "u-1");
    }

    #[test]
    fn token_is_read_from_profile() {
        let user = User::new(1_i64, "tutor").with_field("token", "abc.def");
        assert_eq!(user.token(), Some("abc.def"));
        assert_eq!(User::new(2_i64, "tutor").token(), None);
    }

    #[test]
    fn missing_role_defaults_to_unknown() {
        let user: User = serde_json::from_value(json!({"id": 1, "nombre": "Ana"})).unwrap();
        assert_eq!(user.role, Role::Other(String::new()));
        assert_eq!(user.role.landing_route(), "/");
        assert_eq!(user.display_name(), "Ana");
    }
}
