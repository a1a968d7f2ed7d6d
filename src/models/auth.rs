use serde::{Deserialize, Serialize};

use crate::models::User;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Respuesta de POST /auth/login. Sin `user` el login se considera rechazado.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default, alias = "usuario")]
    pub user: Option<User>,
    #[serde(default)]
    pub token: Option<String>,
}
