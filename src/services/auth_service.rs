use serde_json::Value;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse};
use crate::services::api_client::{ApiClient, RequestOptions};

/// Autenticación: /auth/*
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        log::info!("🔐 [AUTH] Login para: {}", email);
        let options = RequestOptions::post().json(&body)?;
        self.client.dispatch_as("/auth/login", options).await
    }

    /// GET /auth/verify con cabecera Bearer. La forma de la respuesta la define el backend.
    pub async fn verify_token(&self, token: &str) -> Result<Value, ApiError> {
        self.client
            .dispatch("/auth/verify", RequestOptions::get().bearer(token))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Role;
    use crate::services::api_client::Method;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn login_posts_credentials() {
        let (client, fake) = FakeTransport::client();
        fake.respond_json(json!({"user": {"id": 1, "rol": "tutor", "nombre": "Rosa"}}));

        let response = block_on(client.auth().login("rosa@colegio.edu", "secreto")).unwrap();

        let request = fake.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(fake.last_path(), "/auth/login");
        assert_eq!(
            fake.last_body(),
            Some(json!({"email": "rosa@colegio.edu", "password": "secreto"}))
        );
        assert_eq!(response.user.unwrap().role, Role::Tutor);
    }

    #[test]
    fn rejected_login_surfaces_status() {
        let (client, fake) = FakeTransport::client();
        fake.respond(401, "Credenciales inválidas");

        let err = block_on(client.auth().login("x@colegio.edu", "mal")).unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn verify_sends_bearer_header() {
        let (client, fake) = FakeTransport::client();
        fake.respond_json(json!({"valido": true}));

        let value = block_on(client.auth().verify_token("tok-123")).unwrap();

        let request = fake.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(fake.last_path(), "/auth/verify");
        assert_eq!(request.header("Authorization"), Some("Bearer tok-123"));
        assert_eq!(value, json!({"valido": true}));
    }
}
