use std::fmt::Display;

use serde::Serialize;

use crate::error::ApiError;
use crate::models::Guardian;
use crate::services::api_client::{path_segment, ApiClient, RequestOptions};

/// Apoderados: /apoderados
pub struct GuardiansApi<'a> {
    client: &'a ApiClient,
}

impl<'a> GuardiansApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Guardian>, ApiError> {
        self.client
            .dispatch_list("/apoderados", RequestOptions::get())
            .await
    }

    pub async fn get(&self, id: impl Display) -> Result<Guardian, ApiError> {
        let path = format!("/apoderados/{}", path_segment(id));
        self.client.dispatch_as(&path, RequestOptions::get()).await
    }

    pub async fn create<B>(&self, guardian: &B) -> Result<Guardian, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::post().json(guardian)?;
        self.client.dispatch_as("/apoderados", options).await
    }
}

#[cfg(test)]
mod tests {
    use crate::services::api_client::Method;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn guardian_routes() {
        let (client, fake) = FakeTransport::client();

        fake.respond_json(json!([]));
        block_on(client.guardians().list()).unwrap();
        assert_eq!(fake.last_path(), "/apoderados");

        fake.respond_json(json!({"id": 4, "nombre": "Elena"}));
        let guardian = block_on(client.guardians().get(4)).unwrap();
        assert_eq!(fake.last_path(), "/apoderados/4");
        assert_eq!(guardian.get("nombre"), Some(&json!("Elena")));

        let payload = json!({"nombre": "Elena", "telefono": "+56 9 1234 5678"});
        fake.respond_json(json!({"id": 4}));
        block_on(client.guardians().create(&payload)).unwrap();
        assert_eq!(fake.last_request().method, Method::Post);
        assert_eq!(fake.last_body(), Some(payload));
    }

    #[test]
    fn missing_guardian_is_request_error() {
        let (client, fake) = FakeTransport::client();
        fake.respond(404, "Apoderado no encontrado");

        let err = block_on(client.guardians().get(404)).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("Apoderado no encontrado"));
    }

    #[test]
    fn empty_list_response_is_empty_vec() {
        let (client, fake) = FakeTransport::client();
        fake.respond(200, "");

        let guardians = block_on(client.guardians().list()).unwrap();
        assert!(guardians.is_empty());
        assert_eq!(fake.last_path(), "/apoderados");
    }
}
