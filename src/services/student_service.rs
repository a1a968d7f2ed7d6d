use std::fmt::Display;

use serde::Serialize;

use crate::error::ApiError;
use crate::models::Student;
use crate::services::api_client::{path_segment, ApiClient, RequestOptions};

/// Estudiantes: /estudiantes
pub struct StudentsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StudentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Student>, ApiError> {
        self.client
            .dispatch_list("/estudiantes", RequestOptions::get())
            .await
    }

    pub async fn by_tutor(&self, tutor_id: impl Display) -> Result<Vec<Student>, ApiError> {
        let path = format!("/estudiantes/tutor/{}", path_segment(tutor_id));
        self.client.dispatch_list(&path, RequestOptions::get()).await
    }

    pub async fn by_guardian(&self, guardian_id: impl Display) -> Result<Vec<Student>, ApiError> {
        let path = format!("/estudiantes/apoderado/{}", path_segment(guardian_id));
        self.client.dispatch_list(&path, RequestOptions::get()).await
    }

    pub async fn get(&self, id: impl Display) -> Result<Student, ApiError> {
        let path = format!("/estudiantes/{}", path_segment(id));
        self.client.dispatch_as(&path, RequestOptions::get()).await
    }

    pub async fn create<B>(&self, student: &B) -> Result<Student, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::post().json(student)?;
        self.client.dispatch_as("/estudiantes", options).await
    }

    /// Reemplazo completo del estudiante
    pub async fn update<B>(&self, id: impl Display, student: &B) -> Result<Student, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/estudiantes/{}", path_segment(id));
        let options = RequestOptions::put().json(student)?;
        self.client.dispatch_as(&path, options).await
    }

    pub async fn delete(&self, id: impl Display) -> Result<(), ApiError> {
        let path = format!("/estudiantes/{}", path_segment(id));
        self.client.dispatch(&path, RequestOptions::delete()).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::EntityId;
    use crate::services::api_client::Method;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn list_routes() {
        let (client, fake) = FakeTransport::client();
        let students = client.students();

        fake.respond_json(json!([{"id": 1, "nombre": "Luis"}]));
        let all = block_on(students.list()).unwrap();
        assert_eq!(fake.last_path(), "/estudiantes");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(EntityId::Number(1)));

        fake.respond_json(json!([]));
        block_on(students.by_tutor(4)).unwrap();
        assert_eq!(fake.last_path(), "/estudiantes/tutor/4");

        fake.respond_json(json!([]));
        block_on(students.by_guardian("ap-9")).unwrap();
        assert_eq!(fake.last_path(), "/estudiantes/apoderado/ap-9");

        assert!(fake.requests().iter().all(|r| r.method == Method::Get));
    }

    #[test]
    fn get_one() {
        let (client, fake) = FakeTransport::client();
        fake.respond_json(json!({"id": 8, "nombre": "Marta", "grado": "5B"}));

        let student = block_on(client.students().get(8)).unwrap();
        assert_eq!(fake.last_path(), "/estudiantes/8");
        assert_eq!(student.get("grado"), Some(&json!("5B")));
    }

    #[test]
    fn create_and_update_send_payload() {
        let (client, fake) = FakeTransport::client();
        let payload = json!({"nombre": "Pedro", "grado": "2A"});

        fake.respond_json(json!({"id": 30, "nombre": "Pedro", "grado": "2A"}));
        let created = block_on(client.students().create(&payload)).unwrap();
        assert_eq!(fake.last_request().method, Method::Post);
        assert_eq!(fake.last_path(), "/estudiantes");
        assert_eq!(fake.last_body(), Some(payload.clone()));
        assert_eq!(created.id, Some(EntityId::Number(30)));

        fake.respond_json(json!({"id": 30}));
        block_on(client.students().update(30, &payload)).unwrap();
        assert_eq!(fake.last_request().method, Method::Put);
        assert_eq!(fake.last_path(), "/estudiantes/30");
        assert_eq!(fake.last_body(), Some(payload));
    }

    #[test]
    fn delete_accepts_empty_body() {
        let (client, fake) = FakeTransport::client();
        fake.respond(204, "");

        block_on(client.students().delete(30)).unwrap();
        assert_eq!(fake.last_request().method, Method::Delete);
        assert_eq!(fake.last_path(), "/estudiantes/30");
        assert_eq!(fake.last_request().body, None);
    }

    #[test]
    fn empty_list_responses_are_empty_vecs() {
        let (client, fake) = FakeTransport::client();
        let students = client.students();

        fake.respond(200, "");
        assert!(block_on(students.list()).unwrap().is_empty());
        fake.respond(200, "");
        assert!(block_on(students.by_tutor(4)).unwrap().is_empty());
        fake.respond(204, "");
        assert!(block_on(students.by_guardian("ap-9")).unwrap().is_empty());
    }
}
