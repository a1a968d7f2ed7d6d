use std::fmt::Display;

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{EntityId, Justification, JustificationRequest};
use crate::services::api_client::{path_segment, ApiClient, RequestOptions};

/// Justificaciones de inasistencia: /justificaciones
pub struct JustificationsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> JustificationsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn create(
        &self,
        student_id: impl Into<EntityId>,
        date: NaiveDate,
        reason: &str,
        recorded_by: impl Into<EntityId>,
    ) -> Result<Justification, ApiError> {
        let body = JustificationRequest {
            student_id: student_id.into(),
            date,
            reason: reason.to_string(),
            recorded_by: recorded_by.into(),
        };
        let options = RequestOptions::post().json(&body)?;
        self.client.dispatch_as("/justificaciones", options).await
    }

    pub async fn by_student(
        &self,
        student_id: impl Display,
    ) -> Result<Vec<Justification>, ApiError> {
        let path = format!("/justificaciones/estudiante/{}", path_segment(student_id));
        self.client.dispatch_list(&path, RequestOptions::get()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api_client::Method;
    use crate::services::testing::FakeTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn create_posts_full_justification() {
        let (client, fake) = FakeTransport::client();
        fake.respond_json(json!({"id": 55}));

        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        block_on(client.justifications().create(12_i64, date, "Enfermedad", 3_i64)).unwrap();

        assert_eq!(fake.last_request().method, Method::Post);
        assert_eq!(fake.last_path(), "/justificaciones");
        assert_eq!(
            fake.last_body(),
            Some(json!({
                "studentId": 12,
                "date": "2024-05-20",
                "reason": "Enfermedad",
                "recordedBy": 3
            }))
        );
    }

    #[test]
    fn by_student_lists() {
        let (client, fake) = FakeTransport::client();
        fake.respond_json(json!([{"id": 55, "motivo": "Enfermedad"}]));

        let list = block_on(client.justifications().by_student(12)).unwrap();
        assert_eq!(fake.last_path(), "/justificaciones/estudiante/12");
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn empty_list_response_is_empty_vec() {
        let (client, fake) = FakeTransport::client();
        fake.respond(200, "");

        let list = block_on(client.justifications().by_student(5_i64)).unwrap();
        assert!(list.is_empty());
    }
}
