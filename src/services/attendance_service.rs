use std::fmt::Display;

use chrono::NaiveDate;

use crate::error::ApiError;
use crate::models::{AttendanceMark, AttendanceRecord, AttendanceStats, EntityId};
use crate::services::api_client::{path_segment, ApiClient, RequestOptions};

/// Asistencia: /asistencia
pub struct AttendanceApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AttendanceApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Marcar entrada
    pub async fn check_in(
        &self,
        student_id: impl Into<EntityId>,
        recorded_by: impl Into<EntityId>,
    ) -> Result<AttendanceRecord, ApiError> {
        self.mark("/asistencia/entrada", student_id.into(), recorded_by.into())
            .await
    }

    /// Marcar salida
    pub async fn check_out(
        &self,
        student_id: impl Into<EntityId>,
        recorded_by: impl Into<EntityId>,
    ) -> Result<AttendanceRecord, ApiError> {
        self.mark("/asistencia/salida", student_id.into(), recorded_by.into())
            .await
    }

    async fn mark(
        &self,
        path: &str,
        student_id: EntityId,
        recorded_by: EntityId,
    ) -> Result<AttendanceRecord, ApiError> {
        let body = AttendanceMark {
            student_id,
            recorded_by,
        };
        let options = RequestOptions::post().json(&body)?;
        self.client.dispatch_as(path, options).await
    }

    /// Historial de un estudiante. El rango solo se envía si vienen ambas fechas.
    pub async fn by_student(
        &self,
        student_id: impl Display,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut path = format!("/asistencia/estudiante/{}", path_segment(student_id));
        if let (Some(start), Some(end)) = (start_date, end_date) {
            path.push_str(&format!("?startDate={}&endDate={}", start, end));
        }
        self.client.dispatch_list(&path, RequestOptions::get()).await
    }

    /// Asistencia del aula de un tutor, opcionalmente de un día
    pub async fn by_tutor(
        &self,
        tutor_id: impl Display,
        date: Option<NaiveDate>,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let mut path = format!("/asistencia/tutor/{}", path_segment(tutor_id));
        if let Some(date) = date {
            path.push_str(&format!("?date={}", date));
        }
        self.client.dispatch_list(&path, RequestOptions::get()).await
    }

    /// Estadísticas agregadas en un rango de fechas
    pub async fn stats(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<AttendanceStats, ApiError> {
        let path = format!(
            "/asistencia/estadisticas?startDate={}&endDate={}",
            start_date, end_date
        );
        self.client.dispatch_as(&path, RequestOptions::get()).await
    }
}
