use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::EntityId;

/// Registro del backend (estudiante, personal, apoderado, asistencia...).
/// El cliente no interpreta sus campos.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

pub type Student = Record;
pub type StaffMember = Record;
pub type Guardian = Record;
pub type AttendanceRecord = Record;
pub type Justification = Record;

/// Estadísticas agregadas de asistencia (forma definida por el backend)
pub type AttendanceStats = Map<String, Value>;

/// Cuerpo de POST /asistencia/entrada y /asistencia/salida
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    pub student_id: EntityId,
    pub recorded_by: EntityId,
}

/// Cuerpo de POST /justificaciones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JustificationRequest {
    pub student_id: EntityId,
    pub date: NaiveDate,
    pub reason: String,
    pub recorded_by: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn marks_serialize_in_camel_case() {
        let mark = AttendanceMark {
            student_id: EntityId::Number(12),
            recorded_by: EntityId::from("prof-3"),
        };
        assert_eq!(
            serde_json::to_value(&mark).unwrap(),
            json!({"studentId": 12, "recordedBy": "prof-3"})
        );
    }

    #[test]
    fn justification_date_is_iso() {
        let request = JustificationRequest {
            student_id: EntityId::Number(5),
            date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            reason: "Cita médica".to_string(),
            recorded_by: EntityId::Number(9),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"studentId": 5, "date": "2024-03-08", "reason": "Cita médica", "recordedBy": 9})
        );
    }

    #[test]
    fn record_without_id_keeps_fields() {
        let record: Record = serde_json::from_value(json!({"nombre": "Luis", "grado": 4})).unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.get("grado"), Some(&json!(4)));
    }
}
