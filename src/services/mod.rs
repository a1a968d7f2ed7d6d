pub mod api_client;
pub mod auth_service;
pub mod student_service;
pub mod attendance_service;
pub mod staff_service;
pub mod guardian_service;
pub mod justification_service;

#[cfg(test)]
pub(crate) mod testing;

pub use api_client::{
    ApiClient, ApiRequest, FetchTransport, HttpResponse, HttpTransport, Method, RequestOptions,
};
pub use auth_service::AuthApi;
pub use student_service::StudentsApi;
pub use attendance_service::AttendanceApi;
pub use staff_service::StaffApi;
pub use guardian_service::GuardiansApi;
pub use justification_service::JustificationsApi;
