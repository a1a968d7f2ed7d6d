// Transporte falso para tests: registra peticiones y devuelve respuestas encoladas

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::services::api_client::{ApiClient, ApiRequest, HttpResponse, HttpTransport};

pub(crate) const TEST_BASE_URL: &str = "http://test.local/api";

#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn client() -> (ApiClient, Rc<FakeTransport>) {
        let fake = Rc::new(FakeTransport::default());
        let transport: Rc<dyn HttpTransport> = fake.clone();
        (ApiClient::with_transport(TEST_BASE_URL, transport), fake)
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub(crate) fn respond_json(&self, value: Value) {
        self.respond(200, &value.to_string());
    }

    pub(crate) fn fail_with(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(message.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no se envió ninguna petición")
    }

    /// Ruta relativa de la última petición (sin la URL base)
    pub(crate) fn last_path(&self) -> String {
        self.last_request().url.trim_start_matches(TEST_BASE_URL).to_string()
    }

    pub(crate) fn last_body(&self) -> Option<Value> {
        self.last_request()
            .body
            .map(|body| serde_json::from_str(&body).expect("cuerpo no JSON"))
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ApiError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                message,
            ))),
            None => Ok(HttpResponse {
                status: 200,
                body: String::new(),
            }),
        }
    }
}
