// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Todas las peticiones pasan por `dispatch`: construye la petición, la envía
// por el transporte y normaliza la respuesta. Los grupos de recursos
// (estudiantes, asistencia...) solo arman rutas y cuerpos.
// ============================================================================

use std::fmt::Display;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::services::{
    AttendanceApi, AuthApi, GuardiansApi, JustificationsApi, StaffApi, StudentsApi,
};

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Opciones de una llamada: método, cabeceras extra y cuerpo ya serializado
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn post() -> Self {
        Self::new(Method::Post)
    }

    pub fn put() -> Self {
        Self::new(Method::Put)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn bearer(self, token: &str) -> Self {
        self.header("Authorization", &format!("Bearer {}", token))
    }

    /// Serializa el cuerpo a JSON. Es el único camino para adjuntar un cuerpo.
    pub fn json<T>(mut self, body: &T) -> Result<Self, ApiError>
    where
        T: Serialize + ?Sized,
    {
        self.body = Some(serde_json::to_string(body).map_err(ApiError::Encode)?);
        Ok(self)
    }
}

/// Petición lista para enviar
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Valor de una cabecera (nombre sin distinguir mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capa de red. Un fallo aquí es un ApiError::Transport.
#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError>;
}

/// fetch() del navegador vía gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<HttpResponse, ApiError> {
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        let builder = request
            .headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name, value));

        let prepared = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(ApiError::transport)?;

        let response = prepared.send().await.map_err(ApiError::transport)?;
        let status = response.status();
        let body = response.text().await.map_err(ApiError::transport)?;

        Ok(HttpResponse { status, body })
    }
}

/// Segmento de ruta codificado (ids, roles)
pub(crate) fn path_segment(value: impl Display) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_transport(CONFIG.backend_url.clone(), Rc::new(FetchTransport))
    }

    pub fn with_transport(base_url: impl Into<String>, transport: Rc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Arma la petición: cabeceras por defecto + cabeceras del llamador (estas ganan)
    pub fn build_request(&self, path: &str, options: RequestOptions) -> ApiRequest {
        let mut headers = vec![("Accept".to_string(), APPLICATION_JSON.to_string())];
        if options.body.is_some() {
            headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
        }

        for (name, value) in options.headers {
            match headers
                .iter_mut()
                .find(|(key, _)| key.eq_ignore_ascii_case(&name))
            {
                Some(existing) => existing.1 = value,
                None => headers.push((name, value)),
            }
        }

        ApiRequest {
            method: options.method,
            url: format!("{}{}", self.base_url, path),
            headers,
            body: options.body,
        }
    }

    /// Envía la petición y devuelve el JSON de la respuesta.
    /// Un cuerpo vacío en una respuesta 2xx se devuelve como objeto vacío.
    pub async fn dispatch(&self, path: &str, options: RequestOptions) -> Result<Value, ApiError> {
        let request = self.build_request(path, options);
        log::debug!("🌐 [API] {} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("❌ [API] Error de red en {}: {}", path, e);
            e
        })?;

        if !response.is_success() {
            log::error!("❌ [API] HTTP {} en {}", response.status, path);
            return Err(ApiError::Request {
                status: response.status,
                body: response.body,
            });
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_str(&response.body).map_err(|source| {
            log::error!("❌ [API] Respuesta no JSON en {}: {}", path, source);
            ApiError::Decode {
                source,
                body: response.body,
            }
        })
    }

    /// `dispatch` + conversión al tipo esperado
    pub async fn dispatch_as<T>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let value = self.dispatch(path, options).await?;
        T::deserialize(&value).map_err(|source| ApiError::Decode {
            source,
            body: value.to_string(),
        })
    }

    /// `dispatch_as` para endpoints que devuelven un arreglo.
    /// Una respuesta 2xx sin cuerpo es una lista vacía.
    pub async fn dispatch_list<T>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let value = self.dispatch(path, options).await?;
        if value.as_object().is_some_and(Map::is_empty) {
            return Ok(Vec::new());
        }
        Vec::<T>::deserialize(&value).map_err(|source| ApiError::Decode {
            source,
            body: value.to_string(),
        })
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn students(&self) -> StudentsApi<'_> {
        StudentsApi::new(self)
    }

    pub fn attendance(&self) -> AttendanceApi<'_> {
        AttendanceApi::new(self)
    }

    pub fn staff(&self) -> StaffApi<'_> {
        StaffApi::new(self)
    }

    pub fn guardians(&self) -> GuardiansApi<'_> {
        GuardiansApi::new(self)
    }

    pub fn justifications(&self) -> JustificationsApi<'_> {
        JustificationsApi::new(self)
    }
}
