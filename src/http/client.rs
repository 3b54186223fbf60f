use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::Form;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::http::error::{error_message, ApiError};
use crate::models::AuthToken;

/// How a request body is encoded on the wire.
///
/// JSON calls always carry `Content-Type: application/json`. Multipart calls
/// leave the header to `reqwest` so the boundary parameter is set correctly.
pub enum RequestBody {
    /// No payload; still sent with the JSON content type.
    Empty,
    Json(Value),
    Multipart(Form),
}

impl RequestBody {
    /// Encode a serializable payload as a JSON body.
    pub fn json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        serde_json::to_value(body)
            .map(RequestBody::Json)
            .map_err(ApiError::Encode)
    }
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestBody::Empty => write!(f, "Empty"),
            RequestBody::Json(value) => f.debug_tuple("Json").field(value).finish(),
            RequestBody::Multipart(_) => write!(f, "Multipart(..)"),
        }
    }
}

/// Thin client over the content API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its pool.
/// No timeout or retry policy is layered on top of the transport defaults.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url` (scheme + host, optional path prefix).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Url::parse(base_url).map_err(|source| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            source,
        })?;

        let client = Client::builder().build().map_err(ApiError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        self.send(Method::GET, endpoint, RequestBody::Empty, token)
            .await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: RequestBody,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, endpoint, body, token).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: RequestBody,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        self.send(Method::PUT, endpoint, body, token).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        self.send(Method::DELETE, endpoint, RequestBody::Empty, token)
            .await
    }

    /// POST a multipart form (auth and upload endpoints).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, endpoint, RequestBody::Multipart(form), token)
            .await
    }

    /// Issue a request and decode the response. Every failure is logged
    /// with the endpoint before being returned.
    pub async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        let result = self.execute(method, endpoint, body, token).await;
        if let Err(err) = &result {
            tracing::error!(
                endpoint = %endpoint,
                kind = err.kind(),
                error = %err,
                "API request failed"
            );
        }
        result
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        token: Option<&AuthToken>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(method = %method, url = %url, body = ?body, "Sending API request");

        let mut builder = self.client.request(method, url);

        builder = match body {
            RequestBody::Empty => builder.header(CONTENT_TYPE, "application/json"),
            RequestBody::Json(value) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(value.to_string()),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        if let Some(token) = token {
            builder = builder.bearer_auth(token.expose());
        }

        let transport = |source| ApiError::Transport {
            endpoint: endpoint.to_string(),
            source,
        };

        let response = builder.send().await.map_err(transport)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport)?;

        decode_response(endpoint, status, &bytes)
    }
}

/// Turn a status + raw body into either the typed payload or an `ApiError`.
///
/// An empty body decodes as JSON `null`, so endpoints answering
/// `204 No Content` work with `Value` or `()` targets.
pub(crate) fn decode_response<T: DeserializeOwned>(
    endpoint: &str,
    status: StatusCode,
    bytes: &[u8],
) -> Result<T, ApiError> {
    let parsed: Result<Value, serde_json::Error> = if bytes.iter().all(u8::is_ascii_whitespace) {
        Ok(Value::Null)
    } else {
        serde_json::from_slice(bytes)
    };

    if !status.is_success() {
        return Err(ApiError::Http {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            message: error_message(parsed.as_ref().ok(), status.as_u16()),
        });
    }

    let unexpected = |source| ApiError::UnexpectedResponse {
        endpoint: endpoint.to_string(),
        source,
    };

    let value = parsed.map_err(unexpected)?;
    serde_json::from_value(value).map_err(unexpected)
}
