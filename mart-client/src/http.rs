//! HTTP transport for the Etimad Mart REST API

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionManager;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Envelope keys that may sit next to `data` in a wrapped success body
const ENVELOPE_KEYS: &[&str] = &["data", "success", "message", "code", "count", "total", "pagination"];

/// HTTP client attaching the session's bearer token to every request
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
    session: SessionManager,
}

impl HttpClient {
    pub fn new(config: ClientConfig, session: SessionManager) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            config,
            session,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        self.config.url(path)
    }

    async fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(token) = self.session.token().await {
            req = req.bearer_auth(token);
        }
        req
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::GET, path).await;
        self.send(req).await
    }

    /// GET with a serialized query string
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> ClientResult<T> {
        let req = self.request(Method::GET, path).await.query(query);
        self.send(req).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::POST, path).await.json(body);
        self.send(req).await
    }

    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::POST, path).await;
        self.send(req).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PUT, path).await.json(body);
        self.send(req).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let req = self.request(Method::PATCH, path).await.json(body);
        self.send(req).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let req = self.request(Method::DELETE, path).await;
        self.send(req).await
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let url = response.url().path().to_string();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(self.handle_failure(status, &url, &text).await);
        }

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", url, e)))?
        };

        if body.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or_default(),
                details: body.get("details").cloned(),
            });
        }

        serde_json::from_value(unwrap_data(body))
            .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", url, e)))
    }

    async fn handle_failure(&self, status: StatusCode, url: &str, text: &str) -> ClientError {
        let body: Option<Value> = serde_json::from_str(text).ok();
        let message = body
            .as_ref()
            .and_then(error_message)
            .unwrap_or_else(|| text.trim().to_string());

        tracing::debug!(status = status.as_u16(), url, message = %message, "request failed");

        match status {
            StatusCode::UNAUTHORIZED => {
                if self.session.is_authenticated().await {
                    tracing::info!("token rejected, clearing session");
                }
                self.session.clear().await;
                ClientError::Unauthorized
            }
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(message)
            }
            _ if body.is_some() => ClientError::Api {
                status: status.as_u16(),
                message,
                details: body.and_then(|b| b.get("details").cloned()),
            },
            _ => ClientError::Internal(format!("{} {}", status, message)),
        }
    }
}

/// `message` or `error` from an error body
fn error_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

/// Strip a `{ "data": ... }` envelope, leaving bare bodies untouched
fn unwrap_data(body: Value) -> Value {
    match body {
        Value::Object(mut map)
            if map.contains_key("data") && map.keys().all(|k| ENVELOPE_KEYS.contains(&k.as_str())) =>
        {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
