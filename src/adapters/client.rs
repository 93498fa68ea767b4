use reqwest::header::ACCEPT;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::utils::error::{IntercomError, Result};

/// Thin wrapper around `reqwest::Client` that attaches auth, encodes query
/// parameters, decodes JSON bodies and maps non-2xx statuses into the error
/// taxonomy. Cheap to clone; one instance is shared by all resource APIs.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token,
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("GET {}", path);
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        self.decode(response).await
    }

    pub(crate) async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        tracing::debug!("GET {} (with query)", path);
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;
        self.decode(response).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!("POST {}", path);
        let response = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        self.decode(response).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!("DELETE {}", path);
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        self.decode(response).await
    }

    /// DELETE where the response body carries nothing the caller needs.
    pub(crate) async fn delete_discard(&self, path: &str) -> Result<()> {
        tracing::debug!("DELETE {}", path);
        let response = self
            .http
            .delete(self.url(path))
            .bearer_auth(&self.access_token)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), &body))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        tracing::debug!("API response status: {}", status);
        let body = response.text().await?;
        if status.is_success() {
            return Ok(serde_json::from_str(&body)?);
        }
        Err(status_error(status.as_u16(), &body))
    }
}

/// The envelope the API wraps failures in:
/// `{"type":"error.list","errors":[{"code":...,"message":...}]}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Vec<ErrorItem>,
}

#[derive(Debug, Deserialize)]
struct ErrorItem {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

fn status_error(status: u16, body: &str) -> IntercomError {
    let message = error_message(body);
    match status {
        404 => IntercomError::NotFound { message },
        400 | 422 => IntercomError::Validation { message },
        _ => IntercomError::Api { status, message },
    }
}

fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        if !envelope.errors.is_empty() {
            return envelope
                .errors
                .iter()
                .map(|e| {
                    if e.code.is_empty() {
                        e.message.clone()
                    } else {
                        format!("{}: {}", e.code, e.message)
                    }
                })
                .collect::<Vec<_>>()
                .join("; ");
        }
    }
    if body.is_empty() {
        "empty response body".to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_envelope() {
        let body = r#"{"type":"error.list","errors":[{"code":"not_found","message":"Contact Not Found"}]}"#;
        assert_eq!(error_message(body), "not_found: Contact Not Found");
    }

    #[test]
    fn test_error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
        assert_eq!(error_message(""), "empty response body");
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(status_error(404, ""), IntercomError::NotFound { .. }));
        assert!(matches!(status_error(422, ""), IntercomError::Validation { .. }));
        assert!(matches!(status_error(400, ""), IntercomError::Validation { .. }));
        assert!(matches!(
            status_error(500, ""),
            IntercomError::Api { status: 500, .. }
        ));
    }
}
