//! HTTP client for network-based API calls
//!
//! Every response body is read once as text and decoded by the pure
//! functions at the bottom of this module, so the decode contract is unit
//! testable without a server. No retry, no backoff: a failed call fails
//! once and surfaces to the caller.

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, multipart::Form};
use serde::de::DeserializeOwned;
use shared::response::{Ack, ListPayload};

/// HTTP client for making network requests to the Plateful backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value; empty tokens are treated as absent
    fn auth_header(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| format!("Bearer {}", t))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ClientResult<(StatusCode, String)> {
        let mut request = request;
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }

    /// GET a list endpoint, accepting a bare array or a `{data}` envelope
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> ClientResult<Vec<T>> {
        let (status, body) = self.send(self.client.get(self.url(path))).await?;
        let payload: ListPayload<T> = decode_payload(status, &body, fallback)?;
        if !payload.is_success() {
            return Err(ClientError::Rejected(fallback.to_string()));
        }
        Ok(payload.into_items())
    }

    /// PUT a JSON body, expecting a mutation ack
    pub async fn put_ack<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> ClientResult<()> {
        let (status, text) = self.send(self.client.put(self.url(path)).json(body)).await?;
        decode_ack(status, &text, fallback)
    }

    /// DELETE by path, expecting a mutation ack
    pub async fn delete_ack(&self, path: &str, fallback: &str) -> ClientResult<()> {
        let (status, text) = self.send(self.client.delete(self.url(path))).await?;
        decode_ack(status, &text, fallback)
    }

    /// POST a multipart form, expecting a mutation ack
    pub async fn post_multipart_ack(
        &self,
        path: &str,
        form: Form,
        fallback: &str,
    ) -> ClientResult<()> {
        let (status, text) = self
            .send(self.client.post(self.url(path)).multipart(form))
            .await?;
        decode_ack(status, &text, fallback)
    }
}

/// Decode a response body that was read once as text.
///
/// - non-2xx is a failure even if the body parses; the message comes from the
///   body's `message` field when present, else `fallback`; 401 maps to
///   `Unauthorized`
/// - a 2xx body that fails to parse is `MalformedBody`, uniformly, even
///   though the status code said success
pub(crate) fn decode_payload<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    fallback: &str,
) -> ClientResult<T> {
    if !status.is_success() {
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::Unauthorized);
        }
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        return Err(ClientError::Rejected(message));
    }

    serde_json::from_str(body).map_err(|_| ClientError::MalformedBody)
}

/// Decode a mutation ack; `success: false` on a 2xx status is a rejection
pub(crate) fn decode_ack(status: StatusCode, body: &str, fallback: &str) -> ClientResult<()> {
    let ack: Ack = decode_payload(status, body, fallback)?;
    if ack.success {
        return Ok(());
    }
    let message = ack
        .failure_message()
        .unwrap_or(fallback)
        .to_string();
    Err(ClientError::Rejected(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MenuItem;

    const FALLBACK: &str = "operation failed";

    #[test]
    fn malformed_body_on_http_200_is_a_parse_failure() {
        let result: ClientResult<ListPayload<MenuItem>> =
            decode_payload(StatusCode::OK, "<html>oops</html>", FALLBACK);
        assert!(matches!(result, Err(ClientError::MalformedBody)));
    }

    #[test]
    fn non_2xx_uses_body_message_when_present() {
        let result: ClientResult<Ack> = decode_payload(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"message":"database unavailable"}"#,
            FALLBACK,
        );
        match result {
            Err(ClientError::Rejected(message)) => assert_eq!(message, "database unavailable"),
            other => panic!("expected Rejected, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn non_2xx_without_message_falls_back_per_operation() {
        let result: ClientResult<Ack> =
            decode_payload(StatusCode::BAD_GATEWAY, "<html>oops</html>", FALLBACK);
        match result {
            Err(ClientError::Rejected(message)) => assert_eq!(message, FALLBACK),
            other => panic!("expected Rejected, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn unauthorized_maps_to_its_own_kind() {
        let result: ClientResult<Ack> =
            decode_payload(StatusCode::UNAUTHORIZED, "{}", FALLBACK);
        assert!(matches!(result, Err(ClientError::Unauthorized)));
    }

    #[test]
    fn success_false_on_2xx_is_rejected_with_its_message() {
        let result = decode_ack(
            StatusCode::OK,
            r#"{"success":false,"message":"No such order"}"#,
            FALLBACK,
        );
        match result {
            Err(ClientError::Rejected(message)) => assert_eq!(message, "No such order"),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn success_false_without_message_uses_fallback() {
        let result = decode_ack(StatusCode::OK, r#"{"success":false}"#, FALLBACK);
        match result {
            Err(ClientError::Rejected(message)) => assert_eq!(message, FALLBACK),
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[test]
    fn ack_without_success_field_counts_as_success() {
        assert!(decode_ack(StatusCode::OK, r#"{"message":"deleted"}"#, FALLBACK).is_ok());
    }
}
