//! HTTP client for the catalog backend's bulk product creation endpoint.
//!
//! The endpoint answers 200 when every product was created and 207 when some
//! failed; both are parsed as a [`BulkCreateResponse`]. Any other status is an
//! error carrying the backend's message when it sent one.

use std::time::Duration;

use atelier_core::{AppConfig, BulkCreateRequest, BulkCreateResponse, ProductDraft};
use reqwest::{Client, Url};

use crate::error::ImportError;

const GENERIC_FAILURE: &str = "failed to upload products";

/// Client for `POST {endpoint}` with body `{ "products": [...] }`.
///
/// Requests are not retried: a failed upload is reported to the operator,
/// who can start the import again.
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Creates a client for the bulk endpoint configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::InvalidEndpoint`] if the configured URL does not
    /// parse, or [`ImportError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, ImportError> {
        Self::with_endpoint(
            &config.bulk_create_url(),
            config.http_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client for an explicit endpoint URL (used by tests against
    /// a mock server).
    ///
    /// `timeout_secs = None` leaves requests without a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::InvalidEndpoint`] if `endpoint` does not parse,
    /// or [`ImportError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_endpoint(
        endpoint: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, ImportError> {
        let endpoint = Url::parse(endpoint).map_err(|e| ImportError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits `drafts` to the bulk creation endpoint.
    ///
    /// # Errors
    ///
    /// - [`ImportError::Http`] on network or TLS failure.
    /// - [`ImportError::Endpoint`] for any non-2xx status.
    /// - [`ImportError::Deserialize`] if a 2xx body is not the expected JSON.
    pub async fn create_products(
        &self,
        drafts: &[ProductDraft],
    ) -> Result<BulkCreateResponse, ImportError> {
        tracing::debug!(count = drafts.len(), endpoint = %self.endpoint, "submitting product batch");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&BulkCreateRequest { products: drafts })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ImportError::Endpoint {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        if body.trim().is_empty() {
            return Ok(BulkCreateResponse::default());
        }

        serde_json::from_str::<BulkCreateResponse>(&body).map_err(|e| ImportError::Deserialize {
            context: format!("bulk create response from {}", self.endpoint),
            source: e,
        })
    }
}

/// Pulls `error` (or `message`) out of a JSON error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "message"]
                .iter()
                .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
                .map(str::to_owned)
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_error_field() {
        assert_eq!(
            error_message(r#"{"error": "unauthorized", "message": "other"}"#),
            "unauthorized"
        );
    }

    #[test]
    fn error_message_falls_back_to_message_field() {
        assert_eq!(error_message(r#"{"message": "bad batch"}"#), "bad batch");
    }

    #[test]
    fn error_message_generic_for_non_json() {
        assert_eq!(error_message("<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(error_message(r#"{"error": ""}"#), GENERIC_FAILURE);
        assert_eq!(error_message(r#"{"error": 42}"#), GENERIC_FAILURE);
    }

    #[test]
    fn with_endpoint_rejects_unparseable_url() {
        let result = CatalogClient::with_endpoint("not a url", None, "test/0.1");
        assert!(matches!(result, Err(ImportError::InvalidEndpoint { .. })));
    }
}
