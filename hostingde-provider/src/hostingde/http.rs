//! hosting.de request dispatch and envelope handling

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{Credentialed, ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::{redact_request_body, truncate_for_log};

use super::HostingdeProvider;
use super::types::{ApiError, ApiResponse};

impl From<ApiError> for RawApiError {
    fn from(error: ApiError) -> Self {
        Self {
            code: error.code,
            message: error.text,
            context_object: error.context_object.filter(|s| !s.is_empty()),
            context_path: error.context_path.filter(|s| !s.is_empty()),
            value: error.value.filter(|s| !s.is_empty()),
            details: error.details,
        }
    }
}

impl HostingdeProvider {
    /// POST `request` to `endpoint` and return the envelope's `response` payload.
    ///
    /// Credentials are attached here, immediately before serialization.
    pub(crate) async fn call<Req, T>(
        &self,
        endpoint: &str,
        request: Req,
        ctx: ErrorContext,
        max_retries: u32,
    ) -> Result<T>
    where
        Req: Credentialed + Serialize,
        T: DeserializeOwned,
    {
        let request = request.with_credentials(&self.credentials);
        let body =
            serde_json::to_value(&request).map_err(|e| ProviderError::SerializationError {
                provider: self.provider_name().to_string(),
                detail: e.to_string(),
            })?;

        log::debug!(
            "[{}] Request Body: {}",
            self.provider_name(),
            redact_request_body(&body)
        );

        let url = format!("{}/{endpoint}", self.base_url);
        let request_builder = self.client.post(&url).json(&body);

        let (status, response_text) = HttpUtils::execute_request_with_retry(
            request_builder,
            self.provider_name(),
            endpoint,
            max_retries,
        )
        .await?;

        if !(200..300).contains(&status) {
            return Err(self.http_status_error(status, &response_text, ctx));
        }

        let envelope: ApiResponse<T> = HttpUtils::parse_json(&response_text, self.provider_name())?;
        self.unwrap_envelope(endpoint, envelope, ctx)
    }

    /// Turn a successful envelope into its payload, or its first error into a
    /// [`ProviderError`].
    pub(crate) fn unwrap_envelope<T>(
        &self,
        endpoint: &str,
        envelope: ApiResponse<T>,
        ctx: ErrorContext,
    ) -> Result<T> {
        if let Some(metadata) = &envelope.metadata {
            log::debug!(
                "[{}] {endpoint} transaction {}",
                self.provider_name(),
                metadata.server_transaction_id
            );
        }
        for warning in &envelope.warnings {
            log::warn!("[{}] {endpoint}: {warning}", self.provider_name());
        }

        match envelope.status.as_str() {
            "error" => {
                let mut errors = envelope.errors.into_iter();
                let raw = errors.next().map_or_else(
                    || RawApiError::new(format!("{endpoint} failed without error details")),
                    RawApiError::from,
                );
                for extra in errors {
                    log::warn!(
                        "[{}] {endpoint}: additional error {:?}: {}",
                        self.provider_name(),
                        extra.code,
                        extra.text
                    );
                }
                log::error!("[{}] {endpoint} API error: {}", self.provider_name(), raw.message);
                Err(self.map_error(raw, ctx))
            }
            status => {
                if status == "pending" {
                    log::info!("[{}] {endpoint} accepted, still pending", self.provider_name());
                }
                envelope.response.ok_or_else(|| {
                    self.parse_error(format!("{endpoint}: response is missing the `response` field"))
                })
            }
        }
    }

    fn http_status_error(&self, status: u16, response_text: &str, ctx: ErrorContext) -> ProviderError {
        match status {
            401 => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(truncate_for_log(response_text)),
            },
            403 => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(truncate_for_log(response_text)),
            },
            _ => {
                // Error envelopes sometimes come with a non-2xx status
                if let Ok(envelope) =
                    serde_json::from_str::<ApiResponse<serde_json::Value>>(response_text)
                    && let Some(error) = envelope.errors.into_iter().next()
                {
                    return self.map_error(error.into(), ctx);
                }
                self.api_error(RawApiError::new(format!(
                    "HTTP {status}: {}",
                    truncate_for_log(response_text)
                )))
            }
        }
    }
}
