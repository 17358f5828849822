use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use scribe_config::SttConfig;

use crate::error::SttError;
use crate::types::{TranscriptionRequest, TranscriptionResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for an OpenAI-compatible hosted transcription API
pub struct WhisperClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

#[derive(serde::Deserialize)]
struct WireResponse {
    text: String,
}

impl WhisperClient {
    /// Create the client from provider configuration
    pub fn new(config: &SttConfig) -> Self {
        let base_url = config.base_url.as_ref().map_or_else(
            || DEFAULT_BASE_URL.to_owned(),
            |url| url.as_str().trim_end_matches('/').to_owned(),
        );

        Self {
            client: Client::new(),
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Transcribe audio to text
    ///
    /// # Errors
    ///
    /// Returns `SttError` when the provider cannot be reached, rejects the
    /// request, or responds with something unparseable.
    pub async fn transcribe(&self, request: TranscriptionRequest) -> Result<TranscriptionResponse, SttError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!(bytes = request.audio.len(), model = %self.model, "transcription request");

        let mut form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(request.audio)
                    .file_name(request.filename)
                    .mime_str(&request.content_type)
                    .map_err(|e| SttError::InvalidRequest(format!("invalid content type: {e}")))?,
            )
            .text("model", self.model.clone());

        if let Some(language) = request.language {
            form = form.text("language", language);
        }

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "transcription request failed");
                SttError::Connection(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "unknown error".to_owned());

            tracing::error!(%status, message, "transcription provider error");

            return Err(match status.as_u16() {
                401 => SttError::AuthenticationFailed,
                400 => SttError::InvalidRequest(message),
                code => SttError::Provider { status: code, message },
            });
        }

        let result: WireResponse = response
            .json()
            .await
            .map_err(|e| SttError::InvalidResponse(e.to_string()))?;

        tracing::debug!("transcription complete");

        Ok(TranscriptionResponse { text: result.text })
    }
}
