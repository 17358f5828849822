use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use scribe_config::NotesConfig;

use crate::error::NotesError;
use crate::prompt;
use crate::protocol::{ChatMessage, ChatRequest, ChatResponse};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for an OpenAI-compatible chat-completion API, fixed to the
/// extraction-only SOAP prompt
pub struct NotesClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    temperature: f64,
    max_tokens: u32,
}

impl NotesClient {
    /// Create the client from provider configuration
    pub fn new(config: &NotesConfig) -> Self {
        let base_url = config.base_url.as_ref().map_or_else(
            || DEFAULT_BASE_URL.to_owned(),
            |url| url.as_str().trim_end_matches('/').to_owned(),
        );

        Self {
            client: Client::new(),
            base_url,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Derive a SOAP note from an encounter transcript
    ///
    /// # Errors
    ///
    /// Returns `NotesError::Upstream` when the provider fails or returns an
    /// empty completion; an empty note is never presented as a result.
    pub async fn generate(&self, transcript: &str, department: &str) -> Result<String, NotesError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_owned(),
                    content: prompt::system_prompt(department),
                },
                ChatMessage {
                    role: "user".to_owned(),
                    content: prompt::user_prompt(transcript),
                },
            ],
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
        };

        tracing::debug!(
            model = %self.model,
            department,
            transcript_chars = transcript.len(),
            "note generation request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "note generation request failed");
                NotesError::Upstream(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            tracing::warn!(%status, "note generation provider returned error");

            return Err(NotesError::Upstream(format!("provider returned {status}: {body}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| NotesError::Upstream(format!("failed to parse response: {e}")))?;

        let note = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| NotesError::Upstream("provider returned an empty completion".to_owned()))?;

        tracing::debug!("note generation complete");

        Ok(note)
    }
}
