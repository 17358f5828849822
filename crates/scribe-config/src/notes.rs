use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Note generation provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotesConfig {
    /// API key for the generation provider
    pub api_key: SecretString,
    /// Base URL override for OpenAI-compatible deployments
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Chat completion model
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature; kept low so the model extracts rather than invents
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Completion token cap
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Department label used when a request does not supply one
    #[serde(default = "default_department")]
    pub default_department: String,
}

fn default_model() -> String {
    "gpt-4o-mini".to_owned()
}

const fn default_temperature() -> f64 {
    0.1
}

const fn default_max_tokens() -> u32 {
    800
}

fn default_department() -> String {
    "internal medicine".to_owned()
}
