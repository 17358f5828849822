use std::path::PathBuf;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Transcription provider and audio upload configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// API key for the transcription provider
    pub api_key: SecretString,
    /// Base URL override for OpenAI-compatible deployments
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Transcription model
    #[serde(default = "default_model")]
    pub model: String,
    /// Default language hint (ISO 639-1), overridable per request
    #[serde(default)]
    pub language: Option<String>,
    /// Directory holding uploaded audio awaiting transcription
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
    /// Maximum accepted upload size in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_model() -> String {
    "whisper-1".to_owned()
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("temp")
}

const fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}
