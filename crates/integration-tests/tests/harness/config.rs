//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::PathBuf;

use scribe_config::{Config, FormularyConfig, HealthConfig, NotesConfig, ServerConfig, SttConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    ///
    /// The formulary path points into `dir` so every test gets its own
    /// catalog file; audio and notes providers are off until configured.
    pub fn new(dir: &std::path::Path) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                stt: None,
                notes: None,
                formulary: FormularyConfig {
                    path: dir.join("medication_templates.json"),
                },
            },
        }
    }

    /// Point the catalog at an explicit file
    pub fn with_formulary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.formulary.path = path.into();
        self
    }

    /// Add a transcription provider pointed at a mock backend
    pub fn with_stt(mut self, base_url: &str, upload_dir: impl Into<PathBuf>) -> Self {
        self.config.stt = Some(SttConfig {
            api_key: SecretString::from("test-key"),
            base_url: Some(base_url.parse().expect("valid URL")),
            model: "whisper-1".to_owned(),
            language: None,
            upload_dir: upload_dir.into(),
            max_upload_bytes: 50 * 1024 * 1024,
        });
        self
    }

    /// Set the default language hint on the transcription provider
    pub fn with_stt_language(mut self, language: &str) -> Self {
        if let Some(ref mut stt) = self.config.stt {
            stt.language = Some(language.to_owned());
        }
        self
    }

    /// Add a note generation provider pointed at a mock backend
    pub fn with_notes(mut self, base_url: &str) -> Self {
        self.config.notes = Some(NotesConfig {
            api_key: SecretString::from("test-key"),
            base_url: Some(base_url.parse().expect("valid URL")),
            model: "gpt-4o-mini".to_owned(),
            temperature: 0.1,
            max_tokens: 800,
            default_department: "internal medicine".to_owned(),
        });
        self
    }

    /// Set the default department on the notes provider
    pub fn with_default_department(mut self, department: &str) -> Self {
        if let Some(ref mut notes) = self.config.notes {
            notes.default_department = department.to_owned();
        }
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
