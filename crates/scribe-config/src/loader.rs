use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a configured provider has an empty API key or
    /// an unusable limit
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(ref stt) = self.stt {
            if stt.api_key.expose_secret().is_empty() {
                anyhow::bail!("stt.api_key must not be empty");
            }
            if stt.max_upload_bytes == 0 {
                anyhow::bail!("stt.max_upload_bytes must be greater than 0");
            }
        }

        if let Some(ref notes) = self.notes {
            if notes.api_key.expose_secret().is_empty() {
                anyhow::bail!("notes.api_key must not be empty");
            }
            if notes.max_tokens == 0 {
                anyhow::bail!("notes.max_tokens must be greater than 0");
            }
            if !(0.0..=2.0).contains(&notes.temperature) {
                anyhow::bail!("notes.temperature must be between 0 and 2");
            }
        }

        Ok(())
    }
}
