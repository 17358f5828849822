use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::SttError;

/// Audio read back from the upload store
#[derive(Debug)]
pub struct StoredAudio {
    /// Raw audio data
    pub bytes: Vec<u8>,
    /// On-disk name, forwarded to the provider for format detection
    pub filename: String,
    /// Best-effort MIME type derived from the preserved extension
    pub content_type: String,
}

/// Volatile directory-backed store for uploaded audio
///
/// Files live only between upload and transcription; `take` removes the
/// file as it is consumed, so no audio outlives the request that uses it.
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create the store, creating the directory if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, SttError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(SttError::Storage)?;
        Ok(Self { dir })
    }

    /// Store uploaded bytes under a fresh opaque handle
    ///
    /// The extension of the client filename is preserved so the provider
    /// can infer the container format; everything else about the name is
    /// discarded.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String, SttError> {
        let id = match sanitized_extension(filename) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::write(self.dir.join(&id), bytes).await.map_err(SttError::Storage)?;

        tracing::debug!(id, bytes = bytes.len(), "stored uploaded audio");

        Ok(id)
    }

    /// Consume a stored upload, removing it from disk
    ///
    /// The handle is single-use: the file is removed before the caller sees
    /// the bytes, so the audio cannot outlive its one transcription.
    pub async fn take(&self, id: &str) -> Result<StoredAudio, SttError> {
        if !is_valid_handle(id) {
            return Err(SttError::InvalidRequest(format!("malformed upload id: {id:?}")));
        }

        let path = self.dir.join(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SttError::UploadNotFound(id.to_owned()));
            }
            Err(e) => return Err(SttError::Storage(e)),
        };

        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::warn!(id, error = %e, "failed to remove consumed upload");
        }

        Ok(StoredAudio {
            bytes,
            content_type: content_type_for(id).to_owned(),
            filename: id.to_owned(),
        })
    }
}

/// A valid handle is exactly what `save` produced: a UUID stem, optionally
/// followed by one dot and a short alphanumeric extension
fn is_valid_handle(id: &str) -> bool {
    let (stem, ext) = match id.split_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (id, None),
    };

    Uuid::parse_str(stem).is_ok() && ext.is_none_or(is_safe_extension)
}

fn sanitized_extension(filename: &str) -> Option<&str> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| is_safe_extension(ext))
}

fn is_safe_extension(ext: &str) -> bool {
    !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Best-effort MIME type from the preserved extension
fn content_type_for(id: &str) -> &'static str {
    match Path::new(id).extension().and_then(|ext| ext.to_str()) {
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("ogg") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "audio/wav",
    }
}
