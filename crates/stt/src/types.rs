use serde::{Deserialize, Serialize};

/// Request sent to the transcription provider
#[derive(Debug)]
pub struct TranscriptionRequest {
    /// Raw audio data
    pub audio: Vec<u8>,
    /// Filename forwarded to the provider (carries the container format)
    pub filename: String,
    /// Content type of the audio file
    pub content_type: String,
    /// Language hint (ISO 639-1)
    pub language: Option<String>,
}

/// Transcription result, following the `OpenAI` Whisper response shape
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Transcribed text
    pub text: String,
}

/// Response for a stored audio upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Single-use handle for the transcription endpoint
    pub id: String,
    /// Original client-supplied filename
    pub filename: String,
}

/// Body of a transcription request referencing a stored upload
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscribeAudioRequest {
    /// Handle returned by the upload endpoint
    pub upload_id: String,
    /// Language hint override (ISO 639-1)
    #[serde(default)]
    pub language: Option<String>,
}
