#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod types;
mod uploads;

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};

pub use client::WhisperClient;
pub use error::SttError;
pub use types::{TranscribeAudioRequest, TranscriptionRequest, TranscriptionResponse, UploadResponse};
pub use uploads::{StoredAudio, UploadStore};

/// Shared state for the audio routes
pub struct AudioState {
    client: WhisperClient,
    uploads: UploadStore,
    default_language: Option<String>,
}

/// Build the audio subsystem from configuration
///
/// Creates the upload directory and constructs the provider client.
pub fn build_state(config: &scribe_config::SttConfig) -> Result<Arc<AudioState>, SttError> {
    let uploads = UploadStore::new(&config.upload_dir)?;
    let client = WhisperClient::new(config);

    tracing::debug!(
        upload_dir = %config.upload_dir.display(),
        model = %config.model,
        "audio subsystem initialized"
    );

    Ok(Arc::new(AudioState {
        client,
        uploads,
        default_language: config.language.clone(),
    }))
}

/// Create the endpoint router for audio upload and transcription
pub fn endpoint_router(max_upload_bytes: usize) -> Router<Arc<AudioState>> {
    Router::new()
        .route("/v1/audio/uploads", post(upload_audio))
        .route("/v1/audio/transcriptions", post(transcribe_audio))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

/// Handle audio uploads: store the file, hand back a single-use handle
async fn upload_audio(
    State(state): State<Arc<AudioState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, SttError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| SttError::InvalidRequest(format!("failed to parse multipart form: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("audio.wav").to_owned();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| SttError::InvalidRequest(format!("failed to read audio data: {e}")))?;

        if bytes.is_empty() {
            return Err(SttError::InvalidRequest("uploaded audio file is empty".to_owned()));
        }

        let id = state.uploads.save(&filename, &bytes).await?;

        return Ok(Json(UploadResponse { id, filename }));
    }

    Err(SttError::InvalidRequest(
        "missing required 'file' field in multipart form".to_owned(),
    ))
}

/// Handle transcription: consume the stored upload and call the provider
///
/// The upload is removed as it is read, so no audio persists past this
/// request regardless of the provider outcome.
async fn transcribe_audio(
    State(state): State<Arc<AudioState>>,
    Json(request): Json<TranscribeAudioRequest>,
) -> Result<Json<TranscriptionResponse>, SttError> {
    let audio = state.uploads.take(&request.upload_id).await?;

    let language = request.language.or_else(|| state.default_language.clone());

    let response = state
        .client
        .transcribe(TranscriptionRequest {
            audio: audio.bytes,
            filename: audio.filename,
            content_type: audio.content_type,
            language,
        })
        .await?;

    Ok(Json(response))
}
