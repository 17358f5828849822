#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod prompt;
mod protocol;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

pub use client::NotesClient;
pub use error::NotesError;
pub use prompt::{ASSESSMENT_PLACEHOLDER, PLAN_PLACEHOLDER};

/// Shared state for the note generation route
pub struct NotesState {
    client: NotesClient,
    default_department: String,
}

/// Build the note generation subsystem from configuration
pub fn build_state(config: &scribe_config::NotesConfig) -> Arc<NotesState> {
    Arc::new(NotesState {
        client: NotesClient::new(config),
        default_department: config.default_department.clone(),
    })
}

/// Create the endpoint router for note generation
pub fn endpoint_router() -> Router<Arc<NotesState>> {
    Router::new().route("/v1/notes", post(generate_note))
}

/// Body of a note generation request
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteRequest {
    /// Encounter transcript to extract from
    pub transcript: String,
    /// Department label; falls back to the configured default
    #[serde(default)]
    pub department: Option<String>,
}

/// Generated SOAP note
#[derive(Debug, Serialize, Deserialize)]
pub struct NoteResponse {
    /// The formatted note text
    pub note: String,
}

/// Handle `POST /v1/notes`
async fn generate_note(
    State(state): State<Arc<NotesState>>,
    Json(request): Json<NoteRequest>,
) -> Result<Json<NoteResponse>, NotesError> {
    if request.transcript.trim().is_empty() {
        return Err(NotesError::InvalidRequest("transcript must not be empty".to_owned()));
    }

    let department = request.department.as_deref().unwrap_or(&state.default_department);

    let note = state.client.generate(&request.transcript, department).await?;

    Ok(Json(NoteResponse { note }))
}
