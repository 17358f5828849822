//! Mock OpenAI-compatible backend for integration tests
//!
//! Serves canned transcription and chat-completion responses and records
//! what it received so tests can assert on the outbound requests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// Mock upstream that returns predictable responses
pub struct MockOpenAi {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

/// Fields captured from the last transcription request
#[derive(Debug, Clone, Default)]
pub struct CapturedTranscription {
    pub model: String,
    pub language: Option<String>,
    pub filename: String,
    pub audio_bytes: usize,
}

struct MockState {
    transcription_count: AtomicU32,
    completion_count: AtomicU32,
    /// Number of requests to fail with 500 before succeeding (0 = never fail)
    fail_count: AtomicU32,
    transcript_text: String,
    note_text: String,
    last_transcription: Mutex<Option<CapturedTranscription>>,
    last_chat_request: Mutex<Option<serde_json::Value>>,
}

impl MockOpenAi {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(0).await
    }

    /// Start a mock server that fails the first `n` requests with 500
    pub async fn start_failing(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(n).await
    }

    async fn start_inner(fail_count: u32) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            transcription_count: AtomicU32::new(0),
            completion_count: AtomicU32::new(0),
            fail_count: AtomicU32::new(fail_count),
            transcript_text: "Patient reports fever since Tuesday.".to_owned(),
            note_text: "S (Subjective):\n- Fever since Tuesday".to_owned(),
            last_transcription: Mutex::new(None),
            last_chat_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/audio/transcriptions", routing::post(handle_transcriptions))
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since clients append paths like `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Canned transcription text the mock returns
    pub fn transcript_text(&self) -> &str {
        &self.state.transcript_text
    }

    /// Canned note text the mock returns
    pub fn note_text(&self) -> &str {
        &self.state.note_text
    }

    /// Number of transcription requests received
    pub fn transcription_count(&self) -> u32 {
        self.state.transcription_count.load(Ordering::Relaxed)
    }

    /// Number of chat completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Fields of the last transcription request, if any
    pub fn last_transcription(&self) -> Option<CapturedTranscription> {
        self.state.last_transcription.lock().unwrap().clone()
    }

    /// Body of the last chat completion request, if any
    pub fn last_chat_request(&self) -> Option<serde_json::Value> {
        self.state.last_chat_request.lock().unwrap().clone()
    }
}

impl Drop for MockOpenAi {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn take_failure(state: &MockState) -> bool {
    if state.fail_count.load(Ordering::Relaxed) > 0 {
        state.fail_count.fetch_sub(1, Ordering::Relaxed);
        return true;
    }
    false
}

fn failure_response() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({
            "error": {
                "message": "mock server intentional failure",
                "type": "server_error"
            }
        })),
    )
        .into_response()
}

async fn handle_transcriptions(State(state): State<Arc<MockState>>, mut multipart: Multipart) -> impl IntoResponse {
    state.transcription_count.fetch_add(1, Ordering::Relaxed);

    if take_failure(&state) {
        return failure_response();
    }

    let mut captured = CapturedTranscription::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        match field.name() {
            Some("file") => {
                captured.filename = field.file_name().unwrap_or_default().to_owned();
                captured.audio_bytes = field.bytes().await.map(|b| b.len()).unwrap_or(0);
            }
            Some("model") => captured.model = field.text().await.unwrap_or_default(),
            Some("language") => captured.language = field.text().await.ok(),
            _ => {}
        }
    }

    *state.last_transcription.lock().unwrap() = Some(captured);

    Json(serde_json::json!({ "text": state.transcript_text })).into_response()
}

async fn handle_chat_completions(
    State(state): State<Arc<MockState>>,
    Json(request): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    if take_failure(&state) {
        return failure_response();
    }

    *state.last_chat_request.lock().unwrap() = Some(request.clone());

    let model = request.get("model").and_then(|m| m.as_str()).unwrap_or("unknown");

    Json(serde_json::json!({
        "id": "chatcmpl-test-123",
        "object": "chat.completion",
        "created": 1_700_000_000u64,
        "model": model,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": state.note_text },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
    }))
    .into_response()
}
