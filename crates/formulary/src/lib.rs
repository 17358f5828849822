#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod store;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use http::StatusCode;
use serde::{Deserialize, Serialize};

pub use error::FormularyError;
pub use store::{Catalog, FormularyStore};

/// Open the medication template store from configuration
///
/// # Errors
///
/// Returns an error if the catalog file exists but is corrupt
pub fn build_store(config: &scribe_config::FormularyConfig) -> Result<Arc<FormularyStore>, FormularyError> {
    let store = FormularyStore::open(&config.path)?;

    tracing::info!(
        path = %config.path.display(),
        categories = store.len(),
        "medication catalog loaded"
    );

    Ok(Arc::new(store))
}

/// Create the endpoint router for medication templates
pub fn endpoint_router() -> Router<Arc<FormularyStore>> {
    Router::new()
        .route("/v1/medications", get(list_medications).post(add_medication))
        .route("/v1/medications/search", post(search_medications))
}

/// Body of an add-medication request
#[derive(Debug, Serialize, Deserialize)]
pub struct AddMedicationRequest {
    /// Grouping label, e.g. a drug class
    pub category: String,
    /// Free-text dosage/instruction line
    pub medication: String,
}

/// Body of a medication search request
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchMedicationsRequest {
    /// Literal substring to match; empty matches everything
    #[serde(default)]
    pub keyword: String,
}

/// Search results as `[category] entry` lines
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchMedicationsResponse {
    pub results: Vec<String>,
}

/// Handle `GET /v1/medications`
async fn list_medications(State(store): State<Arc<FormularyStore>>) -> Json<Catalog> {
    Json(store.list_all())
}

/// Handle `POST /v1/medications`
async fn add_medication(
    State(store): State<Arc<FormularyStore>>,
    Json(request): Json<AddMedicationRequest>,
) -> Result<StatusCode, FormularyError> {
    store.add_entry(&request.category, &request.medication)?;
    Ok(StatusCode::CREATED)
}

/// Handle `POST /v1/medications/search`
async fn search_medications(
    State(store): State<Arc<FormularyStore>>,
    Json(request): Json<SearchMedicationsRequest>,
) -> Json<SearchMedicationsResponse> {
    Json(SearchMedicationsResponse {
        results: store.search(&request.keyword),
    })
}
