// src/ports/http.rs
//
// Flashcard endpoints. Store calls are blocking, so each one runs on the
// blocking pool; the connection it opens is dropped there before the
// response is built.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::error::{ApiError, Operation};
use crate::application::{FlashcardService, FlashcardStore};
use crate::config::ServerConfig;
use crate::constants::WELCOME_MESSAGE;
use crate::domain::{DomainError, Flashcard, FlashcardInput};

/// Service handle shared by all handlers
pub type SharedService<S> = Arc<FlashcardService<S>>;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// Router with the flashcard endpoints and the welcome route, no middleware
pub fn flashcard_routes<S>(service: SharedService<S>) -> Router
where
    S: FlashcardStore + 'static,
{
    Router::new()
        .route("/", get(welcome_handler))
        .route("/fetch", get(fetch_handler::<S>))
        .route("/add", post(add_handler::<S>))
        .route("/edit/:id", put(edit_handler::<S>))
        .route("/delete/:id", delete(delete_handler::<S>))
        .with_state(service)
}

/// Full application router: routes plus CORS and request tracing
pub fn router<S>(service: SharedService<S>, config: &ServerConfig) -> Result<Router>
where
    S: FlashcardStore + 'static,
{
    Ok(flashcard_routes(service)
        .layer(config.cors_layer()?)
        .layer(TraceLayer::new_for_http()))
}

async fn run_blocking<S, T, F>(service: SharedService<S>, op: F) -> Result<T, DomainError>
where
    S: FlashcardStore + 'static,
    T: Send + 'static,
    F: FnOnce(&FlashcardService<S>) -> Result<T, DomainError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(service.as_ref()))
        .await
        .map_err(|e| DomainError::Store(format!("Blocking task failed: {e}")))?
}

/// Decode a create or edit body. An empty body, or one not sent as JSON,
/// leaves both fields absent.
fn read_input(headers: &HeaderMap, body: &Bytes) -> Result<FlashcardInput, ApiError> {
    if body.is_empty() || !is_json(headers) {
        return Ok(FlashcardInput::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        ApiError::invalid_body()
    })
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

/// An id that is not an integer cannot match any row
fn read_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id).map_err(|rejection| {
        debug!(error = %rejection, "Unparseable flashcard id");
        ApiError::not_found()
    })
}

async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}

async fn fetch_handler<S>(
    State(service): State<SharedService<S>>,
) -> Result<Json<Vec<Flashcard>>, ApiError>
where
    S: FlashcardStore + 'static,
{
    let flashcards = run_blocking(service, |s| s.list_all())
        .await
        .map_err(|e| ApiError::from_domain(Operation::Fetch, e))?;
    Ok(Json(flashcards))
}

async fn add_handler<S>(
    State(service): State<SharedService<S>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError>
where
    S: FlashcardStore + 'static,
{
    let input = read_input(&headers, &body)?;
    run_blocking(service, move |s| s.create(input))
        .await
        .map_err(|e| ApiError::from_domain(Operation::Add, e))?;
    Ok((
        StatusCode::CREATED,
        MessageResponse::new("Flashcard added successfully"),
    ))
}

async fn edit_handler<S>(
    State(service): State<SharedService<S>>,
    id: Result<Path<i64>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError>
where
    S: FlashcardStore + 'static,
{
    let id = read_id(id)?;
    let input = read_input(&headers, &body)?;
    run_blocking(service, move |s| s.update(id, input))
        .await
        .map_err(|e| ApiError::from_domain(Operation::Edit, e))?;
    Ok(MessageResponse::new("Flashcard updated successfully"))
}

async fn delete_handler<S>(
    State(service): State<SharedService<S>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError>
where
    S: FlashcardStore + 'static,
{
    let id = read_id(id)?;
    run_blocking(service, move |s| s.delete(id))
        .await
        .map_err(|e| ApiError::from_domain(Operation::Delete, e))?;
    Ok(MessageResponse::new("Flashcard deleted successfully"))
}
