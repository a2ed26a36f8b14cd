//! Show HTTP Routes
//!
//! CRUD endpoints over the `shows` collection.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::envelope::Envelope;
use super::errors::{ApiError, ApiResult};
use crate::shows::{self, NewShow, ShowPatch, COLLECTION};
use crate::store::{MockStore, RecordId};

const NO_SUCH_SHOW: &str = "No show with this id exists";
const NO_SHOWS_WITH_MIN: &str = "No shows with with at least the minimum episodes";

// ==================
// Shared State
// ==================

/// Show state shared across handlers
pub struct ShowsState {
    pub store: Arc<MockStore>,
}

impl ShowsState {
    pub fn new(store: Arc<MockStore>) -> Self {
        Self { store }
    }
}

impl Default for ShowsState {
    fn default() -> Self {
        Self::new(Arc::new(MockStore::new()))
    }
}

// ==================
// Request Types
// ==================

#[derive(Debug, Default, Deserialize)]
pub struct ListShowsQuery {
    #[serde(default, rename = "minEpisodes")]
    pub min_episodes: Option<String>,
}

impl ListShowsQuery {
    /// Parsed `minEpisodes`. An empty value means no filter.
    fn min_episodes(&self) -> ApiResult<Option<i64>> {
        match self.min_episodes.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| {
                ApiError::BadRequest(format!("minEpisodes must be an integer, got '{}'", raw))
            }),
        }
    }
}

// ==================
// Show Routes
// ==================

/// Create show routes
pub fn show_routes(state: Arc<ShowsState>) -> Router {
    Router::new()
        .route("/shows", get(list_shows_handler).post(create_show_handler))
        .route(
            "/shows/:id",
            get(get_show_handler)
                .put(update_show_handler)
                .delete(delete_show_handler),
        )
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Ids that do not parse can never name a record
fn parse_id(raw: &str) -> ApiResult<RecordId> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(NO_SUCH_SHOW.to_string()))
}

fn not_found(id: RecordId) -> ApiError {
    tracing::debug!(id, "show not found");
    ApiError::NotFound(NO_SUCH_SHOW.to_string())
}

// ==================
// Handlers
// ==================

async fn list_shows_handler(
    State(state): State<Arc<ShowsState>>,
    query: Result<Query<ListShowsQuery>, QueryRejection>,
) -> ApiResult<Envelope> {
    let Query(query) = query?;
    let all = state.store.get(COLLECTION);

    let shows = match query.min_episodes()? {
        None => all,
        Some(min) => {
            let filtered = shows::min_episodes_filter(all, min);
            if filtered.is_empty() {
                return Err(ApiError::NotFound(NO_SHOWS_WITH_MIN.to_string()));
            }
            filtered
        }
    };

    Ok(Envelope::ok(&json!({ "shows": shows }))?)
}

async fn create_show_handler(
    State(state): State<Arc<ShowsState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Envelope> {
    let Json(body) = body?;
    let show = NewShow::from_body(&body)?;

    let record = state.store.create(COLLECTION, show.into_fields());
    tracing::info!(id = record.id, "show created");

    Ok(Envelope::with_result(record.into_object()).with_status(StatusCode::CREATED))
}

async fn get_show_handler(
    State(state): State<Arc<ShowsState>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Envelope> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    let record = state
        .store
        .get_by_id(COLLECTION, id)
        .ok_or_else(|| not_found(id))?;

    Ok(Envelope::with_result(record.into_object()))
}

async fn delete_show_handler(
    State(state): State<Arc<ShowsState>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Envelope> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    state
        .store
        .delete_by_id(COLLECTION, id)
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "show deleted");

    Ok(Envelope::message(StatusCode::OK, "Show deleted"))
}

async fn update_show_handler(
    State(state): State<Arc<ShowsState>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Envelope> {
    let Path(id) = id?;
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let patch = ShowPatch::from_body(&body)?;

    let record = state
        .store
        .update_by_id(COLLECTION, id, patch.into_fields())
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "show updated");

    Ok(Envelope::with_result(record.into_object()).with_status(StatusCode::CREATED))
}
