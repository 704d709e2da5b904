//! HTTP API serving JSON-LD documents
//!
//! Each content type has an endpoint keyed by the record's external
//! identifier (`/dll-work/{id}?format=json-ld`). Any other path is treated
//! as a public alias and resolved back to its node when the same format flag
//! is present.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::catalog::MemoryCatalog;
use crate::error::JsonLdError;
use crate::format::dispatch;
use crate::record::{parse_node_path, ContentRecord, ContentType};
use crate::store::{AliasResolver, Lookups, RecordStore};

/// Value of the `format` query parameter that selects JSON-LD output
pub const JSON_LD_FORMAT: &str = "json-ld";

/// Shared, read-only server state
pub struct AppState {
    pub catalog: MemoryCatalog,
}

impl AppState {
    pub fn new(catalog: MemoryCatalog) -> Self {
        Self { catalog }
    }
}

type SharedState = Arc<AppState>;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FormatQuery {
    format: Option<String>,
}

impl FormatQuery {
    /// Read `format` from a raw query string. A repeated key keeps its last
    /// value; undecodable input never fails, it just won't match `json-ld`.
    pub fn from_raw(query: Option<&str>) -> Self {
        let format = query.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .filter(|(key, _)| key == "format")
                .map(|(_, value)| value.into_owned())
                .last()
        });
        Self { format }
    }

    fn is_json_ld(&self) -> bool {
        self.format.as_deref() == Some(JSON_LD_FORMAT)
    }
}

/// Build the API router.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/dll-author/:id", get(view_author))
        .route("/dll-work/:id", get(view_work))
        .route("/dll-item-record/:id", get(view_item_record))
        .route("/dll-web-page/:id", get(view_web_page))
        .fallback(view_alias)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(catalog: MemoryCatalog, addr: SocketAddr) -> Result<(), JsonLdError> {
    let app = build_router(Arc::new(AppState::new(catalog)));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| JsonLdError::Server(format!("Failed to bind {}: {}", addr, e)))?;

    info!(%addr, "Serving JSON-LD");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

// --- Per-type endpoints ---

async fn view_author(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    view(&state, ContentType::AuthorAuthority, &id, query.as_deref())
}

async fn view_work(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    view(&state, ContentType::Work, &id, query.as_deref())
}

async fn view_item_record(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    view(&state, ContentType::ItemRecord, &id, query.as_deref())
}

async fn view_web_page(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    view(&state, ContentType::WebPage, &id, query.as_deref())
}

fn view(state: &AppState, content_type: ContentType, id: &str, query: Option<&str>) -> Response {
    let query = FormatQuery::from_raw(query);
    if !query.is_json_ld() {
        debug!(%content_type, id, format = ?query.format, "Rejected format");
        return error_response(StatusCode::BAD_REQUEST, "Invalid format");
    }

    match state
        .catalog
        .load_by_type_and_external_id(content_type, id)
    {
        Some(record) => document_response(state, &record),
        None => {
            warn!(%content_type, id, "No record for identifier");
            error_response(StatusCode::NOT_FOUND, "Node not found")
        }
    }
}

// --- Alias lookup ---

async fn view_alias(
    State(state): State<SharedState>,
    uri: Uri,
    RawQuery(query): RawQuery,
) -> Response {
    if !FormatQuery::from_raw(query.as_deref()).is_json_ld() {
        return error_response(StatusCode::BAD_REQUEST, "Invalid format");
    }

    let internal_path = state.catalog.internal_path(uri.path());
    let record = parse_node_path(&internal_path).and_then(|nid| state.catalog.load(nid));
    match record {
        Some(record) => document_response(&state, &record),
        None => {
            warn!(path = uri.path(), "No node found for alias");
            error_response(StatusCode::NOT_FOUND, "Node not found")
        }
    }
}

// --- Responses ---

fn document_response(state: &AppState, record: &ContentRecord) -> Response {
    let doc = dispatch(record, Lookups::from_catalog(&state.catalog));
    info!(node = record.id, bundle = %record.bundle, "Formatted JSON-LD");

    let cache_tags = [format!("node:{}", record.id)];
    let cache_contexts = ["url.query_args:format"];
    let headers = [
        ("cache-control", "no-cache".to_string()),
        ("x-drupal-cache-tags", cache_tags.join(" ")),
        ("x-drupal-cache-contexts", cache_contexts.join(" ")),
        ("x-drupal-cache-max-age", "0".to_string()),
    ];
    (StatusCode::OK, headers, Json(doc)).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
