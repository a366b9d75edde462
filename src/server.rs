use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{EmptySearchResponse, SearchResponse};
use crate::config::ServerConfig;
use crate::error::SearchError;
use crate::hive::HiveApi;
use crate::search::{SearchCriteria, SearchOutcome, SearchPipeline};

pub const SEARCH_ROUTE: &str = "/find-spanish-posts-last-6-days";

#[derive(Clone)]
struct AppState {
    pipeline: Arc<SearchPipeline>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(rename = "initialFetchLimit")]
    initial_fetch_limit: Option<String>,
}

pub fn build_router(hive: Arc<dyn HiveApi>) -> Router {
    let state = AppState {
        pipeline: Arc::new(SearchPipeline::new(hive, SearchCriteria::default())),
    };

    Router::new()
        .route("/health", get(health))
        .route(SEARCH_ROUTE, get(search_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: &ServerConfig, hive: Arc<dyn HiveApi>) -> std::io::Result<()> {
    let app = build_router(hive);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    info!(addr = %listener.local_addr()?, "hive spanish post search listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn search_handler(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Response, SearchError> {
    let criteria = state.pipeline.criteria();
    // Repeated or undecodable parameters get the same answer as an out-of-range value.
    let Query(query) = query.map_err(|_| criteria.invalid_fetch_limit())?;
    let limit = criteria.parse_fetch_limit(query.initial_fetch_limit.as_deref())?;

    let response = match state.pipeline.run(limit).await? {
        SearchOutcome::Empty => Json(EmptySearchResponse::for_tag(criteria.tag)).into_response(),
        SearchOutcome::Found(results) => {
            Json(SearchResponse::new(criteria, limit, results)).into_response()
        }
    };
    Ok(response)
}
