//! Route handlers for the `/Words` API.
//!
//! Each handler hands its work to a blocking worker, since the service does
//! file I/O and scanning synchronously.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use super::error::ApiErrorResponse;
use crate::requests::{
    CleanMergeResponse, LookupItem, MergeResponse, SearchRequest, UpdateWordsRequest, UpdateWordsResponse,
};
use crate::scanner::ScanResult;
use crate::service::{ServiceError, WordService};

/// Shared handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: Arc<WordService>,
}

impl AppState {
    #[must_use]
    pub fn new(service: WordService) -> Self {
        Self { service: Arc::new(service) }
    }
}

/// Query parameters for `GET /Words/List`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub include: bool,
}

/// Query parameters for `GET /Words/LookupWord`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupQuery {
    pub word: String,
    #[serde(default)]
    pub exact_match: bool,
}

async fn run_blocking<T, F>(state: &AppState, job: F) -> Result<T, ApiErrorResponse>
where
    T: Send + 'static,
    F: FnOnce(&WordService) -> Result<T, ServiceError> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || job(&service))
        .await
        .map_err(|e| ApiErrorResponse::internal_error(format!("worker failed: {e}")))?
        .map_err(ApiErrorResponse::from)
}

/// `POST /Words/Search`: ranked words traceable in the posted grid.
///
/// # Errors
///
/// - **400**: body is not a valid search request
/// - **500**: dictionary missing or empty
pub async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ScanResult>, ApiErrorResponse> {
    let Json(request) = payload?;
    let result = run_blocking(&state, move |service| service.search(&request)).await?;
    Ok(Json(result))
}

/// `POST /Words/Update`: append words to the include or exclude list.
///
/// # Errors
///
/// - **400**: body is not a valid update request
/// - **500**: list could not be written
pub async fn update(
    State(state): State<AppState>,
    payload: Result<Json<UpdateWordsRequest>, JsonRejection>,
) -> Result<Json<UpdateWordsResponse>, ApiErrorResponse> {
    let Json(request) = payload?;
    let added_count = run_blocking(&state, move |service| service.update_words(&request)).await?;
    Ok(Json(UpdateWordsResponse { added_count }))
}

/// `GET /Words/List?include=bool`
///
/// # Errors
///
/// - **500**: list missing or unreadable
pub async fn get_list(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiErrorResponse> {
    let Query(query) = query?;
    let words = run_blocking(&state, move |service| service.get_list(query.include)).await?;
    Ok(Json(words))
}

/// `POST /Words/Merge`
///
/// # Errors
///
/// - **500**: include list missing, or a list could not be written
pub async fn merge(State(state): State<AppState>) -> Result<Json<MergeResponse>, ApiErrorResponse> {
    let response = run_blocking(&state, WordService::merge_words).await?;
    Ok(Json(response))
}

/// `POST /Words/CleanMerge`
///
/// # Errors
///
/// - **500**: merged list missing, or the cleaned list could not be written
pub async fn clean_merge(State(state): State<AppState>) -> Result<Json<CleanMergeResponse>, ApiErrorResponse> {
    let message = run_blocking(&state, WordService::clean_merge).await?;
    Ok(Json(CleanMergeResponse { message }))
}

/// `GET /Words/LookupWord?word=..&exactMatch=bool`
///
/// # Errors
///
/// - **400**: `word` missing
pub async fn lookup_word(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Result<Json<Vec<LookupItem>>, ApiErrorResponse> {
    let Query(query) = query?;
    let items = run_blocking(&state, move |service| {
        Ok(service.lookup_word(&query.word, query.exact_match))
    })
    .await?;
    Ok(Json(items))
}
